pub mod range;
pub mod slot;
