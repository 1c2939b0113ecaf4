pub mod slots;
pub mod ui;
