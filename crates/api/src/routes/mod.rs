pub mod health;
pub mod slots;
pub mod ui;
