pub mod api;
pub mod hierarchy;
pub mod ui;
