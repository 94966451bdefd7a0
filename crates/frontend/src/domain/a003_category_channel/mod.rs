pub mod api;
pub mod link;
