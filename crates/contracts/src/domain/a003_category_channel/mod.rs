pub mod aggregate;

pub use aggregate::{CategoryChannelLink, SaveCategoryChannelRequest};
