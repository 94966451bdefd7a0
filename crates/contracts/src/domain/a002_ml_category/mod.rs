pub mod aggregate;

pub use aggregate::{MlCategory, MlCategoryTree};
