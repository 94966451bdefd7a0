pub mod aggregate;

pub use aggregate::{Category, CategorySaveResponse};
