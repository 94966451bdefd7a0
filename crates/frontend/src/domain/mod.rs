pub mod a001_category;
pub mod a002_ml_category;
pub mod a003_category_channel;
