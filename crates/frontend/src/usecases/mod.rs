pub mod u101_link_ml_category;
