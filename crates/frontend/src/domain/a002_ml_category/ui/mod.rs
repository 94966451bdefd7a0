pub mod tree_browser;

pub use tree_browser::MlCategoryTreeBrowser;
