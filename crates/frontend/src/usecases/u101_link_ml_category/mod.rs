pub mod flow;
pub mod view;

pub use view::LinkMlCategoryFlow;
