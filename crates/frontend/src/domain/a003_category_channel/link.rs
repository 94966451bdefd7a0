use contracts::domain::a001_category::Category;
use contracts::domain::a003_category_channel::CategoryChannelLink;

/// Gate for the linking flow: only final categories may carry a link.
/// Checked before any network call or modal opens.
pub fn validate_linkable(category: &Category) -> Result<(), String> {
    if !category.is_final {
        return Err(format!(
            "\"{}\" is an intermediate category; only final categories can be linked",
            category.name
        ));
    }
    Ok(())
}

/// Collapse a link lookup for display purposes.
///
/// A failed lookup must not toast on every rendered row; the failure is
/// logged to the console and the category renders as "not linked".
pub fn link_for_display(
    result: Result<Option<CategoryChannelLink>, String>,
    category_id: i32,
) -> Option<CategoryChannelLink> {
    match result {
        Ok(link) => link,
        Err(e) => {
            log::warn!("Link lookup failed for category {}: {}", category_id, e);
            None
        }
    }
}
