use contracts::domain::a003_category_channel::{CategoryChannelLink, SaveCategoryChannelRequest};

use crate::shared::api_client::ApiClient;

/// Look up the link for a (category, channel) pair. Absence is the
/// normal state for an unlinked category and comes back as `Ok(None)`.
pub async fn fetch_link(
    api: &ApiClient,
    category_id: i32,
    channel_id: i32,
) -> Result<Option<CategoryChannelLink>, String> {
    api.get_json_opt(&format!(
        "/api/CategoriesChannels/GetByCategoryAndChannel?categoryId={}&channelId={}",
        category_id, channel_id
    ))
    .await
}

/// Upsert the link. The backend owns uniqueness per (category, channel);
/// saving again for the same pair overwrites the previous link.
pub async fn save_link(api: &ApiClient, request: &SaveCategoryChannelRequest) -> Result<(), String> {
    let _response: serde_json::Value = api
        .post_json("/api/CategoriesChannels/SaveCategoryChannel", request)
        .await?;
    Ok(())
}
