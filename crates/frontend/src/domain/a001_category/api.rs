use contracts::domain::a001_category::{Category, CategorySaveResponse};

use crate::shared::api_client::ApiClient;

/// Fetch the whole category list
pub async fn fetch_categories(api: &ApiClient) -> Result<Vec<Category>, String> {
    api.get_json("/api/Categories").await
}

/// Fetch one category by id
pub async fn fetch_category(api: &ApiClient, id: i32) -> Result<Category, String> {
    api.get_json(&format!("/api/Categories/{}", id)).await
}

/// Create or update; the backend keys off `id` (0 means create)
pub async fn save_category(
    api: &ApiClient,
    category: &Category,
) -> Result<CategorySaveResponse, String> {
    api.post_json("/api/Categories", category).await
}

/// Delete by id
pub async fn delete_category(api: &ApiClient, id: i32) -> Result<(), String> {
    api.delete(&format!("/api/Categories/{}", id)).await
}
