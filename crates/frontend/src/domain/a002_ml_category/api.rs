use contracts::domain::a002_ml_category::{MlCategory, MlCategoryTree};

use crate::shared::api_client::ApiClient;

/// Fetch the marketplace category tree, normalized to a forest.
///
/// The endpoint returns one root object or a bare array depending on
/// the snapshot; both shapes land here as a list of top-level nodes.
pub async fn fetch_category_tree(api: &ApiClient) -> Result<Vec<MlCategory>, String> {
    let tree: MlCategoryTree = api.get_json("/api/MercadoLivre/GetCategoryTree").await?;
    Ok(tree.into_forest())
}
