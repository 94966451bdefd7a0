use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Node of the Mercado Livre category tree, as served by the marketplace
/// proxy endpoint. Ids are marketplace-assigned strings ("MLB1051").
/// A node with no children is selectable as a link target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MlCategory {
    #[serde(rename = "mlId")]
    pub ml_id: String,

    pub name: String,

    #[serde(rename = "parentMlId", default)]
    pub parent_ml_id: Option<String>,

    // The feed sends leaves with "children": null or no field at all
    #[serde(default, deserialize_with = "children_or_empty")]
    pub children: Vec<MlCategory>,
}

impl MlCategory {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn children_or_empty<'de, D>(deserializer: D) -> Result<Vec<MlCategory>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Vec<MlCategory>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// ============================================================================
// Responses
// ============================================================================

/// The tree endpoint returns either a single root object or a bare array
/// of roots, depending on the marketplace snapshot. Normalize with
/// [`MlCategoryTree::into_forest`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MlCategoryTree {
    Root(MlCategory),
    Forest(Vec<MlCategory>),
}

impl MlCategoryTree {
    pub fn into_forest(self) -> Vec<MlCategory> {
        match self {
            MlCategoryTree::Root(root) => vec![root],
            MlCategoryTree::Forest(roots) => roots,
        }
    }
}
