use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog category. Categories form a tree: `parent_id = None` marks a root,
/// `is_final` marks a leaf that can carry products and marketplace links.
/// `id = 0` marks a category that has not been persisted yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub is_final: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category for insertion (backend assigns the id)
    pub fn new_for_insert(name: String, parent_id: Option<i32>, is_final: bool) -> Self {
        Self {
            id: 0,
            name,
            parent_id,
            is_final,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// True when this category can act as a parent of others
    pub fn is_intermediate(&self) -> bool {
        !self.is_final
    }

    /// Validate before save
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.is_persisted() && self.parent_id == Some(self.id) {
            return Err("A category cannot be its own parent".into());
        }
        Ok(())
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Returned by the save endpoint; carries the persisted id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySaveResponse {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape_without_timestamps() {
        let json = r#"{"id":7,"name":"Eletrônicos","parent_id":null,"is_final":false}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Eletrônicos");
        assert_eq!(category.parent_id, None);
        assert!(!category.is_final);
        assert_eq!(category.created_at, None);
    }

    #[test]
    fn deserializes_child_with_parent() {
        let json = r#"{"id":12,"name":"Celulares","parent_id":7,"is_final":true,"created_at":"2024-03-01T12:00:00Z"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.parent_id, Some(7));
        assert!(category.is_final);
        assert!(category.created_at.is_some());
    }

    #[test]
    fn new_for_insert_is_not_persisted() {
        let category = Category::new_for_insert("Livros".to_string(), None, true);
        assert_eq!(category.id, 0);
        assert!(!category.is_persisted());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut category = Category::new_for_insert("  ".to_string(), None, true);
        assert!(category.validate().is_err());
        category.name = "Livros".to_string();
        assert!(category.validate().is_ok());
    }

    #[test]
    fn validate_rejects_self_parent() {
        let category = Category {
            id: 3,
            name: "Áudio".to_string(),
            parent_id: Some(3),
            is_final: false,
            created_at: None,
            updated_at: None,
        };
        assert!(category.validate().is_err());
    }

    #[test]
    fn serializes_snake_case_fields() {
        let category = Category::new_for_insert("Games".to_string(), Some(2), true);
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["parent_id"], 2);
        assert_eq!(json["is_final"], true);
    }
}
