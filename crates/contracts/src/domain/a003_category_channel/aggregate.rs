use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Link between a catalog category and a sales-channel category.
/// `category_channel_id` holds the channel-side id (the Mercado Livre
/// `mlId` for channel 1). One link per (category, channel) pair; saving
/// again replaces the previous link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryChannelLink {
    pub category_channel_id: String,
    pub category_id: i32,
    pub channel_id: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Requests
// ============================================================================

/// Payload for the upsert endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCategoryChannelRequest {
    pub category_channel_id: String,
    pub category_id: i32,
    pub channel_id: i32,
}

impl SaveCategoryChannelRequest {
    pub fn new(category_channel_id: String, category_id: i32, channel_id: i32) -> Self {
        Self {
            category_channel_id,
            category_id,
            channel_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_link_without_timestamps() {
        let json = r#"{"category_channel_id":"MLB1055","category_id":12,"channel_id":1}"#;
        let link: CategoryChannelLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.category_channel_id, "MLB1055");
        assert_eq!(link.category_id, 12);
        assert_eq!(link.channel_id, 1);
        assert_eq!(link.updated_at, None);
    }

    #[test]
    fn save_request_serializes_snake_case() {
        let request = SaveCategoryChannelRequest::new("MLB1055".to_string(), 12, 1);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["category_channel_id"], "MLB1055");
        assert_eq!(json["category_id"], 12);
        assert_eq!(json["channel_id"], 1);
    }
}
