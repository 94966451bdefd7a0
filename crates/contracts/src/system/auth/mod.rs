use serde::{Deserialize, Serialize};

/// Login payload. The auth endpoint expects PascalCase field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Organization")]
    pub organization: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Password")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: i64,
}

/// Identity persisted client-side for display after login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    pub organization: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_pascal_case() {
        let request = LoginRequest {
            organization: "acme".to_string(),
            user: "maria".to_string(),
            password: "s3cret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Organization"], "acme");
        assert_eq!(json["User"], "maria");
        assert_eq!(json["Password"], "s3cret");
    }

    #[test]
    fn auth_response_deserializes() {
        let json = r#"{"token":"abc.def.ghi","expires_in":3600}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.expires_in, 3600);
    }

    #[test]
    fn user_data_round_trips_through_storage_json() {
        let data = UserData {
            organization: "acme".to_string(),
            user: "maria".to_string(),
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
