use contracts::system::auth::{AuthResponse, LoginRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Authenticate with organization, user and password.
///
/// The only call that goes out without a bearer token.
pub async fn login(
    organization: String,
    user: String,
    password: String,
) -> Result<AuthResponse, String> {
    let request = LoginRequest {
        organization,
        user,
        password,
    };

    let response = Request::post(&format!("{}/api/Auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
