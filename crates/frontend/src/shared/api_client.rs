use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::AuthSession;
use crate::system::auth::storage;

/// HTTP client for the backend REST API.
///
/// Constructed once at application start and handed to components via
/// context. Attaches the bearer token from storage to every request and
/// expires the session on any 401, which flips the shell back to the
/// login page regardless of which call hit the rejection.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: AuthSession,
}

impl ApiClient {
    pub fn new(base: String, session: AuthSession) -> Self {
        Self { base, session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match storage::get_token() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    fn check_status(&self, response: &Response) -> Result<(), String> {
        if response.status() == 401 {
            self.session.expire();
            return Err("Session expired".to_string());
        }
        if !response.ok() {
            return Err(format!("Request failed: {}", response.status()));
        }
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        self.check_status(&response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// GET where 404 means "does not exist" rather than an error
    pub async fn get_json_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, String> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        if response.status() == 404 {
            return Ok(None);
        }
        self.check_status(&response)?;
        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, String>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        self.check_status(&response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        self.check_status(&response)
    }
}

/// Shorthand for pulling the client out of context
pub fn use_api() -> ApiClient {
    leptos::prelude::use_context::<ApiClient>().expect("ApiClient not provided in context")
}
