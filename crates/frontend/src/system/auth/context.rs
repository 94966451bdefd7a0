use contracts::system::auth::UserData;
use leptos::prelude::*;

use super::storage;

/// Session state shared through context.
///
/// Holds the signed-in identity; the token itself stays in localStorage
/// and is attached per request by the API client. Dropping the identity
/// to `None` flips the shell back to the login page.
#[derive(Clone, Copy)]
pub struct AuthSession {
    user: RwSignal<Option<UserData>>,
}

impl AuthSession {
    /// Restore a previous session from localStorage, if any
    pub fn restore() -> Self {
        let user = match storage::get_token() {
            Some(_) => storage::get_user(),
            None => None,
        };
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn user(&self) -> Option<UserData> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Store credentials after a successful login
    pub fn login(&self, token: &str, user_data: UserData) {
        storage::save_token(token);
        storage::save_user(&user_data);
        self.user.set(Some(user_data));
    }

    /// Clear the session on explicit logout
    pub fn logout(&self) {
        storage::clear();
        self.user.set(None);
    }

    /// Drop the session after the backend rejected the token
    pub fn expire(&self) {
        log::warn!("Session rejected by backend, returning to login");
        storage::clear();
        self.user.set(None);
    }
}

/// Hook to access the session from any component
pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>().expect("AuthSession not provided in context")
}
