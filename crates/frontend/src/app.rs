use crate::app_shell::AppShell;
use crate::shared::api_client::ApiClient;
use crate::shared::api_utils::api_base;
use crate::shared::notify::{NotifyService, ToastHost};
use crate::system::auth::context::AuthSession;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session is restored from local storage before anything renders, so
    // a reload keeps the user signed in.
    let session = AuthSession::restore();
    provide_context(session);

    // One API client for the whole app; it reads the token from storage
    // and expires the session on 401.
    provide_context(ApiClient::new(api_base(), session));

    // Provide NotifyService for centralized toast notifications
    provide_context(NotifyService::new());

    view! {
        <AppShell />
        <ToastHost />
    }
}
