//! Application shell - root components
//!
//! Contains:
//! - `AppShell` - auth gate (shows LoginPage or MainLayout)
//! - `MainLayout` - header plus the category browser work area

use crate::domain::a001_category::ui::browser::CategoryBrowser;
use crate::layout::Header;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main application layout: header on top, content area below.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="content-area">
                <CategoryBrowser />
            </main>
        </div>
    }
}

/// Application shell - auth gate component.
///
/// Shows:
/// - `LoginPage` when nobody is signed in
/// - `MainLayout` once authenticated
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
