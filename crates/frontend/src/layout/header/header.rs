use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_auth();

    let signed_in_as = move || {
        session
            .user()
            .map(|u| format!("{} / {}", u.organization, u.user))
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Catalog Admin"</span>
            </div>
            <div class="header__actions">
                <span class="header__user">{signed_in_as}</span>
                <button
                    class="button button--ghost"
                    aria-label="Sign out"
                    on:click=move |_| session.logout()
                >
                    {icon("logout")}
                    {"Sign out"}
                </button>
            </div>
        </header>
    }
}
