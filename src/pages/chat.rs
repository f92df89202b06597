//! Interactive view shown to an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reports logout and token invalidation back into the session; the
//! navigation controller reacts by returning to the entry view.

use leptos::prelude::*;

use crate::components::Notice;
use crate::config::AppConfig;
use crate::state::session::{self, SessionState};

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<AppConfig>();
    let info = RwSignal::new(String::new());

    // Confirm the token is still accepted; a 401 invalidates the session.
    #[cfg(feature = "csr")]
    {
        if let Some(token) = session.with_untracked(|s| s.credentials().map(|c| c.token.clone())) {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&config, &token).await {
                    Ok(Some(_)) => {}
                    Ok(None) => session::invalidate(session),
                    Err(e) => {
                        log::warn!("profile check failed: {e}");
                        info.set("Could not reach the server.".to_owned());
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = &config;

    let email = move || session.with(|s| s.credentials().map(|c| c.email.clone()).unwrap_or_default());

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <span class="chat-page__user">{email}</span>
                <button class="chat-page__logout" on:click=move |_| session::invalidate(session)>
                    "Log out"
                </button>
            </header>
            <Notice message=info/>
        </div>
    }
}
