//! Entry view: sign in or register with email and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::{Notice, TextField};
use crate::config::AppConfig;
use crate::state::session::SessionState;

pub const MIN_PASSWORD_LEN: usize = 6;

fn normalize_email(raw: &str) -> String {
    raw.trim().to_owned()
}

/// Sign-in only needs both fields present.
fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = normalize_email(email);
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email, password.to_owned()))
}

/// Registration applies the account rules up front.
fn validate_register_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let (email, password) = validate_sign_in_input(email, password)?;
    if !email.contains('@') {
        return Err("Malformed email.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email, password))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    SignIn,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<AppConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let stored_config = StoredValue::new(config.clone());

    let submit = move |action: Action| {
        if busy.get() {
            return;
        }
        let checked = match action {
            Action::SignIn => validate_sign_in_input(&email.get(), &password.get()),
            Action::Register => validate_register_input(&email.get(), &password.get()),
        };
        let (email_value, password_value) = match checked {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(match action {
            Action::SignIn => "Signing in...".to_owned(),
            Action::Register => "Registering...".to_owned(),
        });

        #[cfg(feature = "csr")]
        {
            let config = stored_config.get_value();
            leptos::task::spawn_local(async move {
                match action {
                    Action::SignIn => match crate::net::api::sign_in(&config, &email_value, &password_value).await {
                        // The navigation controller moves to /chat once the session flips.
                        Ok(user) => crate::state::session::sign_in(session, user),
                        Err(e) => info.set(format!("Sign in failed: {e}")),
                    },
                    Action::Register => match crate::net::api::register(&config, &email_value, &password_value).await {
                        Ok(_) => {
                            password.set(String::new());
                            info.set("Registered. Sign in to continue.".to_owned());
                        }
                        Err(e) => info.set(format!("Registration failed: {e}")),
                    },
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (stored_config, session, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{config.title.clone()}</h1>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit(Action::SignIn);
                    }
                >
                    <TextField label="Email" value=email input_type="email" placeholder="you@example.com"/>
                    <TextField label="Password" value=password input_type="password"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                    <button
                        class="login-button login-button--secondary"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| submit(Action::Register)
                    >
                        "Register"
                    </button>
                </form>
                <Notice message=info/>
            </div>
        </div>
    }
}
