//! REST API helpers for the account endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with a display-ready message instead of
//! panics, so a failed sign-in leaves the entry view usable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::AppConfig;
#[cfg(feature = "csr")]
use super::types::{ApiMessage, UserRequest};

/// Header carrying the session token on authenticated requests.
pub const TOKEN_HEADER: &str = "X-TOKEN";

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

/// Sign in via `POST /sign-in`.
///
/// # Errors
///
/// Returns the server's message (or a transport error) on failure.
pub async fn sign_in(config: &AppConfig, email: &str, password: &str) -> Result<User, String> {
    post_credentials(&config.endpoint(SIGN_IN_PATH), email, password).await
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns the server's message (or a transport error) on failure.
pub async fn register(config: &AppConfig, email: &str, password: &str) -> Result<User, String> {
    post_credentials(&config.endpoint(REGISTER_PATH), email, password).await
}

/// Check a token against `GET /profile`.
///
/// Returns `Ok(None)` when the server rejects the token.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn fetch_profile(config: &AppConfig, token: &str) -> Result<Option<User>, String> {
    let url = config.endpoint(PROFILE_PATH);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(format!("profile request failed: {}", resp.status()));
        }
        resp.json::<User>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, token);
        Err("not available outside the browser".to_owned())
    }
}

async fn post_credentials(url: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let body = UserRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(match resp.json::<ApiMessage>().await {
                Ok(msg) => msg.message,
                Err(_) => format!("request failed: {status}"),
            });
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, email, password);
        Err("not available outside the browser".to_owned())
    }
}
