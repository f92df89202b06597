//! Wire types shared with the account API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /sign-in` and `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRequest {
    pub email: String,
    pub password: String,
}

/// Account as returned by the API. `token` is only populated by sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub token: String,
}

/// Error body produced by the API on 4xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
