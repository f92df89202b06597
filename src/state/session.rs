#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Proof of a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: i64,
    pub email: String,
    pub token: String,
}

impl From<User> for Credentials {
    fn from(user: User) -> Self {
        Self { user_id: user.id, email: user.email, token: user.token }
    }
}

/// Authentication state as seen by the navigation guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    Authenticated(Credentials),
    #[default]
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Authenticated(creds) => Some(creds),
            Self::Unauthenticated => None,
        }
    }
}

/// Read-only accessor injected into the navigation controller.
pub trait SessionSource {
    fn current(&self) -> SessionState;

    fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }
}

/// A fixed state; useful for evaluating the guard against fabricated sessions.
impl SessionSource for SessionState {
    fn current(&self) -> SessionState {
        self.clone()
    }
}

impl<S: SessionSource + ?Sized> SessionSource for &S {
    fn current(&self) -> SessionState {
        (**self).current()
    }
}

/// The live session signal. Reads are untracked so the guard never subscribes
/// on its own; the root component decides what it reacts to.
impl SessionSource for RwSignal<SessionState> {
    fn current(&self) -> SessionState {
        self.get_untracked()
    }
}

/// Record a successful sign-in.
pub fn sign_in(session: RwSignal<SessionState>, user: User) {
    log::info!("session authenticated: {}", user.email);
    session.set(SessionState::Authenticated(user.into()));
}

/// Drop the current credentials after logout or invalidation.
pub fn invalidate(session: RwSignal<SessionState>) {
    if session.with_untracked(SessionState::is_authenticated) {
        log::info!("session invalidated");
        session.set(SessionState::Unauthenticated);
    }
}
