//! The navigation guard as a pure function of intent, session, and table.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{ENTRY_PATH, RouteTable, ViewId};
use crate::state::session::SessionState;

/// One navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_path: String,
}

impl NavigationIntent {
    /// Build an intent from a raw location, normalized to a bare path:
    /// query and fragment dropped, leading `/` ensured, trailing `/` removed
    /// except for the root.
    pub fn new(raw: &str) -> Self {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let path = raw[..end].trim_end_matches('/');
        let target_path = if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        };
        Self { target_path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Rendered(ViewId),
    Redirected(String),
}

/// Decide whether `intent` may render under `session`.
///
/// Unknown paths and the chat view without a session go to `/`; the entry
/// view with a session goes to the interactive view's path.
pub fn resolve(intent: &NavigationIntent, session: &SessionState, table: &RouteTable) -> NavigationOutcome {
    let Some(route) = table.resolve(&intent.target_path) else {
        return NavigationOutcome::Redirected(ENTRY_PATH.to_owned());
    };
    match (route.view, session.is_authenticated()) {
        (ViewId::Interactive, false) => NavigationOutcome::Redirected(ENTRY_PATH.to_owned()),
        (ViewId::Entry, true) => match table.path_of(ViewId::Interactive) {
            Some(path) => NavigationOutcome::Redirected(path.to_owned()),
            None => NavigationOutcome::Rendered(ViewId::Entry),
        },
        (view, _) => NavigationOutcome::Rendered(view),
    }
}
