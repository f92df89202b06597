//! Navigation controller: applies the guard to intents and tracks the gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation event (initial load, link activation, history movement,
//! login/logout notification) funnels through [`NavigationController::settle`].
//! An unknown path first falls back to `/`; after that the gate redirect gets
//! exactly one re-resolution. The gate rules are mutually exclusive, so any
//! further redirect means a broken table and degrades to the entry view
//! instead of looping.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::guard::{self, NavigationIntent, NavigationOutcome};
use super::table::{ENTRY_PATH, RouteTable, ViewId};
use crate::state::session::SessionSource;

/// Not-found fallback plus one gate redirect.
pub const MAX_REDIRECT_HOPS: usize = 2;

/// Which side of the login wall the controller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No session; only the entry view is reachable.
    Gated,
    /// Authenticated; only the interactive view is reachable.
    Open,
}

/// Final result of a navigation after redirects were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// Path the location should show.
    pub path: String,
    pub view: ViewId,
    /// Original target when a redirect happened.
    pub redirected_from: Option<String>,
}

impl Settled {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

pub struct NavigationController<S> {
    table: RouteTable,
    session: S,
    gate: GateState,
    current: Option<Settled>,
}

impl<S: SessionSource> NavigationController<S> {
    /// Starts `Gated` regardless of the session; the first `settle` syncs it.
    pub fn new(table: RouteTable, session: S) -> Self {
        Self { table, session, gate: GateState::Gated, current: None }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn gate(&self) -> GateState {
        self.gate
    }

    pub fn current(&self) -> Option<&Settled> {
        self.current.as_ref()
    }

    /// Single guard evaluation, no redirect following.
    pub fn navigate(&self, intent: &NavigationIntent) -> NavigationOutcome {
        guard::resolve(intent, &self.session.current(), &self.table)
    }

    /// Resolve `intent`, following redirects up to [`MAX_REDIRECT_HOPS`], and
    /// record the result as the current route.
    pub fn settle(&mut self, intent: &NavigationIntent) -> Settled {
        self.sync_gate();
        let mut target = intent.clone();
        let mut hops = 0;
        let settled = loop {
            match self.navigate(&target) {
                NavigationOutcome::Rendered(view) => {
                    let redirected_from = (hops > 0).then(|| intent.target_path.clone());
                    break Settled { path: target.target_path, view, redirected_from };
                }
                NavigationOutcome::Redirected(path) if hops < MAX_REDIRECT_HOPS => {
                    log::debug!("navigation: {} redirected to {path}", target.target_path);
                    target = NavigationIntent::new(&path);
                    hops += 1;
                }
                NavigationOutcome::Redirected(path) => {
                    log::warn!("navigation: redirect cap hit at {path}; rendering entry view");
                    break Settled {
                        path: ENTRY_PATH.to_owned(),
                        view: ViewId::Entry,
                        redirected_from: Some(intent.target_path.clone()),
                    };
                }
            }
        };
        log::debug!("navigation: rendering {} at {}", settled.view, settled.path);
        self.current = Some(settled.clone());
        settled
    }

    /// React to a login/logout notification. Re-guards the current path and
    /// returns the new settlement when the gate flipped.
    pub fn session_changed(&mut self) -> Option<Settled> {
        let before = self.gate;
        self.sync_gate();
        if self.gate == before {
            return None;
        }
        let path = self.current.as_ref().map_or_else(|| ENTRY_PATH.to_owned(), |s| s.path.clone());
        Some(self.settle(&NavigationIntent::new(&path)))
    }

    fn sync_gate(&mut self) {
        let next = if self.session.is_authenticated() { GateState::Open } else { GateState::Gated };
        if next != self.gate {
            log::info!("navigation gate: {:?} -> {next:?}", self.gate);
            self.gate = next;
        }
    }
}
