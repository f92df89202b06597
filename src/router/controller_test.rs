use std::cell::RefCell;

use super::*;
use crate::router::table::Route;
use crate::state::session::{Credentials, SessionState};

impl SessionSource for RefCell<SessionState> {
    fn current(&self) -> SessionState {
        self.borrow().clone()
    }
}

fn authed() -> SessionState {
    SessionState::Authenticated(Credentials { user_id: 1, email: "a@b.com".to_owned(), token: "t".to_owned() })
}

fn controller(session: &RefCell<SessionState>) -> NavigationController<&RefCell<SessionState>> {
    NavigationController::new(RouteTable::standard().unwrap(), session)
}

fn settle(ctrl: &mut NavigationController<&RefCell<SessionState>>, path: &str) -> Settled {
    ctrl.settle(&NavigationIntent::new(path))
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn unauthenticated_root_renders_entry_without_redirect() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    let out = settle(&mut ctrl, "/");
    assert_eq!(out, Settled { path: "/".to_owned(), view: ViewId::Entry, redirected_from: None });
}

#[test]
fn unauthenticated_chat_redirects_once_to_entry() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    assert_eq!(ctrl.navigate(&NavigationIntent::new("/chat")), NavigationOutcome::Redirected("/".to_owned()));
    let out = settle(&mut ctrl, "/chat");
    assert_eq!(out.view, ViewId::Entry);
    assert_eq!(out.path, "/");
    assert_eq!(out.redirected_from.as_deref(), Some("/chat"));
}

#[test]
fn login_then_chat_renders_interactive() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    settle(&mut ctrl, "/");
    *session.borrow_mut() = authed();
    let out = settle(&mut ctrl, "/chat");
    assert_eq!(out, Settled { path: "/chat".to_owned(), view: ViewId::Interactive, redirected_from: None });
}

#[test]
fn authenticated_root_redirects_to_chat() {
    let session = RefCell::new(authed());
    let mut ctrl = controller(&session);
    assert_eq!(ctrl.navigate(&NavigationIntent::new("/")), NavigationOutcome::Redirected("/chat".to_owned()));
    let out = settle(&mut ctrl, "/");
    assert_eq!(out.view, ViewId::Interactive);
    assert_eq!(out.path, "/chat");
}

#[test]
fn unknown_path_unauthenticated_lands_on_entry() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    assert_eq!(ctrl.navigate(&NavigationIntent::new("/unknown")), NavigationOutcome::Redirected("/".to_owned()));
    let out = settle(&mut ctrl, "/unknown");
    assert_eq!(out, Settled { path: "/".to_owned(), view: ViewId::Entry, redirected_from: Some("/unknown".to_owned()) });
}

#[test]
fn unknown_path_authenticated_lands_on_chat() {
    let session = RefCell::new(authed());
    let mut ctrl = controller(&session);
    assert_eq!(ctrl.navigate(&NavigationIntent::new("/unknown")), NavigationOutcome::Redirected("/".to_owned()));
    let out = settle(&mut ctrl, "/unknown");
    assert_eq!((out.view, out.path.as_str()), (ViewId::Interactive, "/chat"));
    assert_eq!(out.redirected_from.as_deref(), Some("/unknown"));
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn unauthenticated_never_renders_interactive() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    for path in ["/", "/chat", "/chat/", "/chat?x=1", "/nope", ""] {
        assert_eq!(settle(&mut ctrl, path).view, ViewId::Entry, "path {path:?}");
    }
}

#[test]
fn settle_is_idempotent_for_current_path() {
    let session = RefCell::new(authed());
    let mut ctrl = controller(&session);
    let first = settle(&mut ctrl, "/chat");
    let again = settle(&mut ctrl, &first.path);
    assert_eq!(first, again);
    assert_eq!(ctrl.current(), Some(&again));
}

#[test]
fn authenticated_never_renders_entry() {
    let session = RefCell::new(authed());
    let mut ctrl = controller(&session);
    for path in ["/", "/chat", "/nope", "/chat/1"] {
        assert_eq!(settle(&mut ctrl, path).view, ViewId::Interactive, "path {path:?}");
    }
}

#[test]
fn entry_only_table_renders_entry_for_authenticated_session() {
    let table = RouteTable::build(vec![Route::new("/", ViewId::Entry), Route::new("/help", ViewId::Entry)]).unwrap();
    let session = RefCell::new(authed());
    let mut ctrl = NavigationController::new(table, &session);
    let out = ctrl.settle(&NavigationIntent::new("/help"));
    assert_eq!(out, Settled { path: "/help".to_owned(), view: ViewId::Entry, redirected_from: None });
}

#[test]
fn redirect_cap_degrades_to_entry_instead_of_looping() {
    // "/chat/" never matches a normalized intent, so authenticated "/" keeps
    // bouncing between "/" and the unreachable route.
    let table = RouteTable::unchecked(vec![Route::new("/", ViewId::Entry), Route::new("/chat/", ViewId::Interactive)]);
    let session = RefCell::new(authed());
    let mut ctrl = NavigationController::new(table, &session);
    let out = ctrl.settle(&NavigationIntent::new("/unknown"));
    assert_eq!(
        out,
        Settled { path: "/".to_owned(), view: ViewId::Entry, redirected_from: Some("/unknown".to_owned()) }
    );
    assert_eq!(ctrl.current(), Some(&out));
}

// =============================================================
// Gate state
// =============================================================

#[test]
fn gate_starts_gated_even_with_session() {
    let session = RefCell::new(authed());
    let ctrl = controller(&session);
    assert_eq!(ctrl.gate(), GateState::Gated);
}

#[test]
fn login_notification_opens_gate_and_moves_to_chat() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    settle(&mut ctrl, "/");
    assert_eq!(ctrl.gate(), GateState::Gated);

    *session.borrow_mut() = authed();
    let out = ctrl.session_changed().unwrap();
    assert_eq!(ctrl.gate(), GateState::Open);
    assert_eq!(out.path, "/chat");
    assert_eq!(out.view, ViewId::Interactive);
}

#[test]
fn logout_notification_closes_gate_and_returns_to_entry() {
    let session = RefCell::new(authed());
    let mut ctrl = controller(&session);
    settle(&mut ctrl, "/chat");
    assert_eq!(ctrl.gate(), GateState::Open);

    *session.borrow_mut() = SessionState::Unauthenticated;
    let out = ctrl.session_changed().unwrap();
    assert_eq!(ctrl.gate(), GateState::Gated);
    assert_eq!((out.view, out.path.as_str()), (ViewId::Entry, "/"));
}

#[test]
fn session_changed_without_transition_is_none() {
    let session = RefCell::new(SessionState::Unauthenticated);
    let mut ctrl = controller(&session);
    settle(&mut ctrl, "/");
    assert!(ctrl.session_changed().is_none());
}
