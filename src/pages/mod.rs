//! Page modules for the two route-level views.
//!
//! ARCHITECTURE
//! ============
//! Pages only touch the session through `state::session`; which page is shown
//! is decided by the navigation controller in `app`.

pub mod chat;
pub mod login;
