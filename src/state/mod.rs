//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only shared state. It is written by the login and
//! logout collaborators and only read by the navigation guard.

pub mod session;
