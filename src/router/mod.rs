//! Session-gated navigation.
//!
//! ARCHITECTURE
//! ============
//! `table` holds the static path-to-view bindings, `guard` is the pure
//! allow/redirect decision, and `controller` applies it to navigation
//! intents with a one-hop redirect cap and tracks the gate state.

pub mod controller;
pub mod guard;
pub mod table;

pub use controller::{GateState, NavigationController, Settled};
pub use guard::{NavigationIntent, NavigationOutcome};
pub use table::{Route, RouteTable, ViewId};
