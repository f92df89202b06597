//! REST transport used by the views.
//!
//! The navigation core never calls into this module; it only reserves the
//! `Http` capability slot the views depend on.

pub mod api;
pub mod types;
