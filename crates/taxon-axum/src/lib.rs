//! Taxon Axum - request authorization middleware
//!
//! The [`AuthGateLayer`] decides, per request, whether a request may reach
//! its handler: exempt paths pass untouched, everything else must present
//! a valid bearer token.

pub mod layer;

pub use layer::{AuthGate, AuthGateLayer};
