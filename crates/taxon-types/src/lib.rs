//! Taxon Types - Shared domain types
//!
//! This crate contains domain types used across taxon services:
//! - User identity
//! - Categories

pub mod category;
pub mod user;

pub use category::*;
pub use user::*;
