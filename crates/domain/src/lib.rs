//! Domain layer for the relief dashboard.
//!
//! This crate contains:
//! - Domain models (User, HelpRequest, Resource, Alert, Statistics)
//! - The session state store and statistics derivation
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{EntityKind, IgnoreNotFound, StoreError};
pub use services::{AppState, StateSnapshot};
