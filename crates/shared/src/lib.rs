//! Shared utilities and common types for the relief dashboard.
//!
//! This crate provides common functionality used across all other crates:
//! - Record identifier generation
//! - Calendar and relative-time helpers
//! - Common validation logic

pub mod ids;
pub mod time;
pub mod validation;
