//! Common test utilities for integration tests.
//!
//! Fixtures build sessions from the same configuration path the binary uses,
//! so tests exercise the full bootstrap.

// Not every integration test uses every helper.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use domain::models::{Location, Role, User};
use domain::AppState;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use relief_console::{config::Config, session::build_state};

/// Fixed reference instant for deterministic "today" checks.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
}

/// Build a test configuration with overrides.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_with_overrides(overrides).expect("Failed to load test config")
}

/// Seeded session for the default civilian user.
pub fn seeded_state() -> AppState {
    AppState::seeded_at(test_now())
}

/// Empty session for a freshly generated user acting as `role`.
pub fn empty_state(user_id: &str, role: Role) -> AppState {
    let overrides = [("session.seed", "false")];
    let mut state = build_state(&test_config(&overrides)).expect("Failed to build state");
    state.set_current_user(test_user(user_id, role));
    state
}

/// A user with generated name and email.
pub fn test_user(user_id: &str, role: Role) -> User {
    User {
        id: user_id.to_string(),
        name: Name().fake(),
        role,
        email: SafeEmail().fake(),
        location: Location::new(45.5579, -94.1632, "720 4th Ave S, St. Cloud, MN 56301"),
    }
}
