//! Domain services for the relief dashboard.
//!
//! Services contain the logic that operates on domain models.

pub mod seed;
pub mod statistics;
pub mod store;

pub use seed::{seed_alerts, seed_help_requests, seed_resources, seed_user};
pub use statistics::{compute_statistics, StatisticsInput, SERVICE_RADIUS_DEGREES};
pub use store::{AppState, StateSnapshot};
