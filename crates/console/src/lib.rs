//! Headless driver for the relief dashboard: configuration, logging and
//! report rendering around the domain state store.

pub mod config;
pub mod logging;
pub mod report;
pub mod session;
