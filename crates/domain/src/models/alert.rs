//! Broadcast alert domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Category of a broadcast alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Emergency,
    Warning,
    Information,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Emergency => "EMERGENCY",
            AlertType::Warning => "WARNING",
            AlertType::Information => "INFORMATION",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity tag of an alert. Same value set as request priority, separate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
            Urgency::Critical => "CRITICAL",
        }
    }

    /// Critical or high.
    pub fn is_severe(&self) -> bool {
        matches!(self, Urgency::Critical | Urgency::High)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An alert broadcast to every session. Only `read` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub urgency: Urgency,
    pub timestamp: DateTime<Utc>,
    pub issued_by: String,
    pub read: bool,
}

/// Input for broadcasting an alert.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_alert"))]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub urgency: Urgency,
}

impl NewAlert {
    pub fn new(alert_type: AlertType, message: impl Into<String>, urgency: Urgency) -> Self {
        Self {
            alert_type,
            message: message.into(),
            urgency,
        }
    }
}

fn validate_new_alert(input: &NewAlert) -> Result<(), ValidationError> {
    shared::validation::validate_required_text(&input.message)
}
