//! Help request domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use super::resource::ResourceType;
use super::Location;

/// Category of assistance requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NeedType {
    Medical,
    Shelter,
    Supply,
    Rescue,
}

impl NeedType {
    pub const ALL: [NeedType; 4] = [
        NeedType::Medical,
        NeedType::Shelter,
        NeedType::Supply,
        NeedType::Rescue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NeedType::Medical => "MEDICAL",
            NeedType::Shelter => "SHELTER",
            NeedType::Supply => "SUPPLY",
            NeedType::Rescue => "RESCUE",
        }
    }

    /// Label shown on the submission form.
    pub fn label(&self) -> &'static str {
        match self {
            NeedType::Medical => "Medical Assistance",
            NeedType::Shelter => "Shelter",
            NeedType::Supply => "Food/Water/Supplies",
            NeedType::Rescue => "Emergency Rescue",
        }
    }

    /// Priority a request of this type receives unless the caller overrides it.
    pub fn default_priority(&self) -> Priority {
        match self {
            NeedType::Medical => Priority::Critical,
            NeedType::Shelter => Priority::High,
            NeedType::Supply => Priority::Medium,
            NeedType::Rescue => Priority::Critical,
        }
    }

    /// Resource type that can serve this need. Rescue has none.
    pub fn resource_type(&self) -> Option<ResourceType> {
        match self {
            NeedType::Medical => Some(ResourceType::Medical),
            NeedType::Shelter => Some(ResourceType::Shelter),
            NeedType::Supply => Some(ResourceType::Supply),
            NeedType::Rescue => None,
        }
    }
}

impl fmt::Display for NeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a help request.
///
/// The usual order is Submitted → Assigned → InProgress → Completed, but any
/// status may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Submitted,
    Assigned,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => "SUBMITTED",
            RequestStatus::Assigned => "ASSIGNED",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Completed => "COMPLETED",
        }
    }

    /// Not yet completed.
    pub fn is_open(&self) -> bool {
        !matches!(self, RequestStatus::Completed)
    }

    /// Assigned to a responder and not yet completed.
    pub fn is_in_hand(&self) -> bool {
        matches!(self, RequestStatus::Assigned | RequestStatus::InProgress)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Responder handling a request. Id and name are always set together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responder {
    pub id: String,
    pub name: String,
}

impl Responder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A civilian's request for assistance.
///
/// On the wire the responder is two flat nullable fields, `responderId` and
/// `responderName`. A record with only one of them set is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "HelpRequestRecord", try_from = "HelpRequestRecord")]
pub struct HelpRequest {
    pub id: String,
    pub civilian_id: String,
    pub civilian_name: String,
    pub need_type: NeedType,
    pub description: String,
    pub location: Location,
    pub status: RequestStatus,
    pub priority: Priority,
    pub responder: Option<Responder>,
    pub submitted_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_notes: Option<String>,
}

impl HelpRequest {
    pub fn responder_id(&self) -> Option<&str> {
        self.responder.as_ref().map(|r| r.id.as_str())
    }

    pub fn responder_name(&self) -> Option<&str> {
        self.responder.as_ref().map(|r| r.name.as_str())
    }

    pub fn is_assigned_to(&self, responder_id: &str) -> bool {
        self.responder_id() == Some(responder_id)
    }
}

/// Serialized form of [`HelpRequest`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HelpRequestRecord {
    id: String,
    civilian_id: String,
    civilian_name: String,
    need_type: NeedType,
    description: String,
    location: Location,
    status: RequestStatus,
    priority: Priority,
    #[serde(default)]
    responder_id: Option<String>,
    #[serde(default)]
    responder_name: Option<String>,
    submitted_at: DateTime<Utc>,
    #[serde(default)]
    assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    completion_notes: Option<String>,
}

impl From<HelpRequest> for HelpRequestRecord {
    fn from(request: HelpRequest) -> Self {
        let (responder_id, responder_name) = match request.responder {
            Some(Responder { id, name }) => (Some(id), Some(name)),
            None => (None, None),
        };
        Self {
            id: request.id,
            civilian_id: request.civilian_id,
            civilian_name: request.civilian_name,
            need_type: request.need_type,
            description: request.description,
            location: request.location,
            status: request.status,
            priority: request.priority,
            responder_id,
            responder_name,
            submitted_at: request.submitted_at,
            assigned_at: request.assigned_at,
            completed_at: request.completed_at,
            completion_notes: request.completion_notes,
        }
    }
}

impl TryFrom<HelpRequestRecord> for HelpRequest {
    type Error = &'static str;

    fn try_from(record: HelpRequestRecord) -> Result<Self, Self::Error> {
        let responder = match (record.responder_id, record.responder_name) {
            (Some(id), Some(name)) => Some(Responder { id, name }),
            (None, None) => None,
            _ => return Err("responderId and responderName must be set together"),
        };
        Ok(Self {
            id: record.id,
            civilian_id: record.civilian_id,
            civilian_name: record.civilian_name,
            need_type: record.need_type,
            description: record.description,
            location: record.location,
            status: record.status,
            priority: record.priority,
            responder,
            submitted_at: record.submitted_at,
            assigned_at: record.assigned_at,
            completed_at: record.completed_at,
            completion_notes: record.completion_notes,
        })
    }
}

/// Input for submitting a help request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_help_request"))]
pub struct NewHelpRequest {
    pub need_type: NeedType,
    pub description: String,
    /// Defaults to the submitting user's location.
    #[serde(default)]
    pub location: Option<Location>,
    /// Defaults to the need type's priority.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl NewHelpRequest {
    pub fn new(need_type: NeedType, description: impl Into<String>) -> Self {
        Self {
            need_type,
            description: description.into(),
            location: None,
            priority: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority the created request will carry.
    pub fn effective_priority(&self) -> Priority {
        self.priority
            .unwrap_or_else(|| self.need_type.default_priority())
    }
}

fn validate_new_help_request(input: &NewHelpRequest) -> Result<(), ValidationError> {
    shared::validation::validate_required_text(&input.description)?;
    if let Some(location) = &input.location {
        super::location::validate_location(location)?;
    }
    Ok(())
}
