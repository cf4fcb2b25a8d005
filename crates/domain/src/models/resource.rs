//! Relief resource domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use super::Location;

/// Kind of resource a provider offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Shelter,
    Medical,
    Supply,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Shelter => "SHELTER",
            ResourceType::Medical => "MEDICAL",
            ResourceType::Supply => "SUPPLY",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Availability of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    #[default]
    Available,
    Limited,
    Unavailable,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "AVAILABLE",
            ResourceStatus::Limited => "LIMITED",
            ResourceStatus::Unavailable => "UNAVAILABLE",
        }
    }

    /// Available or limited; counted as usable on every dashboard.
    pub fn is_usable(&self) -> bool {
        matches!(self, ResourceStatus::Available | ResourceStatus::Limited)
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shelter, medical facility or supply point registered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub location: Location,
    pub capacity: u32,
    pub current_occupancy: u32,
    pub status: ResourceStatus,
    pub contact_info: String,
    pub provider_id: String,
}

impl Resource {
    /// Remaining capacity, zero when over-occupied.
    pub fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_occupancy)
    }
}

/// Input for registering a resource.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_resource"))]
pub struct NewResource {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub location: Location,
    pub capacity: u32,
    /// Defaults to 0.
    #[serde(default)]
    pub current_occupancy: Option<u32>,
    /// Defaults to [`ResourceStatus::Available`].
    #[serde(default)]
    pub status: Option<ResourceStatus>,
    pub contact_info: String,
}

impl NewResource {
    pub fn new(
        name: impl Into<String>,
        resource_type: ResourceType,
        location: Location,
        capacity: u32,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_type,
            location,
            capacity,
            current_occupancy: None,
            status: None,
            contact_info: contact_info.into(),
        }
    }

    pub fn with_occupancy(mut self, occupancy: u32) -> Self {
        self.current_occupancy = Some(occupancy);
        self
    }

    pub fn with_status(mut self, status: ResourceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

fn validate_new_resource(input: &NewResource) -> Result<(), ValidationError> {
    shared::validation::validate_required_text(&input.name)?;
    super::location::validate_location(&input.location)?;
    shared::validation::validate_occupancy(input.capacity, input.current_occupancy.unwrap_or(0))
}

/// Partial update for a resource. Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_resource_update"))]
pub struct ResourceUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
    pub location: Option<Location>,
    pub capacity: Option<u32>,
    pub current_occupancy: Option<u32>,
    pub status: Option<ResourceStatus>,
    pub contact_info: Option<String>,
}

impl ResourceUpdate {
    /// Shallow-merges the present fields into `resource`.
    pub fn apply_to(self, resource: &mut Resource) {
        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(resource_type) = self.resource_type {
            resource.resource_type = resource_type;
        }
        if let Some(location) = self.location {
            resource.location = location;
        }
        if let Some(capacity) = self.capacity {
            resource.capacity = capacity;
        }
        if let Some(occupancy) = self.current_occupancy {
            resource.current_occupancy = occupancy;
        }
        if let Some(status) = self.status {
            resource.status = status;
        }
        if let Some(contact_info) = self.contact_info {
            resource.contact_info = contact_info;
        }
    }
}

fn validate_resource_update(input: &ResourceUpdate) -> Result<(), ValidationError> {
    if let Some(name) = &input.name {
        shared::validation::validate_required_text(name)?;
    }
    if let Some(location) = &input.location {
        super::location::validate_location(location)?;
    }
    // Only checkable here when both sides are part of the update.
    if let (Some(capacity), Some(occupancy)) = (input.capacity, input.current_occupancy) {
        shared::validation::validate_occupancy(capacity, occupancy)?;
    }
    Ok(())
}
