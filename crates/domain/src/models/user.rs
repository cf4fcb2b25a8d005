//! Session user domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Location;

/// Role of the active session user; selects the dashboard and statistics shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Civilian,
    Responder,
    Administrator,
    ResourceProvider,
}

impl Role {
    /// All roles in role-switcher order.
    pub const ALL: [Role; 4] = [
        Role::Civilian,
        Role::Responder,
        Role::Administrator,
        Role::ResourceProvider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Civilian => "CIVILIAN",
            Role::Responder => "RESPONDER",
            Role::Administrator => "ADMINISTRATOR",
            Role::ResourceProvider => "RESOURCE_PROVIDER",
        }
    }

    /// Human-readable role name for headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Civilian => "Civilian",
            Role::Responder => "Emergency Responder",
            Role::Administrator => "Administrator",
            Role::ResourceProvider => "Resource Provider",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "CIVILIAN" => Ok(Role::Civilian),
            "RESPONDER" => Ok(Role::Responder),
            "ADMINISTRATOR" | "ADMIN" => Ok(Role::Administrator),
            "RESOURCE_PROVIDER" | "PROVIDER" => Ok(Role::ResourceProvider),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The identity driving the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub location: Location,
}

impl User {
    /// Returns a copy of this user acting under a different role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
