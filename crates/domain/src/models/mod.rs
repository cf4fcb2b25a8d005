//! Domain models for the relief dashboard.

pub mod alert;
pub mod help_request;
pub mod location;
pub mod resource;
pub mod statistics;
pub mod user;

pub use alert::{Alert, AlertType, NewAlert, Urgency};
pub use help_request::{HelpRequest, NeedType, NewHelpRequest, Priority, RequestStatus, Responder};
pub use location::Location;
pub use resource::{NewResource, Resource, ResourceStatus, ResourceType, ResourceUpdate};
pub use statistics::{
    AdministratorStatistics, CivilianStatistics, ResourceProviderStatistics, ResponderStatistics,
    RoleStatistics, Statistics,
};
pub use user::{Role, User};
