//! Headless rendering of the current role's dashboard.

use chrono::{DateTime, Local, TimeZone, Utc};
use domain::models::{
    Alert, AlertType, HelpRequest, Priority, RequestStatus, Resource, ResourceStatus,
    ResourceType, Role, RoleStatistics, Urgency,
};
use domain::AppState;
use serde::Serialize;
use shared::time::format_relative;
use std::fmt;

/// Number of alerts a responder's dashboard lists.
pub const RESPONDER_ALERT_LIMIT: usize = 2;

/// Everything the dashboard shows for the session user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub user_id: String,
    pub user_name: String,
    pub role: Role,
    pub role_name: &'static str,
    pub statistics: RoleStatistics,
    pub alerts: Vec<AlertLine>,
    pub requests: Vec<RequestLine>,
    pub resources: Vec<ResourceLine>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLine {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub urgency: Urgency,
    pub message: String,
    pub age: String,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLine {
    pub id: String,
    pub need: &'static str,
    pub status: RequestStatus,
    pub priority: Priority,
    pub civilian_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_name: Option<String>,
    pub submitted: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLine {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub status: ResourceStatus,
    pub occupancy: String,
    pub free_capacity: u32,
}

/// Builds the report for the session user, "today" in the local time zone.
pub fn build_report(state: &AppState) -> DashboardReport {
    build_report_at(state, Utc::now(), &Local)
}

/// Builds the report against an explicit clock and time zone.
pub fn build_report_at<Tz: TimeZone>(
    state: &AppState,
    now: DateTime<Utc>,
    tz: &Tz,
) -> DashboardReport {
    let user = state.current_user();
    let role = user.role;

    let requests: Vec<&HelpRequest> = match role {
        Role::Civilian => state.my_requests().collect(),
        Role::Responder => state
            .requests_assigned_to_me()
            .chain(state.unassigned_requests())
            .collect(),
        Role::Administrator => state.help_requests().iter().collect(),
        Role::ResourceProvider => Vec::new(),
    };

    let resources: Vec<&Resource> = match role {
        Role::ResourceProvider => state.my_resources().collect(),
        Role::Civilian | Role::Administrator => state
            .resources()
            .iter()
            .filter(|r| r.status.is_usable())
            .collect(),
        Role::Responder => Vec::new(),
    };

    // Administrators get no alert list.
    let alerts: Vec<&Alert> = match role {
        Role::Civilian | Role::ResourceProvider => state.alerts().iter().collect(),
        Role::Responder => state.alerts().iter().take(RESPONDER_ALERT_LIMIT).collect(),
        Role::Administrator => Vec::new(),
    };

    DashboardReport {
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        role,
        role_name: role.display_name(),
        statistics: state.statistics_at(now, tz).for_role(role),
        alerts: alerts.into_iter().map(|a| alert_line(a, now)).collect(),
        requests: requests.into_iter().map(|r| request_line(r, now)).collect(),
        resources: resources.into_iter().map(resource_line).collect(),
        generated_at: now,
    }
}

fn alert_line(alert: &Alert, now: DateTime<Utc>) -> AlertLine {
    AlertLine {
        id: alert.id.clone(),
        alert_type: alert.alert_type,
        urgency: alert.urgency,
        message: alert.message.clone(),
        age: format_relative(alert.timestamp, now),
        read: alert.read,
    }
}

fn request_line(request: &HelpRequest, now: DateTime<Utc>) -> RequestLine {
    RequestLine {
        id: request.id.clone(),
        need: request.need_type.label(),
        status: request.status,
        priority: request.priority,
        civilian_name: request.civilian_name.clone(),
        responder_name: request.responder_name().map(str::to_string),
        submitted: format_relative(request.submitted_at, now),
    }
}

fn resource_line(resource: &Resource) -> ResourceLine {
    ResourceLine {
        id: resource.id.clone(),
        name: resource.name.clone(),
        resource_type: resource.resource_type,
        status: resource.status,
        occupancy: format!("{}/{}", resource.current_occupancy, resource.capacity),
        free_capacity: resource.free_capacity(),
    }
}

/// Plain-text rendering for terminals.
pub fn render_text(report: &DashboardReport) -> String {
    report.to_string()
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) - {}", self.user_name, self.user_id, self.role_name)?;
        writeln!(f)?;

        for (label, value) in self.statistics.entries() {
            writeln!(f, "  {:<22}{}", label, value)?;
        }

        if !self.requests.is_empty() {
            writeln!(f, "\nRequests")?;
            for r in &self.requests {
                let responder = r.responder_name.as_deref().unwrap_or("unassigned");
                writeln!(
                    f,
                    "  [{}] {} {} - {} ({}, {}, {})",
                    r.priority, r.id, r.need, r.status, r.civilian_name, responder, r.submitted
                )?;
            }
        }

        if !self.resources.is_empty() {
            writeln!(f, "\nResources")?;
            for r in &self.resources {
                writeln!(
                    f,
                    "  {} {} [{}] {} occupancy {} ({} free)",
                    r.id, r.name, r.resource_type, r.status, r.occupancy, r.free_capacity
                )?;
            }
        }

        if !self.alerts.is_empty() {
            writeln!(f, "\nAlerts")?;
            for a in &self.alerts {
                let marker = if a.read { " " } else { "*" };
                writeln!(
                    f,
                    "  {}[{}] {} - {} ({})",
                    marker, a.urgency, a.alert_type, a.message, a.age
                )?;
            }
        }

        Ok(())
    }
}
