//! Per-role dashboard statistics models.

use serde::{Deserialize, Serialize};

use super::Role;

/// Civilian dashboard counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilianStatistics {
    /// Own requests not yet completed.
    pub active_requests: usize,
    /// Resources available or limited.
    pub nearby_resources: usize,
    pub unread_alerts: usize,
}

/// Responder dashboard counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderStatistics {
    /// Requests assigned to me that are assigned or in progress.
    pub assigned_requests: usize,
    /// Requests assigned to me completed on today's local date.
    pub completed_today: usize,
    /// Unread alerts with critical or high urgency.
    pub active_alerts: usize,
}

/// Administrator dashboard counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorStatistics {
    pub total_requests: usize,
    /// Distinct responders with at least one assigned request.
    pub active_responders: usize,
    pub resources_available: usize,
    pub alerts_sent: usize,
}

/// Resource provider dashboard counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProviderStatistics {
    pub total_resources: usize,
    pub active_resources: usize,
    /// Completed requests near one of my resources of the matching type.
    pub requests_served: usize,
}

/// Statistics for every role, keyed the way the dashboard consumes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "CIVILIAN")]
    pub civilian: CivilianStatistics,
    #[serde(rename = "RESPONDER")]
    pub responder: ResponderStatistics,
    #[serde(rename = "ADMINISTRATOR")]
    pub administrator: AdministratorStatistics,
    #[serde(rename = "RESOURCE_PROVIDER")]
    pub resource_provider: ResourceProviderStatistics,
}

/// Statistics of a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleStatistics {
    Civilian(CivilianStatistics),
    Responder(ResponderStatistics),
    Administrator(AdministratorStatistics),
    ResourceProvider(ResourceProviderStatistics),
}

impl Statistics {
    /// Selects the summary shown on `role`'s dashboard.
    pub fn for_role(&self, role: Role) -> RoleStatistics {
        match role {
            Role::Civilian => RoleStatistics::Civilian(self.civilian),
            Role::Responder => RoleStatistics::Responder(self.responder),
            Role::Administrator => RoleStatistics::Administrator(self.administrator),
            Role::ResourceProvider => RoleStatistics::ResourceProvider(self.resource_provider),
        }
    }
}

impl RoleStatistics {
    /// Labelled values in dashboard card order.
    pub fn entries(&self) -> Vec<(&'static str, usize)> {
        match self {
            RoleStatistics::Civilian(s) => vec![
                ("Active Requests", s.active_requests),
                ("Nearby Resources", s.nearby_resources),
                ("Unread Alerts", s.unread_alerts),
            ],
            RoleStatistics::Responder(s) => vec![
                ("Assigned Requests", s.assigned_requests),
                ("Completed Today", s.completed_today),
                ("Active Alerts", s.active_alerts),
            ],
            RoleStatistics::Administrator(s) => vec![
                ("Total Requests", s.total_requests),
                ("Active Responders", s.active_responders),
                ("Resources Available", s.resources_available),
                ("Alerts Sent", s.alerts_sent),
            ],
            RoleStatistics::ResourceProvider(s) => vec![
                ("Total Resources", s.total_resources),
                ("Active Resources", s.active_resources),
                ("Requests Served", s.requests_served),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_default() {
        let stats = Statistics::default();
        assert_eq!(stats.civilian.active_requests, 0);
        assert_eq!(stats.responder.completed_today, 0);
        assert_eq!(stats.administrator.alerts_sent, 0);
        assert_eq!(stats.resource_provider.requests_served, 0);
    }

    #[test]
    fn test_statistics_serialization_keys() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        assert!(json["CIVILIAN"]["activeRequests"].is_number());
        assert!(json["RESPONDER"]["completedToday"].is_number());
        assert!(json["ADMINISTRATOR"]["activeResponders"].is_number());
        assert!(json["RESOURCE_PROVIDER"]["requestsServed"].is_number());
    }

    #[test]
    fn test_for_role_selects_summary() {
        let mut stats = Statistics::default();
        stats.responder.assigned_requests = 2;
        assert_eq!(
            stats.for_role(Role::Responder),
            RoleStatistics::Responder(ResponderStatistics {
                assigned_requests: 2,
                completed_today: 0,
                active_alerts: 0,
            })
        );
    }

    #[test]
    fn test_role_statistics_entries() {
        let stats = Statistics::default();
        let entries = stats.for_role(Role::Administrator).entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].0, "Total Requests");

        let json = serde_json::to_value(stats.for_role(Role::Civilian)).unwrap();
        assert_eq!(json["unreadAlerts"], 0);
    }
}
