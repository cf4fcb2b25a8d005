//! Sample session data for demos and tests.
//!
//! Timestamps are relative to the instant passed in so the data always looks
//! recent.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Alert, AlertType, HelpRequest, Location, NeedType, Priority, RequestStatus, Resource,
    ResourceStatus, ResourceType, Responder, Role, User, Urgency,
};
use crate::services::store::AppState;

/// Identifier of the seeded session user.
pub const SEED_USER_ID: &str = "USR-001";

/// Identifier of the responder both seeded requests are assigned to.
pub const SEED_RESPONDER_ID: &str = "USR-101";

fn st_cloud_home() -> Location {
    Location::new(45.5579, -94.1632, "720 4th Ave S, St. Cloud, MN 56301")
}

fn community_center() -> Location {
    Location::new(45.5608, -94.1656, "33 N 6th Ave, St. Cloud, MN 56303")
}

/// The default session user.
pub fn seed_user() -> User {
    User {
        id: SEED_USER_ID.to_string(),
        name: "John Doe".to_string(),
        role: Role::Civilian,
        email: "john.doe@email.com".to_string(),
        location: st_cloud_home(),
    }
}

pub fn seed_help_requests(now: DateTime<Utc>) -> Vec<HelpRequest> {
    let responder = Responder::new(SEED_RESPONDER_ID, "Sarah Johnson");
    vec![
        HelpRequest {
            id: "HLP-001".to_string(),
            civilian_id: SEED_USER_ID.to_string(),
            civilian_name: "John Doe".to_string(),
            need_type: NeedType::Shelter,
            description: "Need temporary shelter for family of 4".to_string(),
            location: st_cloud_home(),
            status: RequestStatus::Assigned,
            priority: Priority::High,
            responder: Some(responder.clone()),
            submitted_at: now - Duration::hours(1),
            assigned_at: Some(now - Duration::minutes(30)),
            completed_at: None,
            completion_notes: None,
        },
        HelpRequest {
            id: "HLP-002".to_string(),
            civilian_id: "USR-002".to_string(),
            civilian_name: "Jane Smith".to_string(),
            need_type: NeedType::Medical,
            description: "Elderly person needs medication refill".to_string(),
            location: community_center(),
            status: RequestStatus::InProgress,
            priority: Priority::Critical,
            responder: Some(responder),
            submitted_at: now - Duration::hours(2),
            assigned_at: Some(now - Duration::minutes(90)),
            completed_at: None,
            completion_notes: None,
        },
    ]
}

pub fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "RES-001".to_string(),
            name: "St. Cloud Community Center".to_string(),
            resource_type: ResourceType::Shelter,
            location: community_center(),
            capacity: 100,
            current_occupancy: 67,
            status: ResourceStatus::Available,
            contact_info: "(320) 255-7223".to_string(),
            provider_id: "USR-201".to_string(),
        },
        Resource {
            id: "RES-002".to_string(),
            name: "St. Cloud Hospital Emergency".to_string(),
            resource_type: ResourceType::Medical,
            location: Location::new(45.5492, -94.1619, "1406 6th Ave N, St. Cloud, MN 56303"),
            capacity: 50,
            current_occupancy: 23,
            status: ResourceStatus::Available,
            contact_info: "(320) 251-2700".to_string(),
            provider_id: "USR-202".to_string(),
        },
        Resource {
            id: "RES-003".to_string(),
            name: "Red Cross Supply Distribution".to_string(),
            resource_type: ResourceType::Supply,
            location: Location::new(45.5565, -94.1685, "1600 Division St, St. Cloud, MN 56301"),
            capacity: 200,
            current_occupancy: 145,
            status: ResourceStatus::Limited,
            contact_info: "(320) 251-7641".to_string(),
            provider_id: "USR-203".to_string(),
        },
    ]
}

pub fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT-001".to_string(),
            alert_type: AlertType::Emergency,
            message: "Severe weather warning - Seek shelter immediately".to_string(),
            urgency: Urgency::Critical,
            timestamp: now - Duration::minutes(10),
            issued_by: "USR-301".to_string(),
            read: false,
        },
        Alert {
            id: "ALT-002".to_string(),
            alert_type: AlertType::Warning,
            message: "Road closure on Main St due to flooding".to_string(),
            urgency: Urgency::High,
            timestamp: now - Duration::hours(1),
            issued_by: "USR-301".to_string(),
            read: false,
        },
        Alert {
            id: "ALT-003".to_string(),
            alert_type: AlertType::Information,
            message: "Emergency shelter now open at Community Center".to_string(),
            urgency: Urgency::Medium,
            timestamp: now - Duration::hours(2),
            issued_by: "USR-301".to_string(),
            read: true,
        },
    ]
}

impl AppState {
    /// A session populated with the sample data, relative to the current time.
    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// A session populated with the sample data, relative to `now`.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        Self::with_collections(
            seed_user(),
            seed_help_requests(now),
            seed_resources(),
            seed_alerts(now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_collections() {
        let state = AppState::seeded_at(now());
        assert_eq!(state.current_user().id, SEED_USER_ID);
        assert_eq!(state.current_user().role, Role::Civilian);
        assert_eq!(state.help_requests().len(), 2);
        assert_eq!(state.resources().len(), 3);
        assert_eq!(state.alerts().len(), 3);
        assert_eq!(state.unread_alerts().count(), 2);
    }

    #[test]
    fn test_seeded_civilian_statistics() {
        let state = AppState::seeded_at(now());
        let stats = state.statistics_at(now(), &Utc);
        assert_eq!(stats.civilian.active_requests, 1);
        assert_eq!(stats.civilian.nearby_resources, 3);
        assert_eq!(stats.civilian.unread_alerts, 2);
    }

    #[test]
    fn test_seeded_responder_statistics() {
        let mut state = AppState::seeded_at(now());
        state.set_current_user(User {
            id: SEED_RESPONDER_ID.to_string(),
            name: "Sarah Johnson".to_string(),
            role: Role::Responder,
            email: "sarah.johnson@email.com".to_string(),
            location: community_center(),
        });
        let stats = state.statistics_at(now(), &Utc);
        assert_eq!(stats.responder.assigned_requests, 2);
        assert_eq!(stats.responder.completed_today, 0);
        assert_eq!(stats.responder.active_alerts, 2);
    }

    #[test]
    fn test_seeded_administrator_statistics() {
        let state = AppState::seeded_at(now());
        let stats = state.statistics_at(now(), &Utc);
        assert_eq!(stats.administrator.total_requests, 2);
        assert_eq!(stats.administrator.active_responders, 1);
        assert_eq!(stats.administrator.resources_available, 3);
        assert_eq!(stats.administrator.alerts_sent, 3);
    }

    #[test]
    fn test_seed_timestamps_are_relative() {
        let alerts = seed_alerts(now());
        assert_eq!(alerts[0].timestamp, now() - Duration::minutes(10));
        let requests = seed_help_requests(now());
        assert!(requests.iter().all(|r| r.submitted_at < now()));
    }
}
