//! Per-role statistics derivation.
//!
//! Statistics are a pure function of the session user and the three
//! collections. Nothing is cached; callers recompute on every read.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;

use crate::models::{
    AdministratorStatistics, Alert, CivilianStatistics, HelpRequest, RequestStatus, Resource,
    ResourceProviderStatistics, ResponderStatistics, Statistics, User,
};

/// Maximum latitude difference, in degrees, for a resource to count as
/// serving a completed request.
pub const SERVICE_RADIUS_DEGREES: f64 = 0.01;

/// Borrowed view of everything the derivation reads.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsInput<'a> {
    pub user: &'a User,
    pub help_requests: &'a [HelpRequest],
    pub resources: &'a [Resource],
    pub alerts: &'a [Alert],
}

/// Computes every role's statistics.
///
/// `now` and `tz` define "today" for the responder's completed count.
pub fn compute_statistics<Tz: TimeZone>(
    input: &StatisticsInput<'_>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Statistics {
    Statistics {
        civilian: civilian_statistics(input),
        responder: responder_statistics(input, now, tz),
        administrator: administrator_statistics(input),
        resource_provider: resource_provider_statistics(input),
    }
}

fn usable_resources(resources: &[Resource]) -> usize {
    resources.iter().filter(|r| r.status.is_usable()).count()
}

fn civilian_statistics(input: &StatisticsInput<'_>) -> CivilianStatistics {
    CivilianStatistics {
        active_requests: input
            .help_requests
            .iter()
            .filter(|r| r.civilian_id == input.user.id && r.status.is_open())
            .count(),
        nearby_resources: usable_resources(input.resources),
        unread_alerts: input.alerts.iter().filter(|a| !a.read).count(),
    }
}

fn responder_statistics<Tz: TimeZone>(
    input: &StatisticsInput<'_>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> ResponderStatistics {
    let assigned_to_me: Vec<&HelpRequest> = input
        .help_requests
        .iter()
        .filter(|r| r.is_assigned_to(&input.user.id))
        .collect();

    ResponderStatistics {
        assigned_requests: assigned_to_me
            .iter()
            .filter(|r| r.status.is_in_hand())
            .count(),
        completed_today: assigned_to_me
            .iter()
            .filter_map(|r| r.completed_at)
            .filter(|at| shared::time::is_same_calendar_day(*at, now, tz))
            .count(),
        active_alerts: input
            .alerts
            .iter()
            .filter(|a| !a.read && a.urgency.is_severe())
            .count(),
    }
}

fn administrator_statistics(input: &StatisticsInput<'_>) -> AdministratorStatistics {
    let responders: HashSet<&str> = input
        .help_requests
        .iter()
        .filter_map(HelpRequest::responder_id)
        .collect();

    AdministratorStatistics {
        total_requests: input.help_requests.len(),
        active_responders: responders.len(),
        resources_available: usable_resources(input.resources),
        alerts_sent: input.alerts.len(),
    }
}

fn resource_provider_statistics(input: &StatisticsInput<'_>) -> ResourceProviderStatistics {
    let mine: Vec<&Resource> = input
        .resources
        .iter()
        .filter(|r| r.provider_id == input.user.id)
        .collect();

    let requests_served = input
        .help_requests
        .iter()
        .filter(|request| request.status == RequestStatus::Completed)
        .filter(|request| mine.iter().any(|resource| serves(resource, request)))
        .count();

    ResourceProviderStatistics {
        total_resources: mine.len(),
        active_resources: mine.iter().filter(|r| r.status.is_usable()).count(),
        requests_served,
    }
}

/// Whether `resource` matches the request's need and sits within the service radius.
pub fn serves(resource: &Resource, request: &HelpRequest) -> bool {
    request.need_type.resource_type() == Some(resource.resource_type)
        && resource.location.latitude_delta(&request.location) < SERVICE_RADIUS_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AlertType, Location, NeedType, ResourceStatus, ResourceType, Responder, Role,
        Urgency,
    };
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            role,
            email: format!("{}@example.org", id.to_lowercase()),
            location: Location::new(45.5579, -94.1632, "720 4th Ave S"),
        }
    }

    fn request(id: &str, civilian: &str, need: NeedType, status: RequestStatus) -> HelpRequest {
        HelpRequest {
            id: id.to_string(),
            civilian_id: civilian.to_string(),
            civilian_name: civilian.to_string(),
            need_type: need,
            description: "help".to_string(),
            location: Location::new(45.5565, -94.1685, "1600 Division St"),
            status,
            priority: need.default_priority(),
            responder: None,
            submitted_at: now() - Duration::hours(3),
            assigned_at: None,
            completed_at: None,
            completion_notes: None,
        }
    }

    fn resource(id: &str, provider: &str, kind: ResourceType, status: ResourceStatus) -> Resource {
        Resource {
            id: id.to_string(),
            name: id.to_string(),
            resource_type: kind,
            location: Location::new(45.5565, -94.1685, "1600 Division St"),
            capacity: 100,
            current_occupancy: 0,
            status,
            contact_info: "555-0100".to_string(),
            provider_id: provider.to_string(),
        }
    }

    fn alert(id: &str, urgency: Urgency, read: bool) -> Alert {
        Alert {
            id: id.to_string(),
            alert_type: AlertType::Warning,
            message: "message".to_string(),
            urgency,
            timestamp: now() - Duration::minutes(10),
            issued_by: "USR-301".to_string(),
            read,
        }
    }

    fn compute(
        user: &User,
        requests: &[HelpRequest],
        resources: &[Resource],
        alerts: &[Alert],
    ) -> Statistics {
        let input = StatisticsInput {
            user,
            help_requests: requests,
            resources,
            alerts,
        };
        compute_statistics(&input, now(), &Utc)
    }

    #[test]
    fn test_empty_collections() {
        let stats = compute(&user("USR-001", Role::Civilian), &[], &[], &[]);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_civilian_counts_only_own_open_requests() {
        let requests = vec![
            request("HLP-1", "USR-001", NeedType::Shelter, RequestStatus::Submitted),
            request("HLP-2", "USR-001", NeedType::Medical, RequestStatus::InProgress),
            request("HLP-3", "USR-001", NeedType::Supply, RequestStatus::Completed),
            request("HLP-4", "USR-002", NeedType::Rescue, RequestStatus::Assigned),
        ];
        let stats = compute(&user("USR-001", Role::Civilian), &requests, &[], &[]);
        assert_eq!(stats.civilian.active_requests, 2);
    }

    #[test]
    fn test_usable_resources_and_unread_alerts() {
        let resources = vec![
            resource("RES-1", "USR-201", ResourceType::Shelter, ResourceStatus::Available),
            resource("RES-2", "USR-202", ResourceType::Medical, ResourceStatus::Limited),
            resource("RES-3", "USR-203", ResourceType::Supply, ResourceStatus::Unavailable),
        ];
        let alerts = vec![
            alert("ALT-1", Urgency::Critical, false),
            alert("ALT-2", Urgency::Low, false),
            alert("ALT-3", Urgency::High, true),
        ];
        let stats = compute(&user("USR-001", Role::Civilian), &[], &resources, &alerts);
        assert_eq!(stats.civilian.nearby_resources, 2);
        assert_eq!(stats.civilian.unread_alerts, 2);
        assert_eq!(stats.administrator.resources_available, 2);
        assert_eq!(stats.administrator.alerts_sent, 3);
        // Only the unread critical alert is severe and unread.
        assert_eq!(stats.responder.active_alerts, 1);
    }

    #[test]
    fn test_responder_assigned_and_completed_today() {
        let me = Responder::new("USR-101", "Sarah Johnson");
        let mut assigned = request("HLP-1", "USR-001", NeedType::Shelter, RequestStatus::Assigned);
        assigned.responder = Some(me.clone());
        let mut working = request("HLP-2", "USR-002", NeedType::Medical, RequestStatus::InProgress);
        working.responder = Some(me.clone());
        let mut done_today = request("HLP-3", "USR-003", NeedType::Supply, RequestStatus::Completed);
        done_today.responder = Some(me.clone());
        done_today.completed_at = Some(now() - Duration::hours(2));
        let mut done_yesterday =
            request("HLP-4", "USR-004", NeedType::Supply, RequestStatus::Completed);
        done_yesterday.responder = Some(me);
        done_yesterday.completed_at = Some(now() - Duration::hours(20));
        let mut someone_else = request("HLP-5", "USR-005", NeedType::Rescue, RequestStatus::Assigned);
        someone_else.responder = Some(Responder::new("USR-102", "Other"));

        let requests = vec![assigned, working, done_today, done_yesterday, someone_else];
        let stats = compute(&user("USR-101", Role::Responder), &requests, &[], &[]);
        assert_eq!(stats.responder.assigned_requests, 2);
        assert_eq!(stats.responder.completed_today, 1);
    }

    #[test]
    fn test_completed_today_uses_given_timezone() {
        let mut done = request("HLP-1", "USR-001", NeedType::Supply, RequestStatus::Completed);
        done.responder = Some(Responder::new("USR-101", "Sarah Johnson"));
        // 01:00 UTC on June 1 is still May 31 at UTC-6; now() is 12:00 June 1 there.
        done.completed_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap());
        let requests = vec![done];
        let me = user("USR-101", Role::Responder);
        let input = StatisticsInput {
            user: &me,
            help_requests: &requests,
            resources: &[],
            alerts: &[],
        };

        let utc = compute_statistics(&input, now(), &Utc);
        assert_eq!(utc.responder.completed_today, 1);

        let central = FixedOffset::west_opt(6 * 3600).unwrap();
        let local = compute_statistics(&input, now(), &central);
        assert_eq!(local.responder.completed_today, 0);
    }

    #[test]
    fn test_administrator_distinct_responders() {
        let mut a = request("HLP-1", "USR-001", NeedType::Shelter, RequestStatus::Assigned);
        a.responder = Some(Responder::new("USR-101", "Sarah Johnson"));
        let mut b = request("HLP-2", "USR-002", NeedType::Medical, RequestStatus::InProgress);
        b.responder = Some(Responder::new("USR-101", "Sarah Johnson"));
        let mut c = request("HLP-3", "USR-003", NeedType::Rescue, RequestStatus::Completed);
        c.responder = Some(Responder::new("USR-102", "Mike Chen"));
        let d = request("HLP-4", "USR-004", NeedType::Supply, RequestStatus::Submitted);

        let stats = compute(&user("USR-401", Role::Administrator), &[a, b, c, d], &[], &[]);
        assert_eq!(stats.administrator.total_requests, 4);
        assert_eq!(stats.administrator.active_responders, 2);
    }

    #[test]
    fn test_provider_requests_served() {
        let resources = vec![
            resource("RES-1", "USR-201", ResourceType::Supply, ResourceStatus::Limited),
            resource("RES-2", "USR-201", ResourceType::Shelter, ResourceStatus::Unavailable),
            resource("RES-3", "USR-999", ResourceType::Medical, ResourceStatus::Available),
        ];
        let served = request("HLP-1", "USR-001", NeedType::Supply, RequestStatus::Completed);
        let open = request("HLP-2", "USR-002", NeedType::Supply, RequestStatus::InProgress);
        let other_provider = request("HLP-3", "USR-003", NeedType::Medical, RequestStatus::Completed);
        let mut far = request("HLP-4", "USR-004", NeedType::Supply, RequestStatus::Completed);
        far.location.lat += 1.0;
        let rescue = request("HLP-5", "USR-005", NeedType::Rescue, RequestStatus::Completed);

        let requests = vec![served, open, other_provider, far, rescue];
        let stats = compute(&user("USR-201", Role::ResourceProvider), &requests, &resources, &[]);
        assert_eq!(stats.resource_provider.total_resources, 2);
        assert_eq!(stats.resource_provider.active_resources, 1);
        assert_eq!(stats.resource_provider.requests_served, 1);
    }

    #[test]
    fn test_serves_radius_is_exclusive() {
        let res = resource("RES-1", "USR-201", ResourceType::Supply, ResourceStatus::Available);
        let mut req = request("HLP-1", "USR-001", NeedType::Supply, RequestStatus::Completed);
        req.location.lat = res.location.lat + 0.009;
        assert!(serves(&res, &req));
        req.location.lat = res.location.lat + 0.02;
        assert!(!serves(&res, &req));
        req.location.lat = res.location.lat;
        req.need_type = NeedType::Medical;
        assert!(!serves(&res, &req));
    }
}
