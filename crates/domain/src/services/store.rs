//! Session state store.
//!
//! `AppState` owns the session user and the help request, resource and alert
//! collections. It is constructed explicitly and passed by reference; there is
//! no process-wide instance.
//!
//! Collections sit behind `Arc` and are updated copy-on-write, so a
//! [`StateSnapshot`] taken before a mutation keeps seeing the old data.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{EntityKind, StoreError};
use crate::models::{
    Alert, HelpRequest, NewAlert, NewHelpRequest, NewResource, RequestStatus, Resource,
    ResourceStatus, ResourceUpdate, Responder, Role, Statistics, User,
};
use crate::services::statistics::{compute_statistics, StatisticsInput};
use shared::ids::{generate_id, ALERT_PREFIX, HELP_REQUEST_PREFIX, RESOURCE_PREFIX};

/// Mutable state of one dashboard session.
#[derive(Debug, Clone)]
pub struct AppState {
    current_user: User,
    help_requests: Arc<Vec<HelpRequest>>,
    resources: Arc<Vec<Resource>>,
    alerts: Arc<Vec<Alert>>,
}

/// Immutable view of the collections at one point in time.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    pub current_user: User,
    help_requests: Arc<Vec<HelpRequest>>,
    resources: Arc<Vec<Resource>>,
    alerts: Arc<Vec<Alert>>,
}

impl StateSnapshot {
    pub fn help_requests(&self) -> &[HelpRequest] {
        &self.help_requests
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Statistics as of this snapshot, with "today" taken from `now` in `tz`.
    pub fn statistics_at<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Statistics {
        let input = StatisticsInput {
            user: &self.current_user,
            help_requests: &self.help_requests,
            resources: &self.resources,
            alerts: &self.alerts,
        };
        compute_statistics(&input, now, tz)
    }
}

impl AppState {
    /// Creates a session with empty collections.
    pub fn new(current_user: User) -> Self {
        Self::with_collections(current_user, Vec::new(), Vec::new(), Vec::new())
    }

    /// Creates a session from existing collections, kept in the given order.
    pub fn with_collections(
        current_user: User,
        help_requests: Vec<HelpRequest>,
        resources: Vec<Resource>,
        alerts: Vec<Alert>,
    ) -> Self {
        Self {
            current_user,
            help_requests: Arc::new(help_requests),
            resources: Arc::new(resources),
            alerts: Arc::new(alerts),
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn set_current_user(&mut self, user: User) {
        info!(user_id = %user.id, role = %user.role, "Session user changed");
        self.current_user = user;
    }

    /// Switches the current user's role, keeping the identity.
    pub fn switch_role(&mut self, role: Role) {
        info!(user_id = %self.current_user.id, from = %self.current_user.role, to = %role, "Role switched");
        self.current_user.role = role;
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn help_requests(&self) -> &[HelpRequest] {
        &self.help_requests
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn help_request(&self, id: &str) -> Option<&HelpRequest> {
        self.help_requests.iter().find(|r| r.id == id)
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn alert(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Requests submitted by the current user.
    pub fn my_requests(&self) -> impl Iterator<Item = &HelpRequest> + '_ {
        self.help_requests
            .iter()
            .filter(move |r| r.civilian_id == self.current_user.id)
    }

    /// Requests assigned to the current user as responder.
    pub fn requests_assigned_to_me(&self) -> impl Iterator<Item = &HelpRequest> + '_ {
        self.help_requests
            .iter()
            .filter(move |r| r.is_assigned_to(&self.current_user.id))
    }

    /// Submitted requests still waiting for a responder.
    pub fn unassigned_requests(&self) -> impl Iterator<Item = &HelpRequest> + '_ {
        self.help_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Submitted && r.responder.is_none())
    }

    /// Resources registered by the current user.
    pub fn my_resources(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.resources
            .iter()
            .filter(move |r| r.provider_id == self.current_user.id)
    }

    pub fn unread_alerts(&self) -> impl Iterator<Item = &Alert> + '_ {
        self.alerts.iter().filter(|a| !a.read)
    }

    /// Cheap point-in-time copy of the session.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current_user: self.current_user.clone(),
            help_requests: Arc::clone(&self.help_requests),
            resources: Arc::clone(&self.resources),
            alerts: Arc::clone(&self.alerts),
        }
    }

    /// Statistics for every role, with "today" in the local time zone.
    pub fn statistics(&self) -> Statistics {
        self.statistics_at(Utc::now(), &Local)
    }

    /// Statistics with an explicit clock and time zone.
    pub fn statistics_at<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Statistics {
        let input = StatisticsInput {
            user: &self.current_user,
            help_requests: &self.help_requests,
            resources: &self.resources,
            alerts: &self.alerts,
        };
        let stats = compute_statistics(&input, now, tz);
        debug!(user_id = %self.current_user.id, role = %self.current_user.role, "Statistics computed");
        stats
    }

    // ------------------------------------------------------------------
    // Help requests
    // ------------------------------------------------------------------

    /// Submits a help request on behalf of the current user.
    ///
    /// Location defaults to the user's location and priority to the need
    /// type's default. The new request is placed first.
    pub fn create_help_request(&mut self, input: NewHelpRequest) -> HelpRequest {
        let priority = input.effective_priority();
        let request = HelpRequest {
            id: generate_id(HELP_REQUEST_PREFIX),
            civilian_id: self.current_user.id.clone(),
            civilian_name: self.current_user.name.clone(),
            need_type: input.need_type,
            description: input.description,
            location: input
                .location
                .unwrap_or_else(|| self.current_user.location.clone()),
            status: RequestStatus::Submitted,
            priority,
            responder: None,
            submitted_at: Utc::now(),
            assigned_at: None,
            completed_at: None,
            completion_notes: None,
        };

        info!(
            request_id = %request.id,
            civilian_id = %request.civilian_id,
            need_type = %request.need_type,
            priority = %request.priority,
            "Help request submitted"
        );

        Arc::make_mut(&mut self.help_requests).insert(0, request.clone());
        request
    }

    /// Assigns a request to a responder and marks it assigned.
    pub fn assign_request(
        &mut self,
        request_id: &str,
        responder_id: &str,
        responder_name: &str,
    ) -> Result<HelpRequest, StoreError> {
        let request = self.help_request_mut(request_id)?;
        request.status = RequestStatus::Assigned;
        request.responder = Some(Responder::new(responder_id, responder_name));
        request.assigned_at = Some(Utc::now());
        let updated = request.clone();

        info!(request_id = %request_id, responder_id = %responder_id, "Help request assigned");
        Ok(updated)
    }

    /// Sets a request's status.
    ///
    /// Any transition is allowed, including moving back from `Completed`.
    /// Completing stamps `completed_at`; it is never cleared afterwards.
    /// Notes replace the stored ones only when given.
    pub fn update_request_status(
        &mut self,
        request_id: &str,
        status: RequestStatus,
        completion_notes: Option<String>,
    ) -> Result<HelpRequest, StoreError> {
        let request = self.help_request_mut(request_id)?;
        let previous = request.status;
        request.status = status;
        if status == RequestStatus::Completed {
            request.completed_at = Some(Utc::now());
        }
        if let Some(notes) = completion_notes.filter(|n| !n.is_empty()) {
            request.completion_notes = Some(notes);
        }
        let updated = request.clone();

        info!(request_id = %request_id, from = %previous, to = %status, "Help request status updated");
        Ok(updated)
    }

    fn help_request_mut(&mut self, id: &str) -> Result<&mut HelpRequest, StoreError> {
        // Look up before make_mut so a miss doesn't clone a shared collection.
        let Some(index) = self.help_requests.iter().position(|r| r.id == id) else {
            warn!(request_id = %id, "Help request not found");
            return Err(StoreError::not_found(EntityKind::HelpRequest, id));
        };
        Ok(&mut Arc::make_mut(&mut self.help_requests)[index])
    }

    // ------------------------------------------------------------------
    // Alerts
    // ------------------------------------------------------------------

    /// Broadcasts an unread alert issued by the current user.
    pub fn broadcast_alert(&mut self, input: NewAlert) -> Alert {
        let alert = Alert {
            id: generate_id(ALERT_PREFIX),
            alert_type: input.alert_type,
            message: input.message,
            urgency: input.urgency,
            timestamp: Utc::now(),
            issued_by: self.current_user.id.clone(),
            read: false,
        };

        info!(
            alert_id = %alert.id,
            alert_type = %alert.alert_type,
            urgency = %alert.urgency,
            issued_by = %alert.issued_by,
            "Alert broadcast"
        );

        Arc::make_mut(&mut self.alerts).insert(0, alert.clone());
        alert
    }

    /// Marks an alert read. Marking an already-read alert is a no-op success.
    pub fn mark_alert_as_read(&mut self, alert_id: &str) -> Result<Alert, StoreError> {
        let Some(index) = self.alerts.iter().position(|a| a.id == alert_id) else {
            warn!(alert_id = %alert_id, "Alert not found");
            return Err(StoreError::not_found(EntityKind::Alert, alert_id));
        };

        if self.alerts[index].read {
            return Ok(self.alerts[index].clone());
        }

        let alert = &mut Arc::make_mut(&mut self.alerts)[index];
        alert.read = true;
        debug!(alert_id = %alert_id, "Alert marked as read");
        Ok(alert.clone())
    }

    // ------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------

    /// Registers a resource owned by the current user.
    pub fn add_resource(&mut self, input: NewResource) -> Resource {
        let resource = Resource {
            id: generate_id(RESOURCE_PREFIX),
            name: input.name,
            resource_type: input.resource_type,
            location: input.location,
            capacity: input.capacity,
            current_occupancy: input.current_occupancy.unwrap_or(0),
            status: input.status.unwrap_or(ResourceStatus::Available),
            contact_info: input.contact_info,
            provider_id: self.current_user.id.clone(),
        };

        info!(
            resource_id = %resource.id,
            resource_type = %resource.resource_type,
            provider_id = %resource.provider_id,
            "Resource added"
        );

        Arc::make_mut(&mut self.resources).insert(0, resource.clone());
        resource
    }

    /// Shallow-merges `update` into the matching resource.
    pub fn update_resource(
        &mut self,
        resource_id: &str,
        update: ResourceUpdate,
    ) -> Result<Resource, StoreError> {
        let Some(index) = self.resources.iter().position(|r| r.id == resource_id) else {
            warn!(resource_id = %resource_id, "Resource not found");
            return Err(StoreError::not_found(EntityKind::Resource, resource_id));
        };

        let resource = &mut Arc::make_mut(&mut self.resources)[index];
        update.apply_to(resource);

        info!(resource_id = %resource_id, status = %resource.status, "Resource updated");
        Ok(resource.clone())
    }
}
