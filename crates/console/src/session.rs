//! Session bootstrap from configuration.

use domain::models::User;
use domain::services::seed_user;
use domain::AppState;
use tracing::info;

use crate::config::{Config, ConfigValidationError};

/// Builds the session state described by `config`.
pub fn build_state(config: &Config) -> Result<AppState, ConfigValidationError> {
    let user = session_user(config);
    let mut state = if config.session.seed {
        let mut state = AppState::seeded();
        state.set_current_user(user);
        state
    } else {
        AppState::new(user)
    };

    if let Some(role) = config.session_role()? {
        state.switch_role(role);
    }

    info!(
        user_id = %state.current_user().id,
        role = %state.current_user().role,
        seeded = config.session.seed,
        requests = state.help_requests().len(),
        resources = state.resources().len(),
        alerts = state.alerts().len(),
        "Session initialized"
    );

    Ok(state)
}

fn session_user(config: &Config) -> User {
    let mut user = seed_user();
    if let Some(id) = &config.session.user_id {
        user.id = id.clone();
    }
    if let Some(name) = &config.session.user_name {
        user.name = name.clone();
    }
    if let Some(email) = &config.session.user_email {
        user.email = email.clone();
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::Role;

    #[test]
    fn test_build_seeded_state() {
        let config = Config::load_with_overrides(&[]).unwrap();
        let state = build_state(&config).unwrap();
        assert_eq!(state.current_user().id, "USR-001");
        assert_eq!(state.current_user().role, Role::Civilian);
        assert_eq!(state.help_requests().len(), 2);
    }

    #[test]
    fn test_build_empty_state_with_overrides() {
        let config = Config::load_with_overrides(&[
            ("session.seed", "false"),
            ("session.role", "resource_provider"),
            ("session.user_id", "USR-203"),
            ("session.user_name", "Red Cross Coordinator"),
        ])
        .unwrap();
        let state = build_state(&config).unwrap();
        assert_eq!(state.current_user().id, "USR-203");
        assert_eq!(state.current_user().name, "Red Cross Coordinator");
        assert_eq!(state.current_user().role, Role::ResourceProvider);
        assert!(state.help_requests().is_empty());
        assert!(state.resources().is_empty());
    }

    #[test]
    fn test_build_state_rejects_unknown_role() {
        let config = Config::load_with_overrides(&[("session.role", "MAYOR")]).unwrap();
        assert!(build_state(&config).is_err());
    }
}
