//! Domain error types.

use std::fmt;
use thiserror::Error;

/// Collection a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    HelpRequest,
    Resource,
    Alert,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::HelpRequest => write!(f, "help request"),
            EntityKind::Resource => write!(f, "resource"),
            EntityKind::Alert => write!(f, "alert"),
        }
    }
}

/// Errors returned by state store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },
}

impl StoreError {
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Opt-in for callers that treat a missing id as a silent no-op.
pub trait IgnoreNotFound<T> {
    /// Maps `NotFound` to `Ok(None)` and keeps every other outcome.
    fn ignore_not_found(self) -> Result<Option<T>, StoreError>;
}

impl<T> IgnoreNotFound<T> for Result<T, StoreError> {
    fn ignore_not_found(self) -> Result<Option<T>, StoreError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(StoreError::NotFound { .. }) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(EntityKind::HelpRequest, "HLP-404");
        assert_eq!(err.to_string(), "help request not found: HLP-404");
        assert!(err.is_not_found());

        let err = StoreError::not_found(EntityKind::Alert, "ALT-9");
        assert_eq!(err.to_string(), "alert not found: ALT-9");
    }

    #[test]
    fn test_ignore_not_found() {
        let found: Result<u32, StoreError> = Ok(7);
        assert_eq!(found.ignore_not_found(), Ok(Some(7)));

        let missing: Result<u32, StoreError> =
            Err(StoreError::not_found(EntityKind::Resource, "RES-404"));
        assert_eq!(missing.ignore_not_found(), Ok(None));
    }
}
