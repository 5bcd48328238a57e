//! Error types for parsing role and permission strings.
//!
//! Permission checks themselves never produce errors: an unrecognized role
//! or a missing grant is an ordinary `false`. These errors exist only for
//! callers that parse wire strings via `FromStr` and want to know why a
//! value was rejected.

use thiserror::Error;

/// Errors produced at the string-parsing boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RbacError {
    /// Role string does not name a known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Resource segment of a permission string is not a known resource type.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Action segment of a permission string is not a known action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Permission string is not in `resource:action` form.
    #[error("invalid permission (expected resource:action): {0}")]
    InvalidPermission(String),
}
