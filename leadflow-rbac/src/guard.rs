//! # Guards
//!
//! Thin adapters between the permission matrix and conditional rendering.
//!
//! The dashboard shows an action only when the signed-in role may perform
//! it. A [`Guard`] wraps the role claim from the session, which may be
//! missing or malformed, and answers those checks. An absent or
//! unrecognized role denies everything; a hidden button is the cheap
//! failure, an exposed one is not.

use crate::permissions::{Permission, PermissionSet};
use crate::roles::Role;

/// A permission guard for one session's role claim.
///
/// # Example
///
/// ```
/// use leadflow_rbac::{Guard, Permission};
///
/// let approve = Permission::parse("lead:approve").unwrap();
///
/// let guard = Guard::from_claim("agency_admin");
/// assert!(guard.can(approve));
///
/// // Unknown role claims deny everything.
/// let guard = Guard::from_claim("intern");
/// assert!(!guard.can(approve));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guard {
    role: Option<Role>,
}

impl Guard {
    /// Create a guard for a known role.
    pub fn for_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Create a guard from a raw role claim string.
    ///
    /// An unrecognized claim yields a guard with no role, which denies
    /// every check.
    pub fn from_claim(claim: &str) -> Self {
        Self {
            role: Role::parse(claim),
        }
    }

    /// Create a guard for an unauthenticated session.
    pub fn anonymous() -> Self {
        Self { role: None }
    }

    /// The role this guard is checking for, if one was recognized.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Check whether the session's role holds a permission.
    pub fn can(&self, permission: Permission) -> bool {
        self.role.is_some_and(|r| r.has_permission(permission))
    }

    /// Check whether the session's role holds at least one of the given
    /// permissions. `false` for an empty slice.
    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        self.role.is_some_and(|r| r.has_any_permission(permissions))
    }

    /// Check whether the session's role holds every one of the given
    /// permissions.
    ///
    /// `true` for an empty slice only when a recognized role is present;
    /// an absent or unknown role never passes a guard.
    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        self.role
            .is_some_and(|r| r.has_all_permissions(permissions))
    }

    /// Check whether the session's role is exactly the given role.
    pub fn is(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// The session role's full permission set; empty when no role was
    /// recognized.
    pub fn permissions(&self) -> PermissionSet {
        self.role
            .map(|r| r.permission_set())
            .unwrap_or_default()
    }

    /// Run `render` only when the session's role holds the permission.
    ///
    /// This is the shape conditional UI wrappers take: produce the gated
    /// content, or nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::{Guard, Permission, Role};
    ///
    /// let export = Permission::parse("cost:export").unwrap();
    ///
    /// let button = Guard::for_role(Role::AgencyAdmin).show(export, || "Export CSV");
    /// assert_eq!(button, Some("Export CSV"));
    ///
    /// let button = Guard::for_role(Role::Client).show(export, || "Export CSV");
    /// assert_eq!(button, None);
    /// ```
    pub fn show<T, F>(&self, permission: Permission, render: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        self.can(permission).then(render)
    }
}
