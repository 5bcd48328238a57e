//! # Permissions
//!
//! Core permission type and set operations.
//!
//! A permission is a flat `resource:action` pair from a closed namespace.
//! There are no wildcards and no per-instance scoping: `lead:approve`
//! covers leads as a resource type, not any particular lead.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::error::RbacError;
use crate::resources::ResourceType;

/// A permission combining a resource type with an action.
///
/// # Example
///
/// ```
/// use leadflow_rbac::{Action, Permission, ResourceType};
///
/// let perm = Permission::new(ResourceType::Campaign, Action::Create);
/// assert_eq!(perm.to_string(), "campaign:create");
/// assert_eq!(Permission::parse("campaign:create"), Some(perm));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The resource type this permission applies to.
    pub resource: ResourceType,
    /// The action allowed on the resource.
    pub action: Action,
}

impl Permission {
    /// Create a new permission.
    pub const fn new(resource: ResourceType, action: Action) -> Self {
        Self { resource, action }
    }

    /// Parse a permission from its `resource:action` string form.
    ///
    /// Returns `None` for malformed strings or unknown segments. Extra
    /// segments are rejected; permissions are never instance-scoped.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::{Action, Permission, ResourceType};
    ///
    /// let perm = Permission::parse("lead:approve").unwrap();
    /// assert_eq!(perm.resource, ResourceType::Lead);
    /// assert_eq!(perm.action, Action::Approve);
    ///
    /// assert_eq!(Permission::parse("lead"), None);
    /// assert_eq!(Permission::parse("lead:approve:123"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s
            .split_once(':')
            .ok_or_else(|| RbacError::InvalidPermission(s.to_string()))?;
        let resource = ResourceType::parse(resource)
            .ok_or_else(|| RbacError::UnknownResource(resource.to_string()))?;
        let action = Action::parse(action)
            .ok_or_else(|| RbacError::UnknownAction(action.to_string()))?;
        Ok(Self { resource, action })
    }
}

/// A set of permissions.
///
/// Membership is exact: `has` answers whether the precise
/// resource/action pair is in the set, with no widening of any kind.
///
/// # Example
///
/// ```
/// use leadflow_rbac::{Action, Permission, PermissionSet, ResourceType};
///
/// let mut set = PermissionSet::new();
/// set.add(Permission::new(ResourceType::Lead, Action::View));
/// set.add(Permission::new(ResourceType::Lead, Action::Create));
///
/// assert!(set.has(&Permission::new(ResourceType::Lead, Action::View)));
/// assert!(!set.has(&Permission::new(ResourceType::Lead, Action::Delete)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Add a permission to the set.
    pub fn add(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Add multiple permissions to the set.
    pub fn add_all<I>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = Permission>,
    {
        self.permissions.extend(permissions);
    }

    /// Remove a permission from the set.
    ///
    /// Returns `true` if the permission was present.
    pub fn remove(&mut self, permission: &Permission) -> bool {
        self.permissions.remove(permission)
    }

    /// Check if the set contains a permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Get all permissions in the set.
    ///
    /// Order is unspecified.
    pub fn all(&self) -> Vec<Permission> {
        self.permissions.iter().copied().collect()
    }

    /// Iterate over the permissions in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        self.permissions.extend(other.permissions.iter().copied());
    }

    /// Create from a list of `resource:action` strings.
    ///
    /// Unparseable entries are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strs(&["campaign:view", "lead:approve", "bogus"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strs(perms: &[&str]) -> Self {
        perms.iter().filter_map(|s| Permission::parse(s)).collect()
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Clear all permissions.
    pub fn clear(&mut self) {
        self.permissions.clear();
    }

    /// Check if this set contains every permission from another set.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.permissions.iter().all(|perm| self.has(perm))
    }

    /// Check if this set contains at least one permission from another set.
    pub fn contains_any(&self, other: &PermissionSet) -> bool {
        other.permissions.iter().any(|perm| self.has(perm))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}
