//! # Actions
//!
//! Defines the actions that can be performed on resources.
//!
//! Actions carry no implication hierarchy: holding `Manage` on a resource
//! does not grant `Delete` on it. A role holds exactly the
//! resource/action pairs listed in its grant table and nothing else.

use serde::{Deserialize, Serialize};

/// Actions that can be performed on resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// View resources owned by or assigned to the caller.
    View,
    /// View resources across all agencies and users.
    ViewAll,
    /// Create new resource instances.
    Create,
    /// Modify existing resource data.
    Update,
    /// Permanently remove resource instances.
    Delete,
    /// Assign a resource to a user or campaign.
    Assign,
    /// Approve or reject a pending resource.
    Approve,
    /// Download or export resource data.
    Export,
    /// Administer resource membership and configuration.
    Manage,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::ViewAll => "view_all",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Assign => "assign",
            Action::Approve => "approve",
            Action::Export => "export",
            Action::Manage => "manage",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// Parsing is case-insensitive and accepts common aliases.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("view"), Some(Action::View));
    /// assert_eq!(Action::parse("read"), Some(Action::View)); // Alias
    /// assert_eq!(Action::parse("view_all"), Some(Action::ViewAll));
    /// assert_eq!(Action::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" | "read" | "get" => Some(Action::View),
            "view_all" | "viewall" => Some(Action::ViewAll),
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "modify" => Some(Action::Update),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "assign" => Some(Action::Assign),
            "approve" | "accept" => Some(Action::Approve),
            "export" | "download" => Some(Action::Export),
            "manage" | "admin" => Some(Action::Manage),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::View,
            Action::ViewAll,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Assign,
            Action::Approve,
            Action::Export,
            Action::Manage,
        ]
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::View | Action::ViewAll | Action::Export)
    }

    /// Check if this action modifies resources.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Action::Create | Action::Update | Action::Delete | Action::Assign | Action::Approve
        )
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }
}
