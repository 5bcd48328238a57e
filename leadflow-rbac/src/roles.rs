//! # Roles and the permission matrix
//!
//! Defines the platform's user roles and the static role/permission
//! matrix, along with the query surface the dashboard uses to gate
//! actions.
//!
//! The matrix is compiled into the binary as one `const` grant table per
//! role. It is never mutated at runtime; changing a role's permissions
//! means changing the table and redeploying. Because nothing is written
//! after initialization, any number of threads may query it concurrently
//! without synchronization.
//!
//! Roles are independent rows, not a hierarchy: no role's grants are
//! assumed to be a subset of another's. `Client` holds `cost:view` while
//! `Researcher` does not, so rank comparisons would give wrong answers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::error::RbacError;
use crate::permissions::{Permission, PermissionSet};
use crate::resources::ResourceType;

/// Platform operators: full access to every resource, including agency
/// lifecycle.
const SUPER_ADMIN_GRANTS: &[Permission] = &[
    Permission::new(ResourceType::Agency, Action::View),
    Permission::new(ResourceType::Agency, Action::Create),
    Permission::new(ResourceType::Agency, Action::Update),
    Permission::new(ResourceType::Agency, Action::Delete),
    Permission::new(ResourceType::Agency, Action::Manage),
    Permission::new(ResourceType::User, Action::View),
    Permission::new(ResourceType::User, Action::Create),
    Permission::new(ResourceType::User, Action::Update),
    Permission::new(ResourceType::User, Action::Delete),
    Permission::new(ResourceType::User, Action::Manage),
    Permission::new(ResourceType::Campaign, Action::View),
    Permission::new(ResourceType::Campaign, Action::Create),
    Permission::new(ResourceType::Campaign, Action::Update),
    Permission::new(ResourceType::Campaign, Action::Delete),
    Permission::new(ResourceType::Campaign, Action::Assign),
    Permission::new(ResourceType::Lead, Action::View),
    Permission::new(ResourceType::Lead, Action::Create),
    Permission::new(ResourceType::Lead, Action::Update),
    Permission::new(ResourceType::Lead, Action::Delete),
    Permission::new(ResourceType::Lead, Action::Approve),
    Permission::new(ResourceType::Lead, Action::Export),
    Permission::new(ResourceType::ResearchIq, Action::View),
    Permission::new(ResourceType::ResearchIq, Action::ViewAll),
    Permission::new(ResourceType::Cost, Action::View),
    Permission::new(ResourceType::Cost, Action::Export),
    Permission::new(ResourceType::Report, Action::View),
    Permission::new(ResourceType::Report, Action::Export),
    Permission::new(ResourceType::Settings, Action::View),
    Permission::new(ResourceType::Settings, Action::Update),
];

/// Agency administrators: full control of their own agency's users,
/// campaigns, and leads. Agency lifecycle (create/delete) stays with
/// platform operators, as does removing user accounts outright.
const AGENCY_ADMIN_GRANTS: &[Permission] = &[
    Permission::new(ResourceType::Agency, Action::View),
    Permission::new(ResourceType::Agency, Action::Update),
    Permission::new(ResourceType::User, Action::View),
    Permission::new(ResourceType::User, Action::Create),
    Permission::new(ResourceType::User, Action::Update),
    Permission::new(ResourceType::User, Action::Manage),
    Permission::new(ResourceType::Campaign, Action::View),
    Permission::new(ResourceType::Campaign, Action::Create),
    Permission::new(ResourceType::Campaign, Action::Update),
    Permission::new(ResourceType::Campaign, Action::Delete),
    Permission::new(ResourceType::Campaign, Action::Assign),
    Permission::new(ResourceType::Lead, Action::View),
    Permission::new(ResourceType::Lead, Action::Create),
    Permission::new(ResourceType::Lead, Action::Update),
    Permission::new(ResourceType::Lead, Action::Delete),
    Permission::new(ResourceType::Lead, Action::Approve),
    Permission::new(ResourceType::Lead, Action::Export),
    Permission::new(ResourceType::ResearchIq, Action::View),
    Permission::new(ResourceType::ResearchIq, Action::ViewAll),
    Permission::new(ResourceType::Cost, Action::View),
    Permission::new(ResourceType::Cost, Action::Export),
    Permission::new(ResourceType::Report, Action::View),
    Permission::new(ResourceType::Report, Action::Export),
    Permission::new(ResourceType::Settings, Action::View),
    Permission::new(ResourceType::Settings, Action::Update),
];

/// Researchers: source and work leads on assigned campaigns. They cannot
/// delete or approve leads, and billing data is not theirs to see.
const RESEARCHER_GRANTS: &[Permission] = &[
    Permission::new(ResourceType::Campaign, Action::View),
    Permission::new(ResourceType::Lead, Action::View),
    Permission::new(ResourceType::Lead, Action::Create),
    Permission::new(ResourceType::Lead, Action::Update),
    Permission::new(ResourceType::ResearchIq, Action::View),
    Permission::new(ResourceType::Report, Action::View),
];

/// Clients: read-only review of campaign results and costs.
const CLIENT_GRANTS: &[Permission] = &[
    Permission::new(ResourceType::Campaign, Action::View),
    Permission::new(ResourceType::Lead, Action::View),
    Permission::new(ResourceType::Cost, Action::View),
];

/// User role within the platform.
///
/// The set of roles is closed and flat. Every role maps to exactly one
/// grant table, and every permission check is a lookup in that table.
///
/// # Examples
///
/// ```
/// use leadflow_rbac::{Action, Permission, ResourceType, Role};
///
/// let role = Role::Researcher;
/// assert!(role.has_permission(Permission::new(ResourceType::Lead, Action::Create)));
/// assert!(!role.has_permission(Permission::new(ResourceType::Lead, Action::Delete)));
/// assert!(!role.can_approve_leads());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator with access to every agency.
    SuperAdmin,

    /// Administrator of a single agency.
    AgencyAdmin,

    /// Lead researcher working assigned campaigns.
    Researcher,

    /// Agency customer reviewing results.
    Client,
}

impl Role {
    /// Get the grant table for this role.
    ///
    /// The returned slice is the role's full permission list, in matrix
    /// order. Most callers want [`has_permission`](Role::has_permission)
    /// or [`permission_set`](Role::permission_set) instead.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::SuperAdmin => SUPER_ADMIN_GRANTS,
            Role::AgencyAdmin => AGENCY_ADMIN_GRANTS,
            Role::Researcher => RESEARCHER_GRANTS,
            Role::Client => CLIENT_GRANTS,
        }
    }

    /// Get the role's permissions as an owned set.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::{PermissionSet, Role};
    ///
    /// let expected = PermissionSet::from_strs(&["campaign:view", "lead:view", "cost:view"]);
    /// assert_eq!(Role::Client.permission_set(), expected);
    /// ```
    pub fn permission_set(&self) -> PermissionSet {
        self.permissions().iter().copied().collect()
    }

    /// Check whether this role holds a permission.
    ///
    /// Membership is exact: `true` iff the permission appears in the
    /// role's grant table.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Check whether this role holds at least one of the given permissions.
    ///
    /// Logical OR with short-circuit; slice order never changes the
    /// result. An empty slice returns `false`, since no element satisfies
    /// "at least one".
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::{Permission, Role};
    ///
    /// let view = Permission::parse("campaign:view").unwrap();
    /// let delete = Permission::parse("campaign:delete").unwrap();
    ///
    /// assert!(Role::Client.has_any_permission(&[view, delete]));
    /// assert!(!Role::Client.has_any_permission(&[]));
    /// ```
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(*p))
    }

    /// Check whether this role holds every one of the given permissions.
    ///
    /// Logical AND; slice order never changes the result. An empty slice
    /// returns `true`, vacuously.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::{Permission, Role};
    ///
    /// let view = Permission::parse("campaign:view").unwrap();
    /// let delete = Permission::parse("campaign:delete").unwrap();
    ///
    /// assert!(!Role::Client.has_all_permissions(&[view, delete]));
    /// assert!(Role::Client.has_all_permissions(&[view]));
    /// assert!(Role::Client.has_all_permissions(&[]));
    /// ```
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has_permission(*p))
    }

    /// Check if this is the platform operator role.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    /// Check if this is the agency administrator role.
    pub fn is_agency_admin(&self) -> bool {
        matches!(self, Role::AgencyAdmin)
    }

    /// Check if this is the researcher role.
    pub fn is_researcher(&self) -> bool {
        matches!(self, Role::Researcher)
    }

    /// Check if this is the client role.
    pub fn is_client(&self) -> bool {
        matches!(self, Role::Client)
    }

    /// Check if this role can manage user accounts.
    pub fn can_manage_users(&self) -> bool {
        self.has_permission(Permission::new(ResourceType::User, Action::Manage))
    }

    /// Check if this role can approve leads.
    pub fn can_approve_leads(&self) -> bool {
        self.has_permission(Permission::new(ResourceType::Lead, Action::Approve))
    }

    /// Check if this role can view Research IQ analytics across all users.
    pub fn can_view_all_research_iq(&self) -> bool {
        self.has_permission(Permission::new(ResourceType::ResearchIq, Action::ViewAll))
    }

    /// Check if this role can export cost data.
    pub fn can_export_costs(&self) -> bool {
        self.has_permission(Permission::new(ResourceType::Cost, Action::Export))
    }

    /// Parse a role from its string representation.
    ///
    /// Parsing is case-insensitive. Returns `None` for unrecognized
    /// values; callers holding raw session claims should treat `None` as
    /// a role with no permissions (see [`Guard`](crate::guard::Guard)).
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::Role;
    ///
    /// assert_eq!(Role::parse("agency_admin"), Some(Role::AgencyAdmin));
    /// assert_eq!(Role::parse("CLIENT"), Some(Role::Client));
    /// assert_eq!(Role::parse("intern"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "super_admin" | "superadmin" => Some(Role::SuperAdmin),
            "agency_admin" | "agencyadmin" => Some(Role::AgencyAdmin),
            "researcher" => Some(Role::Researcher),
            "client" => Some(Role::Client),
            _ => None,
        }
    }

    /// Get the string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::AgencyAdmin => "agency_admin",
            Role::Researcher => "researcher",
            Role::Client => "client",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::AgencyAdmin => "Agency Admin",
            Role::Researcher => "Researcher",
            Role::Client => "Client",
        }
    }

    /// Get all roles.
    pub fn all() -> Vec<Self> {
        vec![
            Role::SuperAdmin,
            Role::AgencyAdmin,
            Role::Researcher,
            Role::Client,
        ]
    }
}

impl Default for Role {
    /// The least privileged role.
    fn default() -> Self {
        Role::Client
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(s: &str) -> Permission {
        Permission::parse(s).unwrap()
    }

    #[test]
    fn test_super_admin_grants() {
        assert!(Role::SuperAdmin.has_permission(perm("agency:delete")));
        assert!(Role::SuperAdmin.has_permission(perm("agency:create")));
        assert!(Role::SuperAdmin.has_permission(perm("user:delete")));
        assert!(Role::SuperAdmin.has_permission(perm("lead:approve")));
        assert!(Role::SuperAdmin.has_permission(perm("cost:export")));
    }

    #[test]
    fn test_agency_admin_grants() {
        assert!(Role::AgencyAdmin.has_permission(perm("campaign:create")));
        assert!(Role::AgencyAdmin.has_permission(perm("lead:approve")));
        assert!(Role::AgencyAdmin.has_permission(perm("user:manage")));
        assert!(Role::AgencyAdmin.has_permission(perm("settings:update")));

        // Agency lifecycle stays with platform operators.
        assert!(!Role::AgencyAdmin.has_permission(perm("agency:create")));
        assert!(!Role::AgencyAdmin.has_permission(perm("agency:delete")));
        assert!(!Role::AgencyAdmin.has_permission(perm("user:delete")));
    }

    #[test]
    fn test_researcher_grants() {
        assert!(Role::Researcher.has_permission(perm("lead:create")));
        assert!(Role::Researcher.has_permission(perm("lead:update")));
        assert!(Role::Researcher.has_permission(perm("campaign:view")));
        assert!(Role::Researcher.has_permission(perm("research_iq:view")));

        assert!(!Role::Researcher.has_permission(perm("lead:delete")));
        assert!(!Role::Researcher.has_permission(perm("lead:approve")));
        assert!(!Role::Researcher.has_permission(perm("cost:view")));
        assert!(!Role::Researcher.has_permission(perm("research_iq:view_all")));
    }

    #[test]
    fn test_client_grants_exactly() {
        let set = Role::Client.permission_set();
        let expected = PermissionSet::from_strs(&["campaign:view", "lead:view", "cost:view"]);
        assert_eq!(set, expected);

        assert!(!Role::Client.has_permission(perm("agency:delete")));
        assert!(!Role::Client.has_permission(perm("campaign:delete")));
        assert!(!Role::Client.has_permission(perm("lead:create")));
    }

    #[test]
    fn test_has_any_permission() {
        assert!(Role::Client.has_any_permission(&[perm("campaign:view"), perm("campaign:delete")]));
        assert!(!Role::Client.has_any_permission(&[perm("campaign:delete"), perm("agency:delete")]));
    }

    #[test]
    fn test_has_all_permissions() {
        assert!(!Role::Client.has_all_permissions(&[perm("campaign:view"), perm("campaign:delete")]));
        assert!(Role::Client.has_all_permissions(&[perm("campaign:view"), perm("lead:view")]));
        assert!(Role::SuperAdmin
            .has_all_permissions(&[perm("agency:delete"), perm("user:delete"), perm("cost:export")]));
    }

    #[test]
    fn test_empty_slice_quantifiers() {
        for role in Role::all() {
            assert!(!role.has_any_permission(&[]));
            assert!(role.has_all_permissions(&[]));
        }
    }

    #[test]
    fn test_singleton_consistency() {
        // Batch queries over a single permission agree with the single query.
        for role in Role::all() {
            for resource in ResourceType::all() {
                for action in Action::all() {
                    let p = Permission::new(resource, action);
                    assert_eq!(role.has_any_permission(&[p]), role.has_permission(p));
                    assert_eq!(role.has_all_permissions(&[p]), role.has_permission(p));
                }
            }
        }
    }

    #[test]
    fn test_query_order_irrelevant() {
        let forward = [perm("campaign:view"), perm("agency:delete")];
        let backward = [perm("agency:delete"), perm("campaign:view")];
        for role in Role::all() {
            assert_eq!(
                role.has_any_permission(&forward),
                role.has_any_permission(&backward)
            );
            assert_eq!(
                role.has_all_permissions(&forward),
                role.has_all_permissions(&backward)
            );
        }
    }

    #[test]
    fn test_matrix_matches_permission_set() {
        // permission_set is exactly the grant table, no more, no less.
        for role in Role::all() {
            let set = role.permission_set();
            assert_eq!(set.len(), role.permissions().len());
            for p in role.permissions() {
                assert!(set.has(p));
            }
        }
    }

    #[test]
    fn test_grant_tables_have_no_duplicates() {
        for role in Role::all() {
            assert_eq!(role.permission_set().len(), role.permissions().len());
        }
    }

    #[test]
    fn test_grant_table_sizes() {
        assert_eq!(Role::SuperAdmin.permissions().len(), 29);
        assert_eq!(Role::AgencyAdmin.permissions().len(), 25);
        assert_eq!(Role::Researcher.permissions().len(), 6);
        assert_eq!(Role::Client.permissions().len(), 3);
    }

    #[test]
    fn test_literal_subset_relations() {
        let super_admin = Role::SuperAdmin.permission_set();
        let agency_admin = Role::AgencyAdmin.permission_set();
        let researcher = Role::Researcher.permission_set();
        let client = Role::Client.permission_set();

        // Incidental facts of the current tables; re-check when editing the matrix.
        assert!(super_admin.contains_all(&agency_admin));
        assert!(agency_admin.contains_all(&researcher));

        // Client is not below researcher: clients see costs, researchers do not.
        assert!(!researcher.contains_all(&client));
        assert!(!client.contains_all(&researcher));
    }

    #[test]
    fn test_role_predicates() {
        assert!(Role::SuperAdmin.is_super_admin());
        assert!(!Role::SuperAdmin.is_client());
        assert!(Role::AgencyAdmin.is_agency_admin());
        assert!(Role::Researcher.is_researcher());
        assert!(Role::Client.is_client());
    }

    #[test]
    fn test_can_manage_users() {
        assert!(Role::SuperAdmin.can_manage_users());
        assert!(Role::AgencyAdmin.can_manage_users());
        assert!(!Role::Researcher.can_manage_users());
        assert!(!Role::Client.can_manage_users());
    }

    #[test]
    fn test_can_approve_leads() {
        assert!(Role::SuperAdmin.can_approve_leads());
        assert!(Role::AgencyAdmin.can_approve_leads());
        assert!(!Role::Researcher.can_approve_leads());
        assert!(!Role::Client.can_approve_leads());
    }

    #[test]
    fn test_can_view_all_research_iq() {
        assert!(Role::SuperAdmin.can_view_all_research_iq());
        assert!(Role::AgencyAdmin.can_view_all_research_iq());
        assert!(!Role::Researcher.can_view_all_research_iq());
        assert!(!Role::Client.can_view_all_research_iq());
    }

    #[test]
    fn test_can_export_costs() {
        assert!(Role::SuperAdmin.can_export_costs());
        assert!(Role::AgencyAdmin.can_export_costs());
        assert!(!Role::Researcher.can_export_costs());
        assert!(!Role::Client.can_export_costs());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("agency_admin"), Some(Role::AgencyAdmin));
        assert_eq!(Role::parse("RESEARCHER"), Some(Role::Researcher));
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("intern"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("client".parse::<Role>(), Ok(Role::Client));
        assert_eq!(
            "intern".parse::<Role>(),
            Err(RbacError::UnknownRole("intern".to_string()))
        );
    }

    #[test]
    fn test_role_as_str_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_default_role_is_least_privileged() {
        assert_eq!(Role::default(), Role::Client);
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");

        let parsed: Role = serde_json::from_str("\"agency_admin\"").unwrap();
        assert_eq!(parsed, Role::AgencyAdmin);
    }
}
