//! # LeadFlow RBAC (Role-Based Access Control)
//!
//! This crate provides the role and permission model for the LeadFlow
//! lead-research platform, shared by the dashboard and API services.
//!
//! ## Overview
//!
//! The leadflow-rbac crate handles:
//! - **Resources**: The resource types permissions range over
//! - **Actions**: Operations that can be performed on resources
//! - **Permissions**: Resource + Action combinations
//! - **Roles**: The closed role set and its static permission matrix
//! - **Guards**: Session-level adapters for conditional rendering
//!
//! ## Architecture
//!
//! ```text
//! Permission = Resource + Action
//!
//! Examples:
//!   "campaign:create"        - Create campaigns
//!   "lead:approve"           - Approve pending leads
//!   "research_iq:view_all"   - View Research IQ across all users
//! ```
//!
//! Permissions form a flat, closed namespace. There are no wildcards, no
//! implication between actions, and no per-instance scoping; a check is
//! always an exact lookup in a role's grant table.
//!
//! ## Roles
//!
//! Four roles, each with a fixed grant table compiled into the binary:
//!
//! - **SuperAdmin**: platform operator, full access including agency lifecycle
//! - **AgencyAdmin**: full control within one agency, minus agency lifecycle
//! - **Researcher**: sources and works leads on assigned campaigns
//! - **Client**: read-only review of campaign results and costs
//!
//! The tables are independent rows, not a hierarchy, and are never
//! mutated at runtime. Changing a role's permissions means changing the
//! table and redeploying. Queries are lock-free and safe from any number
//! of threads.
//!
//! ## Usage
//!
//! ```rust
//! use leadflow_rbac::{Action, Guard, Permission, ResourceType, Role};
//!
//! // Query a role directly.
//! let role = Role::Researcher;
//! assert!(role.has_permission(Permission::new(ResourceType::Lead, Action::Create)));
//! assert!(!role.can_approve_leads());
//!
//! // Or guard on a raw session claim.
//! let guard = Guard::from_claim("agency_admin");
//! assert!(guard.can(Permission::new(ResourceType::Lead, Action::Approve)));
//!
//! // Malformed claims deny everything rather than erroring.
//! let guard = Guard::from_claim("not-a-role");
//! assert!(!guard.can(Permission::new(ResourceType::Campaign, Action::View)));
//! ```
//!
//! ## Deny by default
//!
//! A denied permission is an ordinary `false`, never an error or a panic.
//! Unrecognized role claims resolve to an empty permission set. When role
//! data is malformed the UI hides an action it could have shown, which is
//! the failure mode we prefer over showing one it should not.

pub mod actions;
pub mod error;
pub mod guard;
pub mod permissions;
pub mod resources;
pub mod roles;

// Re-export main types for convenience
pub use actions::Action;
pub use error::RbacError;
pub use guard::Guard;
pub use permissions::{Permission, PermissionSet};
pub use resources::ResourceType;
pub use roles::Role;
