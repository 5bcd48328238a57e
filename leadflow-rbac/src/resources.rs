//! # Resource Types
//!
//! Defines the resource types that permissions range over. A permission
//! always targets a resource *type*, never a specific resource instance.

use serde::{Deserialize, Serialize};

/// Resource types that can have permissions assigned.
///
/// The set is closed: adding a resource type means extending the permission
/// matrix and redeploying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Agency tenants (top-level customer accounts).
    Agency,
    /// User accounts within an agency.
    User,
    /// Outreach campaigns.
    Campaign,
    /// Researched leads attached to campaigns.
    Lead,
    /// Research IQ analytics (research quality scoring).
    ResearchIq,
    /// Research and delivery costs.
    Cost,
    /// Generated reports.
    Report,
    /// Agency-level settings.
    Settings,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Agency => "agency",
            ResourceType::User => "user",
            ResourceType::Campaign => "campaign",
            ResourceType::Lead => "lead",
            ResourceType::ResearchIq => "research_iq",
            ResourceType::Cost => "cost",
            ResourceType::Report => "report",
            ResourceType::Settings => "settings",
        }
    }

    /// Get a human-readable display name for the resource type.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Agency => "Agency",
            ResourceType::User => "User",
            ResourceType::Campaign => "Campaign",
            ResourceType::Lead => "Lead",
            ResourceType::ResearchIq => "Research IQ",
            ResourceType::Cost => "Cost",
            ResourceType::Report => "Report",
            ResourceType::Settings => "Settings",
        }
    }

    /// Parse a resource type from its string representation.
    ///
    /// Parsing is case-insensitive and accepts common plural forms.
    ///
    /// # Example
    ///
    /// ```
    /// use leadflow_rbac::resources::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("campaign"), Some(ResourceType::Campaign));
    /// assert_eq!(ResourceType::parse("campaigns"), Some(ResourceType::Campaign));
    /// assert_eq!(ResourceType::parse("research_iq"), Some(ResourceType::ResearchIq));
    /// assert_eq!(ResourceType::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "agency" | "agencies" => Some(ResourceType::Agency),
            "user" | "users" => Some(ResourceType::User),
            "campaign" | "campaigns" => Some(ResourceType::Campaign),
            "lead" | "leads" => Some(ResourceType::Lead),
            "research_iq" | "researchiq" => Some(ResourceType::ResearchIq),
            "cost" | "costs" => Some(ResourceType::Cost),
            "report" | "reports" => Some(ResourceType::Report),
            "settings" | "setting" => Some(ResourceType::Settings),
            _ => None,
        }
    }

    /// Get all resource types.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceType::Agency,
            ResourceType::User,
            ResourceType::Campaign,
            ResourceType::Lead,
            ResourceType::ResearchIq,
            ResourceType::Cost,
            ResourceType::Report,
            ResourceType::Settings,
        ]
    }
}
