//! Career catalog: the read-only Industry → Sub-Industry → Role tree.
//!
//! The tree is built once at startup by [`loader`] and shared behind an `Arc`.
//! Every level keeps its definition order, which is also the display order.

pub mod handlers;
pub mod loader;
pub mod selection;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use loader::load_catalog;
pub use selection::{Selection, SelectionView};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid catalog data: {0}")]
    Invalid(String),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Tree types
// ────────────────────────────────────────────────────────────────────────────

/// Root of the tree. Owns every industry; nothing is shared outside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    industries: Vec<Industry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
    pub sub_industries: Vec<SubIndustry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubIndustry {
    pub name: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(flatten)]
    pub details: RoleDetails,
}

/// Description plus recommended majors for a single role.
///
/// `majors` is ordered: the first entry is shown (and printed) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDetails {
    pub description: String,
    pub majors: Vec<Major>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Major {
    pub name: String,
    /// Recommended courses in display order. Never empty in a loaded catalog.
    pub courses: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Narrowing queries
// ────────────────────────────────────────────────────────────────────────────

impl Catalog {
    /// Industry names in definition order.
    pub fn list_industries(&self) -> Vec<&str> {
        self.industries.iter().map(|i| i.name.as_str()).collect()
    }

    /// Sub-industry names under `industry`, in definition order.
    pub fn list_sub_industries(&self, industry: &str) -> Result<Vec<&str>, CatalogError> {
        Ok(self
            .industry(industry)?
            .sub_industries
            .iter()
            .map(|s| s.name.as_str())
            .collect())
    }

    /// Role names under `industry` / `sub_industry`, in definition order.
    pub fn list_roles(&self, industry: &str, sub_industry: &str) -> Result<Vec<&str>, CatalogError> {
        Ok(self
            .sub_industry(industry, sub_industry)?
            .roles
            .iter()
            .map(|r| r.name.as_str())
            .collect())
    }

    /// Resolves the full chain. A role that exists under a different
    /// sub-industry is still `NotFound` here.
    pub fn get_role_details(
        &self,
        industry: &str,
        sub_industry: &str,
        role: &str,
    ) -> Result<&RoleDetails, CatalogError> {
        self.sub_industry(industry, sub_industry)?
            .roles
            .iter()
            .find(|r| r.name == role)
            .map(|r| &r.details)
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Role '{role}' not found under '{industry}' / '{sub_industry}'"
                ))
            })
    }

    /// Total number of roles across the tree.
    pub fn role_count(&self) -> usize {
        self.industries
            .iter()
            .flat_map(|i| &i.sub_industries)
            .map(|s| s.roles.len())
            .sum()
    }

    fn industry(&self, industry: &str) -> Result<&Industry, CatalogError> {
        self.industries
            .iter()
            .find(|i| i.name == industry)
            .ok_or_else(|| CatalogError::NotFound(format!("Industry '{industry}' not found")))
    }

    fn sub_industry(&self, industry: &str, sub_industry: &str) -> Result<&SubIndustry, CatalogError> {
        self.industry(industry)?
            .sub_industries
            .iter()
            .find(|s| s.name == sub_industry)
            .ok_or_else(|| {
                CatalogError::NotFound(format!(
                    "Sub-industry '{sub_industry}' not found under '{industry}'"
                ))
            })
    }
}
