//! Catalog loading and structural validation.
//!
//! The default dataset is embedded at compile time. `CATALOG_PATH` may point at
//! a replacement JSON file with the same shape; it is read once at startup.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError, RoleDetails};

/// Built-in dataset (Banking & Finance).
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Loads the catalog from `path`, or the embedded dataset when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            parse_catalog(&raw)
        }
        None => {
            info!("Loading embedded catalog");
            embedded_catalog()
        }
    }
}

pub fn embedded_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Decodes a JSON catalog and checks the tree invariants before handing it out.
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    validate(&catalog)?;
    debug!(
        industries = catalog.industries.len(),
        roles = catalog.role_count(),
        "Catalog validated"
    );
    Ok(catalog)
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.industries.is_empty() {
        return Err(CatalogError::Invalid("catalog has no industries".to_string()));
    }
    require_unique(
        catalog.industries.iter().map(|i| i.name.as_str()),
        "industry",
        "catalog",
    )?;

    for industry in &catalog.industries {
        require_non_empty(industry.sub_industries.len(), "sub-industry", &industry.name)?;
        require_unique(
            industry.sub_industries.iter().map(|s| s.name.as_str()),
            "sub-industry",
            &industry.name,
        )?;

        for sub in &industry.sub_industries {
            let scope = format!("{} / {}", industry.name, sub.name);
            require_non_empty(sub.roles.len(), "role", &scope)?;
            require_unique(sub.roles.iter().map(|r| r.name.as_str()), "role", &scope)?;

            for role in &sub.roles {
                validate_details(&role.details, &format!("{scope} / {}", role.name))?;
            }
        }
    }
    Ok(())
}

fn validate_details(details: &RoleDetails, scope: &str) -> Result<(), CatalogError> {
    if details.description.trim().is_empty() {
        return Err(CatalogError::Invalid(format!("{scope}: description is empty")));
    }
    require_unique(details.majors.iter().map(|m| m.name.as_str()), "major", scope)?;

    for major in &details.majors {
        if major.courses.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "{scope}: major '{}' has no courses",
                major.name
            )));
        }
        if major.courses.iter().any(|c| c.trim().is_empty()) {
            return Err(CatalogError::Invalid(format!(
                "{scope}: major '{}' has a blank course name",
                major.name
            )));
        }
    }
    Ok(())
}

/// Every industry and sub-industry must lead to at least one role.
fn require_non_empty(len: usize, kind: &str, scope: &str) -> Result<(), CatalogError> {
    if len == 0 {
        return Err(CatalogError::Invalid(format!("{scope}: no {kind} entries")));
    }
    Ok(())
}

/// Rejects blank names and duplicate names within one parent.
fn require_unique<'a>(
    names: impl Iterator<Item = &'a str>,
    kind: &str,
    scope: &str,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(CatalogError::Invalid(format!("{scope}: blank {kind} name")));
        }
        if !seen.insert(name) {
            return Err(CatalogError::Invalid(format!(
                "{scope}: duplicate {kind} '{name}'"
            )));
        }
    }
    Ok(())
}
