//! Dependent three-level selection (industry → sub-industry → role).
//!
//! Changing an ancestor clears everything below it. A selection that arrives
//! from outside (query string, stale client state) is normalized against the
//! catalog so that invalid downstream choices are dropped rather than reported.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, RoleDetails};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub role: Option<String>,
}

/// Everything a client needs to draw the three choice lists and the detail pane.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    /// The selection after normalization.
    pub selection: Selection,
    pub industries: Vec<String>,
    /// Empty until a valid industry is chosen.
    pub sub_industries: Vec<String>,
    /// Empty until a valid sub-industry is chosen.
    pub roles: Vec<String>,
    /// Present only when all three levels resolve.
    pub details: Option<RoleDetails>,
}

impl Selection {
    /// Applies the three choices in order, as a user would.
    /// Blank values (e.g. a "-- Select --" placeholder) count as unset.
    pub fn from_choices(
        industry: Option<&str>,
        sub_industry: Option<&str>,
        role: Option<&str>,
    ) -> Self {
        let mut selection = Self::default();
        if let Some(industry) = industry {
            selection.select_industry(industry);
        }
        if let Some(sub_industry) = sub_industry {
            selection.select_sub_industry(sub_industry);
        }
        if let Some(role) = role {
            selection.select_role(role);
        }
        selection
    }

    pub fn select_industry(&mut self, industry: &str) {
        let next = non_blank(industry);
        if self.industry != next {
            self.industry = next;
            self.sub_industry = None;
            self.role = None;
        }
    }

    pub fn select_sub_industry(&mut self, sub_industry: &str) {
        let next = non_blank(sub_industry);
        if self.sub_industry != next {
            self.sub_industry = next;
            self.role = None;
        }
    }

    pub fn select_role(&mut self, role: &str) {
        self.role = non_blank(role);
    }

    /// Keeps the longest valid prefix of the selection.
    pub fn normalized(&self, catalog: &Catalog) -> Selection {
        let mut out = Selection::default();

        let Some(industry) = self.industry.as_deref() else {
            return out;
        };
        let Ok(sub_industries) = catalog.list_sub_industries(industry) else {
            return out;
        };
        out.industry = Some(industry.to_string());

        let Some(sub_industry) = self
            .sub_industry
            .as_deref()
            .filter(|s| sub_industries.contains(s))
        else {
            return out;
        };
        out.sub_industry = Some(sub_industry.to_string());

        if let Some(role) = self.role.as_deref() {
            if catalog.get_role_details(industry, sub_industry, role).is_ok() {
                out.role = Some(role.to_string());
            }
        }
        out
    }

    pub fn view(&self, catalog: &Catalog) -> SelectionView {
        let selection = self.normalized(catalog);
        let industry = selection.industry.as_deref();
        let sub_industry = selection.sub_industry.as_deref();
        let role = selection.role.as_deref();

        let sub_industries = industry
            .and_then(|i| catalog.list_sub_industries(i).ok())
            .unwrap_or_default();
        let roles = match (industry, sub_industry) {
            (Some(i), Some(s)) => catalog.list_roles(i, s).unwrap_or_default(),
            _ => Vec::new(),
        };
        let details = match (industry, sub_industry, role) {
            (Some(i), Some(s), Some(r)) => catalog.get_role_details(i, s, r).ok().cloned(),
            _ => None,
        };

        SelectionView {
            industries: to_owned(catalog.list_industries()),
            sub_industries: to_owned(sub_industries),
            roles: to_owned(roles),
            details,
            selection,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn to_owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
