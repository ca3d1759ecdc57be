// Role document rendering.
// `outline` turns a role into styled blocks; `pdf` and `text` turn blocks into
// the downloadable document and the on-screen form. Neither touches the catalog:
// callers resolve the role first.

pub mod handlers;
pub mod outline;
pub mod pdf;
pub mod text;

use thiserror::Error;

use crate::catalog::RoleDetails;

pub use pdf::{render_role_document, PdfRenderer};
pub use text::render_role_text;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Pluggable document backend. Default: `PdfRenderer`.
pub trait DocumentRenderer: Send + Sync {
    /// Renders one resolved role into a complete, self-contained document.
    fn render(&self, role_name: &str, details: &RoleDetails) -> Result<Vec<u8>, FormatError>;

    /// MIME type sent with the download.
    fn media_type(&self) -> &'static str;

    /// File extension without the leading dot.
    fn file_extension(&self) -> &'static str;
}

/// Download filename for a role: runs of non-alphanumeric characters collapse
/// into one underscore. "Wholesale / Corporate Banking Analyst" becomes
/// "Wholesale_Corporate_Banking_Analyst.pdf".
pub fn document_filename(role_name: &str, extension: &str) -> String {
    let mut stem = String::with_capacity(role_name.len());
    let mut pending_separator = false;

    for c in role_name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push('_');
            }
            stem.push(c);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if stem.is_empty() {
        stem.push_str("document");
    }
    format!("{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_replaces_spaces() {
        assert_eq!(document_filename("Junior Trader", "pdf"), "Junior_Trader.pdf");
    }

    #[test]
    fn test_filename_collapses_separator_runs() {
        assert_eq!(
            document_filename("Wholesale / Corporate Banking Analyst", "pdf"),
            "Wholesale_Corporate_Banking_Analyst.pdf"
        );
    }

    #[test]
    fn test_filename_trims_leading_and_trailing_separators() {
        assert_eq!(document_filename("  M&A Analyst! ", "pdf"), "M_A_Analyst.pdf");
    }

    #[test]
    fn test_filename_without_alphanumerics_falls_back() {
        assert_eq!(document_filename("/// ", "pdf"), "document.pdf");
    }
}
