//! Markdown rendering of a role, for on-screen display.

use crate::catalog::RoleDetails;
use crate::layout::BlockStyle;
use crate::render::outline::build_outline;
use crate::render::FormatError;

pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown; charset=utf-8";

/// Renders the same outline as the PDF, as Markdown: the title as `##`, section
/// headings as `###`, major names in bold, courses as list items.
pub fn render_role_text(role_name: &str, details: &RoleDetails) -> Result<String, FormatError> {
    let blocks = build_outline(role_name, details)?;
    let mut out = String::new();

    for (index, block) in blocks.iter().enumerate() {
        let line = match block.style {
            BlockStyle::Title => format!("## {}", block.text),
            BlockStyle::Heading => format!("### {}", block.text),
            BlockStyle::SubHeading => format!("**{}**", block.text),
            BlockStyle::Body | BlockStyle::ListItem => block.text.clone(),
        };
        out.push_str(&line);
        out.push('\n');

        // Consecutive list items stay in one list; everything else is its own paragraph.
        let next_is_item = blocks
            .get(index + 1)
            .is_some_and(|next| next.style == BlockStyle::ListItem);
        if !(block.style == BlockStyle::ListItem && next_is_item) {
            out.push('\n');
        }
    }

    Ok(out.trim_end().to_string() + "\n")
}
