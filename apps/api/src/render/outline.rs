//! Role document outline: the fixed section order shared by every renderer.
//!
//! 1. Title (role name)
//! 2. "Description" heading + description paragraph
//! 3. "Recommended Majors & Courses" heading
//! 4. Per major, in order: sub-heading, then one "- " line per course

use crate::catalog::RoleDetails;
use crate::layout::{Block, BlockStyle};
use crate::render::FormatError;

pub const DESCRIPTION_HEADING: &str = "Description";
pub const MAJORS_HEADING: &str = "Recommended Majors & Courses";
pub const BULLET: &str = "- ";

const SECTION_GAP_PT: f32 = 12.0;
const MAJOR_GAP_PT: f32 = 6.0;

/// Validates the input and lays out the section sequence for one role.
pub fn build_outline(role_name: &str, details: &RoleDetails) -> Result<Vec<Block>, FormatError> {
    let role_name = role_name.trim();
    if role_name.is_empty() {
        return Err(FormatError::InvalidInput(
            "role name cannot be empty".to_string(),
        ));
    }
    if details.description.trim().is_empty() {
        return Err(FormatError::InvalidInput(format!(
            "role '{role_name}' has an empty description"
        )));
    }

    let course_count: usize = details.majors.iter().map(|m| m.courses.len()).sum();
    let mut blocks = Vec::with_capacity(4 + details.majors.len() + course_count);

    blocks.push(Block::new(BlockStyle::Title, role_name).with_space_after(SECTION_GAP_PT));
    blocks.push(Block::new(BlockStyle::Heading, DESCRIPTION_HEADING));
    blocks.push(
        Block::new(BlockStyle::Body, details.description.trim()).with_space_after(SECTION_GAP_PT),
    );
    blocks.push(Block::new(BlockStyle::Heading, MAJORS_HEADING));

    for major in &details.majors {
        blocks.push(Block::new(BlockStyle::SubHeading, major.name.as_str()));
        for course in &major.courses {
            blocks.push(Block::new(BlockStyle::ListItem, format!("{BULLET}{course}")));
        }
        if let Some(last) = blocks.last_mut() {
            last.space_after_pt = MAJOR_GAP_PT;
        }
    }

    Ok(blocks)
}
