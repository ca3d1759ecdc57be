//! Pagination: flows styled blocks onto fixed-size pages.
//!
//! Each block is word-wrapped with the static metric tables, then its lines are
//! placed top-down. A line that would cross the bottom margin starts a new
//! page. A heading, or a run of consecutive headings, is kept together with the first
//! line that follows it.

use crate::layout::font_metrics::{get_metrics, FontFace, PageConfig};
use crate::layout::Block;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A single line of text at an absolute position.
/// Coordinates are PDF user space: origin bottom-left, y grows upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub face: FontFace,
    pub size_pt: f32,
    pub x_pt: f32,
    pub baseline_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub page: PageConfig,
    /// Never empty: a document without content still has one blank page.
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Line texts in reading order across all pages.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| &p.lines)
            .map(|l| l.text.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core function
// ────────────────────────────────────────────────────────────────────────────

pub fn paginate(blocks: &[Block], config: &PageConfig) -> LaidOutDocument {
    let top = config.height_pt - config.margin_pt;
    let bottom = config.margin_pt;

    let mut pages = Vec::new();
    let mut page = LaidOutPage::default();
    // Top edge of the next line box.
    let mut cursor = top;

    for (index, block) in blocks.iter().enumerate() {
        let style = block.style;
        let size = style.size_pt();
        let leading = style.leading_pt();
        let x_pt = config.margin_pt + style.indent_pt();

        let lines = wrap_block(block, config);
        if lines.is_empty() {
            cursor -= block.space_after_pt;
            continue;
        }

        let needed = keep_together_pt(blocks, index, config);
        if cursor - needed < bottom && !page.lines.is_empty() {
            pages.push(std::mem::take(&mut page));
            cursor = top;
        }

        for text in lines {
            if cursor - leading < bottom && !page.lines.is_empty() {
                pages.push(std::mem::take(&mut page));
                cursor = top;
            }
            cursor -= leading;
            page.lines.push(PlacedLine {
                text,
                face: style.face(),
                size_pt: size,
                x_pt,
                baseline_pt: cursor + (leading - size),
            });
        }
        cursor -= block.space_after_pt;
    }

    if !page.lines.is_empty() || pages.is_empty() {
        pages.push(page);
    }

    LaidOutDocument {
        page: config.clone(),
        pages,
    }
}

fn wrap_block(block: &Block, config: &PageConfig) -> Vec<String> {
    let style = block.style;
    let width_em = (config.text_width_pt() - style.indent_pt()) / style.size_pt();
    get_metrics(style.face()).wrap_lines(&block.text, width_em)
}

/// Vertical space that must remain before `blocks[index]` is placed.
///
/// A plain block needs its first line. A heading needs every line of itself and
/// of any headings directly after it, plus the first line of the block that
/// finally follows the run.
fn keep_together_pt(blocks: &[Block], index: usize, config: &PageConfig) -> f32 {
    let mut needed = 0.0;
    for block in &blocks[index..] {
        let style = block.style;
        if !style.keeps_with_next() {
            return needed + style.leading_pt();
        }
        let line_count = wrap_block(block, config).len();
        needed += line_count as f32 * style.leading_pt() + block.space_after_pt;
    }
    needed
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, PageSize};
    use crate::layout::BlockStyle;

    fn letter() -> PageConfig {
        default_page_config(PageSize::Letter)
    }

    fn many_items(count: usize) -> Vec<Block> {
        let mut blocks = vec![Block::new(BlockStyle::Title, "Long Document").with_space_after(12.0)];
        blocks.extend((0..count).map(|i| Block::new(BlockStyle::ListItem, format!("- Course {i}"))));
        blocks
    }

    #[test]
    fn test_no_blocks_yields_one_blank_page() {
        let doc = paginate(&[], &letter());
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].lines.is_empty());
    }

    #[test]
    fn test_short_document_fits_one_page_in_order() {
        let blocks = vec![
            Block::new(BlockStyle::Title, "Junior Trader"),
            Block::new(BlockStyle::Heading, "Description"),
            Block::new(BlockStyle::Body, "Executes trades."),
        ];
        let doc = paginate(&blocks, &letter());
        assert_eq!(doc.page_count(), 1);
        let texts: Vec<&str> = doc.texts().collect();
        assert_eq!(texts, vec!["Junior Trader", "Description", "Executes trades."]);
    }

    #[test]
    fn test_lines_move_down_the_page() {
        let blocks = vec![
            Block::new(BlockStyle::Title, "A"),
            Block::new(BlockStyle::Body, "B"),
            Block::new(BlockStyle::Body, "C"),
        ];
        let doc = paginate(&blocks, &letter());
        let baselines: Vec<f32> = doc.pages[0].lines.iter().map(|l| l.baseline_pt).collect();
        assert!(baselines.windows(2).all(|w| w[0] > w[1]), "{baselines:?}");
    }

    #[test]
    fn test_list_items_are_indented_and_regular() {
        let blocks = vec![Block::new(BlockStyle::ListItem, "- Algorithms")];
        let config = letter();
        let doc = paginate(&blocks, &config);
        let line = &doc.pages[0].lines[0];
        assert_eq!(line.face, FontFace::Regular);
        assert!(line.x_pt > config.margin_pt);
    }

    #[test]
    fn test_overflow_flows_onto_new_pages_within_margins() {
        let config = letter();
        let doc = paginate(&many_items(200), &config);
        assert!(doc.page_count() >= 3, "got {} pages", doc.page_count());
        for page in &doc.pages {
            assert!(!page.lines.is_empty());
            for line in &page.lines {
                assert!(line.baseline_pt >= config.margin_pt);
                assert!(line.baseline_pt <= config.height_pt - config.margin_pt);
            }
        }
        assert_eq!(doc.texts().count(), 201);
    }

    #[test]
    fn test_heading_never_ends_a_page() {
        let mut blocks = many_items(50);
        blocks.push(Block::new(BlockStyle::SubHeading, "Physics"));
        blocks.push(Block::new(BlockStyle::ListItem, "- Optics"));
        blocks.extend(many_items(60).into_iter().skip(1));

        let doc = paginate(&blocks, &letter());
        for page in &doc.pages {
            let last = page.lines.last().unwrap();
            assert_ne!(last.face, FontFace::Bold, "page ends with heading '{}'", last.text);
        }
    }

    #[test]
    fn test_consecutive_headings_move_together_with_first_item() {
        // 51 body lines leave 36pt on a Letter page: room for both headings,
        // but not for the list item that must follow them.
        let mut blocks: Vec<Block> = (0..51)
            .map(|i| Block::new(BlockStyle::Body, format!("Line {i}")))
            .collect();
        blocks.push(Block::new(BlockStyle::Heading, "Recommended Majors & Courses"));
        blocks.push(Block::new(BlockStyle::SubHeading, "Mathematics"));
        blocks.push(Block::new(BlockStyle::ListItem, "- Probability Theory"));

        let doc = paginate(&blocks, &letter());
        assert_eq!(doc.page_count(), 2);
        for page in &doc.pages {
            let last = page.lines.last().unwrap();
            assert_ne!(last.face, FontFace::Bold, "page ends with heading '{}'", last.text);
        }
        let second: Vec<&str> = doc.pages[1].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            second,
            vec!["Recommended Majors & Courses", "Mathematics", "- Probability Theory"]
        );
    }

    #[test]
    fn test_overlong_word_stays_inside_right_margin() {
        let config = letter();
        let word = "Pneumonoultramicroscopicsilicovolcanoconiosis".repeat(4);
        let blocks = vec![Block::new(BlockStyle::Body, word.clone())];
        let doc = paginate(&blocks, &config);

        let lines = &doc.pages[0].lines;
        assert!(lines.len() > 1);
        let right_edge = config.width_pt - config.margin_pt;
        for line in lines {
            let width = get_metrics(line.face).measure_str(&line.text) * line.size_pt;
            assert!(line.x_pt + width <= right_edge + 1e-3, "'{}' overflows", line.text);
        }
        let rejoined: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn test_a4_holds_more_lines_than_letter() {
        let letter_doc = paginate(&many_items(300), &letter());
        let a4_doc = paginate(&many_items(300), &default_page_config(PageSize::A4));
        assert!(a4_doc.pages[0].lines.len() > letter_doc.pages[0].lines.len());
    }

    #[test]
    fn test_pagination_is_deterministic() {
        let blocks = many_items(120);
        let a = paginate(&blocks, &letter());
        let b = paginate(&blocks, &letter());
        assert_eq!(a.pages, b.pages);
    }
}
