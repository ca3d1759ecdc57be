// Document layout: styled blocks in, positioned lines on fixed-size pages out.
// Pure computation; callers on the async path run it inside spawn_blocking.

pub mod font_metrics;
pub mod paginator;

pub use font_metrics::{default_page_config, FontFace, PageConfig, PageSize};
pub use paginator::{paginate, LaidOutDocument, LaidOutPage, PlacedLine};

/// Visual role of a block. Determines face, size, spacing and indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Title,
    Heading,
    SubHeading,
    Body,
    ListItem,
}

impl BlockStyle {
    pub fn face(self) -> FontFace {
        match self {
            BlockStyle::Title | BlockStyle::Heading | BlockStyle::SubHeading => FontFace::Bold,
            BlockStyle::Body | BlockStyle::ListItem => FontFace::Regular,
        }
    }

    pub fn size_pt(self) -> f32 {
        match self {
            BlockStyle::Title => 18.0,
            BlockStyle::Heading => 14.0,
            BlockStyle::SubHeading => 12.0,
            BlockStyle::Body | BlockStyle::ListItem => 10.0,
        }
    }

    /// Baseline-to-baseline distance.
    pub fn leading_pt(self) -> f32 {
        self.size_pt() * 1.2
    }

    pub fn indent_pt(self) -> f32 {
        match self {
            BlockStyle::ListItem => 12.0,
            _ => 0.0,
        }
    }

    /// Headings never end a page: they move to the next page together with
    /// the first line that follows them.
    pub fn keeps_with_next(self) -> bool {
        matches!(
            self,
            BlockStyle::Title | BlockStyle::Heading | BlockStyle::SubHeading
        )
    }
}

/// One paragraph-level unit of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub style: BlockStyle,
    pub text: String,
    /// Vertical gap inserted after the block.
    pub space_after_pt: f32,
}

impl Block {
    pub fn new(style: BlockStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            space_after_pt: 0.0,
        }
    }

    pub fn with_space_after(mut self, space_after_pt: f32) -> Self {
        self.space_after_pt = space_after_pt;
        self
    }
}
