//! PDF backend for role documents, written with `pdf-writer`.
//!
//! Output is byte-for-byte deterministic: no creation date, no document ID, and
//! objects are numbered in a fixed order. Text uses the non-embedded base-14
//! Helvetica faces with WinAnsi encoding, so the file stays small and
//! self-contained.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use crate::catalog::RoleDetails;
use crate::layout::{
    default_page_config, paginate, FontFace, LaidOutDocument, LaidOutPage, PageConfig, PageSize,
};
use crate::render::outline::build_outline;
use crate::render::{DocumentRenderer, FormatError};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

const PRODUCER: &str = "Career Pathway Navigator";

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

// Fixed object numbers; pages and their content streams follow in pairs.
const CATALOG_REF: i32 = 1;
const PAGE_TREE_REF: i32 = 2;
const INFO_REF: i32 = 3;
const REGULAR_FONT_REF: i32 = 4;
const BOLD_FONT_REF: i32 = 5;
const FIRST_PAGE_REF: i32 = 6;

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    page: PageConfig,
}

impl PdfRenderer {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Lays out the role without serializing it. Useful for inspecting page breaks.
    pub fn layout(&self, role_name: &str, details: &RoleDetails) -> Result<LaidOutDocument, FormatError> {
        let blocks = build_outline(role_name, details)?;
        Ok(paginate(&blocks, &self.page))
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(default_page_config(PageSize::Letter))
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, role_name: &str, details: &RoleDetails) -> Result<Vec<u8>, FormatError> {
        let document = self.layout(role_name, details)?;
        let bytes = write_pdf(&document, role_name.trim());
        debug!(
            role = role_name,
            pages = document.page_count(),
            bytes = bytes.len(),
            "Rendered role PDF"
        );
        Ok(bytes)
    }

    fn media_type(&self) -> &'static str {
        PDF_MEDIA_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}

/// Renders a role to a US Letter PDF.
pub fn render_role_document(role_name: &str, details: &RoleDetails) -> Result<Vec<u8>, FormatError> {
    PdfRenderer::default().render(role_name, details)
}

// ────────────────────────────────────────────────────────────────────────────
// Serialization
// ────────────────────────────────────────────────────────────────────────────

fn write_pdf(document: &LaidOutDocument, title: &str) -> Vec<u8> {
    let catalog_id = Ref::new(CATALOG_REF);
    let page_tree_id = Ref::new(PAGE_TREE_REF);
    let regular_font_id = Ref::new(REGULAR_FONT_REF);
    let bold_font_id = Ref::new(BOLD_FONT_REF);

    let page_ids: Vec<Ref> = (0..document.pages.len())
        .map(|i| Ref::new(FIRST_PAGE_REF + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.document_info(Ref::new(INFO_REF))
        .title(TextStr(title))
        .producer(TextStr(PRODUCER));

    pdf.type1_font(regular_font_id)
        .base_font(Name(FontFace::Regular.base_font().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_font_id)
        .base_font(Name(FontFace::Bold.base_font().as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let media_box = Rect::new(0.0, 0.0, document.page.width_pt, document.page.height_pt);

    for (index, (laid_out, page_id)) in document.pages.iter().zip(&page_ids).enumerate() {
        let content_id = Ref::new(FIRST_PAGE_REF + 2 * index as i32 + 1);

        let mut page = pdf.page(*page_id);
        page.media_box(media_box);
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR_FONT, regular_font_id);
            fonts.pair(BOLD_FONT, bold_font_id);
        }
        page.finish();

        pdf.stream(content_id, &page_content(laid_out));
    }

    pdf.finish()
}

fn page_content(page: &LaidOutPage) -> Vec<u8> {
    let mut content = Content::new();
    for line in &page.lines {
        let font = match line.face {
            FontFace::Regular => REGULAR_FONT,
            FontFace::Bold => BOLD_FONT,
        };
        content.begin_text();
        content.set_font(font, line.size_pt);
        content.next_line(line.x_pt, line.baseline_pt);
        content.show(Str(&encode_win_ansi(&line.text)));
        content.end_text();
    }
    content.finish()
}

/// Maps text onto WinAnsiEncoding. Characters outside the code page become '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::Major;

    fn junior_trader() -> RoleDetails {
        sample_catalog()
            .get_role_details("Banking & Finance", "Markets", "Junior Trader")
            .unwrap()
            .clone()
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = render_role_document("Junior Trader", &junior_trader()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "%%EOF"));
    }

    #[test]
    fn test_content_streams_carry_role_text() {
        let bytes = render_role_document("Junior Trader", &junior_trader()).unwrap();
        assert!(contains(&bytes, "(Junior Trader)"));
        assert!(contains(&bytes, "(Mathematics)"));
        assert!(contains(&bytes, "(- Stochastic Processes)"));
        assert!(contains(&bytes, "/Helvetica-Bold"));
    }

    #[test]
    fn test_extracted_text_contains_role_majors_and_courses() {
        let bytes = render_role_document("Junior Trader", &junior_trader()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Junior Trader"), "{text}");
        assert!(text.contains("Mathematics"), "{text}");
        assert!(text.contains("Stochastic Processes"), "{text}");
        assert!(text.contains("Recommended Majors & Courses"), "{text}");
    }

    #[test]
    fn test_render_is_byte_for_byte_deterministic() {
        let details = junior_trader();
        let first = render_role_document("Junior Trader", &details).unwrap();
        let second = render_role_document("Junior Trader", &details).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_majors_and_courses_keep_insertion_order() {
        let details = junior_trader();
        let document = PdfRenderer::default().layout("Junior Trader", &details).unwrap();
        let texts: Vec<&str> = document.texts().collect();

        let mut expected = Vec::new();
        for major in &details.majors {
            expected.push(major.name.clone());
            expected.extend(major.courses.iter().map(|c| format!("- {c}")));
        }
        let start = texts.iter().position(|t| *t == "Mathematics").unwrap();
        assert_eq!(&texts[start..], expected.iter().map(String::as_str).collect::<Vec<_>>());

        // The serialized streams follow the same order.
        let bytes = render_role_document("Junior Trader", &details).unwrap();
        let offsets: Vec<usize> = ["(Mathematics)", "(Statistics)", "(Computer Science)", "(Physics)"]
            .iter()
            .map(|needle| {
                bytes
                    .windows(needle.len())
                    .position(|w| w == needle.as_bytes())
                    .unwrap()
            })
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{offsets:?}");
    }

    #[test]
    fn test_sample_role_fits_on_one_page() {
        let document = PdfRenderer::default()
            .layout("Junior Trader", &junior_trader())
            .unwrap();
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn test_long_course_list_spans_pages() {
        let details = RoleDetails {
            description: "A role with an unusually long reading list.".to_string(),
            majors: (0..6)
                .map(|m| Major {
                    name: format!("Major {m}"),
                    courses: (0..20).map(|c| format!("Course {m}.{c}")).collect(),
                })
                .collect(),
        };
        let renderer = PdfRenderer::default();
        let document = renderer.layout("Reader", &details).unwrap();
        assert!(document.page_count() > 1);

        let bytes = renderer.render("Reader", &details).unwrap();
        let count_entry = format!("/Count {}", document.page_count());
        assert!(contains(&bytes, &count_entry));
        assert!(contains(&bytes, "(- Course 5.19)"));
    }

    #[test]
    fn test_empty_majors_still_renders() {
        let details = RoleDetails {
            description: "Generalist role.".to_string(),
            majors: vec![],
        };
        let bytes = render_role_document("Generalist", &details).unwrap();
        assert!(contains(&bytes, "(Recommended Majors & Courses)"));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let details = junior_trader();
        assert!(matches!(
            render_role_document("", &details),
            Err(FormatError::InvalidInput(_))
        ));
        let blank = RoleDetails {
            description: String::new(),
            majors: vec![],
        };
        assert!(matches!(
            render_role_document("Junior Trader", &blank),
            Err(FormatError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_a4_renderer_uses_a4_geometry() {
        let renderer = PdfRenderer::new(default_page_config(PageSize::A4));
        let document = renderer.layout("Junior Trader", &junior_trader()).unwrap();
        assert_eq!(document.page.size, PageSize::A4);
        let bytes = renderer.render("Junior Trader", &junior_trader()).unwrap();
        assert_ne!(bytes, render_role_document("Junior Trader", &junior_trader()).unwrap());
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("M&A"), b"M&A".to_vec());
        assert_eq!(encode_win_ansi("companies’"), b"companies\x92".to_vec());
        assert_eq!(encode_win_ansi("é"), vec![0xe9]);
        assert_eq!(encode_win_ansi("漢"), b"?".to_vec());
    }
}
