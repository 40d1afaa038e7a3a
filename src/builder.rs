//! Plain text to right-to-left `.docx`.
//!
//! [`DocumentBuilder`] applies page setup and the default style once, then
//! turns every input line into one right-aligned, right-to-left paragraph
//! holding one run. Bullet and numbered lines get a hanging indent.
//!
//! ```
//! use rtlscribe::builder::DocumentBuilder;
//! use rtlscribe::ooxml::docx::DocxSummary;
//!
//! let builder = DocumentBuilder::default();
//! let bytes = builder.build("سلام\n• مورد")?;
//!
//! let summary = DocxSummary::from_bytes(&bytes)?;
//! assert_eq!(summary.paragraphs.len(), 2);
//! assert_eq!(summary.paragraphs[1].indent_first_line, Some(-283));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::artifact::DocxArtifact;
use crate::classify::{LineClassifier, LineKind, PrefixClassifier};
use crate::common::{Length, Result};
use crate::ooxml::docx::writer::{
    BorderSpec, LineSpacing, MutableDocument, MutableParagraph, PageBorders, ParagraphAlignment,
    SectionProperties,
};
use crate::policy::{FormatPolicy, PageSize};

/// Characters that end a line besides `\n` and `\r`.
///
/// Vertical tab and form feed are not legal XML characters.
const EXTRA_LINE_BREAKS: [char; 8] = [
    '\u{0B}', '\u{0C}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines.
///
/// `\n`, `\r\n` and lone `\r` end a line, as do vertical tab, form feed,
/// the information separators U+001C to U+001E, NEL, and the Unicode line
/// and paragraph separators. A single trailing line break does not start
/// another line, but text without any content still yields one empty line
/// so the document body is never empty.
///
/// ```
/// use rtlscribe::builder::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
/// assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
/// assert_eq!(split_lines("a\u{c}b\u{b}c"), vec!["a", "b", "c"]);
/// assert_eq!(split_lines(""), vec![""]);
/// ```
pub fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = raw.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some(&(j, '\n')) => {
                    chars.next();
                    j + 1
                },
                _ => i + 1,
            },
            '\n' => i + 1,
            c if EXTRA_LINE_BREAKS.contains(&c) => i + c.len_utf8(),
            _ => continue,
        };
        lines.push(&raw[start..i]);
        start = end;
    }
    if start < raw.len() || lines.is_empty() {
        lines.push(&raw[start..]);
    }
    lines
}

/// Builds `.docx` documents from plain text under one [`FormatPolicy`].
///
/// The builder holds no per-build state; one instance can serve any number
/// of builds.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<C = PrefixClassifier> {
    policy: FormatPolicy,
    classifier: C,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            policy: FormatPolicy::default(),
            classifier: PrefixClassifier,
        }
    }
}

impl DocumentBuilder {
    /// Create a builder with the prefix classifier.
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the policy is invalid.
    pub fn new(policy: FormatPolicy) -> Result<Self> {
        Self::with_classifier(policy, PrefixClassifier)
    }
}

impl<C: LineClassifier> DocumentBuilder<C> {
    pub fn with_classifier(policy: FormatPolicy, classifier: C) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy, classifier })
    }

    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    /// Build the document and serialize it to `.docx` bytes.
    pub fn build(&self, raw: &str) -> Result<Vec<u8>> {
        let doc = self.build_document(raw)?;
        let bytes = doc.to_bytes()?;
        log::debug!("serialized document: {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Build from raw bytes, which must be valid UTF-8.
    pub fn build_bytes(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(raw)?;
        self.build(text)
    }

    /// Build and wrap the bytes with the delivery filename and MIME type.
    pub fn build_artifact(&self, raw: &str) -> Result<DocxArtifact> {
        Ok(DocxArtifact::new(self.build(raw)?))
    }

    /// Build the in-memory document without serializing it.
    pub fn build_document(&self, raw: &str) -> Result<MutableDocument> {
        let mut doc = MutableDocument::new();
        self.apply_page_setup(doc.section_mut());
        self.apply_default_style(&mut doc);

        let lines = split_lines(raw);
        let (mut bullets, mut numbered) = (0usize, 0usize);
        for line in &lines {
            match self.append_line(&mut doc, line) {
                LineKind::Bullet => bullets += 1,
                LineKind::Numbered => numbered += 1,
                LineKind::Plain => {},
            }
        }

        log::debug!(
            "built document: {} paragraphs ({} bullet, {} numbered)",
            lines.len(),
            bullets,
            numbered
        );
        Ok(doc)
    }

    /// Page size, equal margins and the page border.
    pub fn apply_page_setup(&self, section: &mut SectionProperties) {
        *section = match self.policy.page {
            PageSize::Letter => SectionProperties::letter(),
            PageSize::A4 => SectionProperties::a4(),
        };

        let border = &self.policy.border;
        section
            .set_margins_all(self.policy.margin())
            .set_page_borders(PageBorders::uniform(
                BorderSpec::new(border.style, border.size, border.space, &border.color),
                border.offset_from,
            ));
    }

    /// Font family and size on the `Normal` style, across all script slots.
    pub fn apply_default_style(&self, doc: &mut MutableDocument) {
        let normal = doc.normal_style_mut();
        normal.set_font_for_all_scripts(&self.policy.font_family);
        normal.set_font_size(Some(self.policy.font_half_points()));
    }

    /// Direction, alignment and spacing every paragraph carries explicitly.
    pub fn format_paragraph(&self, para: &mut MutableParagraph, alignment: ParagraphAlignment) {
        para.set_alignment(alignment)
            .set_bidi(true)
            .set_space_before(Length::ZERO)
            .set_space_after(Length::ZERO)
            .set_line_spacing(LineSpacing::Single);
    }

    /// Hanging indent for list lines.
    pub fn apply_list_indent(&self, para: &mut MutableParagraph) {
        para.set_indent_right(self.policy.list_right_indent())
            .set_indent_first_line(self.policy.list_first_line_indent());
    }

    /// Append one paragraph for `line` and report how it was classified.
    pub fn append_line(&self, doc: &mut MutableDocument, line: &str) -> LineKind {
        let kind = self.classifier.classify(line);

        let para = doc.add_paragraph();
        self.format_paragraph(para, ParagraphAlignment::Right);
        if kind.is_list_item() {
            self.apply_list_indent(para);
        }
        para.add_run_with_text(line)
            .font_name(&self.policy.font_family)
            .font_size(self.policy.font_half_points())
            .rtl(true);

        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::ooxml::docx::format::BorderStyle;

    #[test]
    fn test_split_lines_policy() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n\na"), vec!["", "", "a"]);
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\u{c}b\u{b}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\u{2028}b\u{85}c\u{1e}"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\u{2029}\u{2029}b"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\u{c}b"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\tb"), vec!["a\tb"]);
    }

    #[test]
    fn test_plain_line_paragraph() {
        let doc = DocumentBuilder::default().build_document("سلام").unwrap();
        assert_eq!(doc.paragraph_count(), 1);

        let para = &doc.paragraphs()[0];
        assert_eq!(para.alignment(), Some(ParagraphAlignment::Right));
        assert!(para.is_bidi());
        assert_eq!(para.indent_right(), None);
        assert_eq!(para.indent_first_line(), None);

        let run = &para.runs()[0];
        assert_eq!(run.text(), "سلام");
        assert_eq!(run.get_font_name(), Some("Arial"));
        assert_eq!(run.get_font_size(), Some(24));
        assert!(run.is_rtl());
    }

    #[test]
    fn test_list_lines_get_hanging_indent() {
        let doc = DocumentBuilder::default()
            .build_document("• مورد اول\n۱. مورد دوم\nمتن")
            .unwrap();
        let indents: Vec<_> = doc
            .paragraphs()
            .iter()
            .map(|p| (p.indent_right(), p.indent_first_line()))
            .collect();
        let list = (Some(Length::from_cm(0.75)), Some(Length::from_cm(-0.5)));
        assert_eq!(indents, vec![list, list, (None, None)]);
    }

    #[test]
    fn test_run_text_is_verbatim() {
        let line = "\u{200F}  • مورد ";
        let doc = DocumentBuilder::default().build_document(line).unwrap();
        assert_eq!(doc.paragraphs()[0].text(), line);
    }

    #[test]
    fn test_page_setup_from_policy() {
        let policy = FormatPolicy {
            page: PageSize::A4,
            margin_cm: 2.0,
            ..FormatPolicy::default()
        };
        let builder = DocumentBuilder::new(policy).unwrap();
        let doc = builder.build_document("x").unwrap();

        let section = doc.section();
        assert_eq!(section.page_width.twips(), 11906);
        assert_eq!(section.margin_top, Length::from_cm(2.0));
        assert_eq!(section.margin_right, section.margin_left);
        let borders = section.borders.as_ref().unwrap();
        assert_eq!(borders.top.as_ref().unwrap().style, BorderStyle::Double);
        assert_eq!(borders.right, borders.left);
    }

    #[test]
    fn test_default_style_fonts() {
        let mut doc = DocumentBuilder::default().build_document("").unwrap();
        let normal = doc.style_mut("Normal").unwrap();
        assert_eq!(normal.font_name(), Some("Arial"));
        assert_eq!(normal.font_size(), Some(24));
    }

    #[test]
    fn test_custom_classifier() {
        let builder =
            DocumentBuilder::with_classifier(FormatPolicy::default(), |_: &str| LineKind::Bullet)
                .unwrap();
        let doc = builder.build_document("plain").unwrap();
        assert!(doc.paragraphs()[0].indent_first_line().is_some());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = FormatPolicy {
            font_family: String::new(),
            ..FormatPolicy::default()
        };
        assert!(matches!(DocumentBuilder::new(policy), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_bytes_rejects_invalid_utf8() {
        let err = DocumentBuilder::default().build_bytes(&[0x61, 0xff, 0x62]).unwrap_err();
        assert!(matches!(err, Error::InputEncoding(_)));
    }

    #[test]
    fn test_center_alignment_routine() {
        let builder = DocumentBuilder::default();
        let mut doc = MutableDocument::new();
        let para = doc.add_paragraph();
        builder.format_paragraph(para, ParagraphAlignment::Center);
        assert_eq!(para.alignment(), Some(ParagraphAlignment::Center));
        assert!(para.is_bidi());
    }
}
