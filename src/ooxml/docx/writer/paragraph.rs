/// Paragraph types and implementation for DOCX documents.
use crate::common::Length;
use crate::ooxml::docx::markup::ElementWriter;
use crate::ooxml::error::Result;

pub use crate::ooxml::docx::format::{LineSpacing, ParagraphAlignment};

use super::run::MutableRun;

/// A mutable paragraph in a document.
#[derive(Debug, Clone, Default)]
pub struct MutableParagraph {
    pub(crate) runs: Vec<MutableRun>,
    pub(crate) properties: ParagraphProperties,
}

/// Paragraph formatting properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParagraphProperties {
    pub alignment: Option<ParagraphAlignment>,
    /// Right-to-left paragraph direction
    pub bidi: bool,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub line_spacing: Option<LineSpacing>,
    pub indent_right: Option<Length>,
    /// Negative values produce a hanging indent
    pub indent_first_line: Option<Length>,
}

impl ParagraphProperties {
    fn has_properties(&self) -> bool {
        self.alignment.is_some()
            || self.bidi
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.line_spacing.is_some()
            || self.indent_right.is_some()
            || self.indent_first_line.is_some()
    }
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a run with text to the paragraph.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        self.runs.push(MutableRun::new(text));
        let idx = self.runs.len() - 1;
        &mut self.runs[idx]
    }

    pub fn runs(&self) -> &[MutableRun] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(MutableRun::text).collect()
    }

    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.properties.alignment = Some(alignment);
        self
    }

    pub fn alignment(&self) -> Option<ParagraphAlignment> {
        self.properties.alignment
    }

    /// Set right-to-left paragraph direction.
    pub fn set_bidi(&mut self, bidi: bool) -> &mut Self {
        self.properties.bidi = bidi;
        self
    }

    pub fn is_bidi(&self) -> bool {
        self.properties.bidi
    }

    pub fn set_space_before(&mut self, space: Length) -> &mut Self {
        self.properties.space_before = Some(space);
        self
    }

    pub fn set_space_after(&mut self, space: Length) -> &mut Self {
        self.properties.space_after = Some(space);
        self
    }

    pub fn set_line_spacing(&mut self, spacing: LineSpacing) -> &mut Self {
        self.properties.line_spacing = Some(spacing);
        self
    }

    pub fn set_indent_right(&mut self, indent: Length) -> &mut Self {
        self.properties.indent_right = Some(indent);
        self
    }

    /// Set the first-line indent. A negative length hangs the first line.
    pub fn set_indent_first_line(&mut self, indent: Length) -> &mut Self {
        self.properties.indent_first_line = Some(indent);
        self
    }

    pub fn indent_right(&self) -> Option<Length> {
        self.properties.indent_right
    }

    pub fn indent_first_line(&self) -> Option<Length> {
        self.properties.indent_first_line
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let mut w = ElementWriter::new(xml);
        w.open("w:p");

        let props = &self.properties;
        if props.has_properties() {
            w.open("w:pPr");
            w.paragraph_direction(props.bidi);
            w.spacing(
                props.space_before.map(|l| l.twips()),
                props.space_after.map(|l| l.twips()),
                props.line_spacing,
            )?;
            w.indentation(
                props.indent_right.map(|l| l.twips()),
                props.indent_first_line.map(|l| l.twips()),
            )?;
            if let Some(alignment) = props.alignment {
                w.alignment(alignment)?;
            }
            // Paragraph mark direction follows the paragraph.
            if props.bidi {
                w.open("w:rPr");
                w.run_direction(true);
                w.close("w:rPr");
            }
            w.close("w:pPr");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}
