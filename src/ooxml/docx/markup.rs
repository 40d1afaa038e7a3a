//! WordprocessingML element builders.
//!
//! Every `w:` element and attribute name the writer emits is spelled out
//! here. The paragraph, run, style and section writers describe *what* they
//! want and this module decides how it is written, so markup quirks such as
//! negative first-line indents or the duplicated complex-script size live in
//! exactly one place.

use crate::common::xml::escape_xml;
use crate::ooxml::docx::format::{BorderOffset, BorderStyle, LineSpacing, ParagraphAlignment};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// One edge of a page border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BorderEdge<'a> {
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub size: u32,
    /// Distance in points
    pub space: u32,
    pub color: &'a str,
}

/// Appends WordprocessingML fragments to a string buffer.
pub(crate) struct ElementWriter<'a> {
    xml: &'a mut String,
}

impl<'a> ElementWriter<'a> {
    pub(crate) fn new(xml: &'a mut String) -> Self {
        Self { xml }
    }

    pub(crate) fn open(&mut self, tag: &str) {
        self.xml.push('<');
        self.xml.push_str(tag);
        self.xml.push('>');
    }

    pub(crate) fn close(&mut self, tag: &str) {
        self.xml.push_str("</");
        self.xml.push_str(tag);
        self.xml.push('>');
    }

    /// Right-to-left paragraph direction.
    pub(crate) fn paragraph_direction(&mut self, bidi: bool) {
        if bidi {
            self.xml.push_str("<w:bidi/>");
        }
    }

    /// Right-to-left run direction.
    pub(crate) fn run_direction(&mut self, rtl: bool) {
        if rtl {
            self.xml.push_str("<w:rtl/>");
        }
    }

    /// Paragraph spacing in twips.
    pub(crate) fn spacing(
        &mut self,
        before: Option<i64>,
        after: Option<i64>,
        line: Option<LineSpacing>,
    ) -> Result<()> {
        if before.is_none() && after.is_none() && line.is_none() {
            return Ok(());
        }
        self.xml.push_str("<w:spacing");
        if let Some(before) = before {
            write!(self.xml, r#" w:before="{}""#, before)?;
        }
        if let Some(after) = after {
            write!(self.xml, r#" w:after="{}""#, after)?;
        }
        if let Some(line) = line {
            let (value, rule) = line.line_and_rule();
            write!(self.xml, r#" w:line="{}" w:lineRule="{}""#, value, rule)?;
        }
        self.xml.push_str("/>");
        Ok(())
    }

    /// Paragraph indentation in twips.
    ///
    /// A negative first-line value is written as `w:hanging`.
    pub(crate) fn indentation(&mut self, right: Option<i64>, first_line: Option<i64>) -> Result<()> {
        if right.is_none() && first_line.is_none() {
            return Ok(());
        }
        self.xml.push_str("<w:ind");
        if let Some(right) = right {
            write!(self.xml, r#" w:right="{}""#, right)?;
        }
        match first_line {
            Some(value) if value < 0 => write!(self.xml, r#" w:hanging="{}""#, -value)?,
            Some(value) => write!(self.xml, r#" w:firstLine="{}""#, value)?,
            None => {},
        }
        self.xml.push_str("/>");
        Ok(())
    }

    pub(crate) fn alignment(&mut self, alignment: ParagraphAlignment) -> Result<()> {
        write!(self.xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
        Ok(())
    }

    /// The same font in the ASCII, high-ANSI, complex-script and East Asian slots.
    pub(crate) fn fonts_for_all_scripts(&mut self, name: &str) -> Result<()> {
        let name = escape_xml(name);
        write!(
            self.xml,
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}" w:eastAsia="{0}"/>"#,
            name
        )?;
        Ok(())
    }

    /// Font size in half-points, applied to both Latin and complex scripts.
    pub(crate) fn font_size(&mut self, half_points: u32) -> Result<()> {
        write!(
            self.xml,
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
            half_points
        )?;
        Ok(())
    }

    /// Run content. Tab characters become `<w:tab/>` between text segments.
    pub(crate) fn text(&mut self, text: &str) {
        for (i, segment) in text.split('\t').enumerate() {
            if i > 0 {
                self.xml.push_str("<w:tab/>");
            }
            if segment.is_empty() {
                continue;
            }
            self.xml.push_str(r#"<w:t xml:space="preserve">"#);
            self.xml.push_str(&escape_xml(segment));
            self.xml.push_str("</w:t>");
        }
    }

    /// Page size in twips.
    pub(crate) fn page_size(&mut self, width: i64, height: i64) -> Result<()> {
        write!(self.xml, r#"<w:pgSz w:w="{}" w:h="{}"/>"#, width, height)?;
        Ok(())
    }

    /// Page margins in twips, in `top, right, bottom, left` order.
    pub(crate) fn page_margins(
        &mut self,
        margins: [i64; 4],
        header: i64,
        footer: i64,
        gutter: i64,
    ) -> Result<()> {
        let [top, right, bottom, left] = margins;
        write!(
            self.xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="{}"/>"#,
            top, right, bottom, left, header, footer, gutter
        )?;
        Ok(())
    }

    /// A `w:pgBorders` block with edges in `top, left, bottom, right` order.
    pub(crate) fn page_borders(
        &mut self,
        offset_from: BorderOffset,
        edges: [Option<&BorderEdge<'_>>; 4],
    ) -> Result<()> {
        if edges.iter().all(Option::is_none) {
            return Ok(());
        }
        write!(
            self.xml,
            r#"<w:pgBorders w:offsetFrom="{}">"#,
            offset_from.as_str()
        )?;
        for (side, edge) in ["top", "left", "bottom", "right"].iter().zip(edges) {
            if let Some(edge) = edge {
                write!(
                    self.xml,
                    r#"<w:{} w:val="{}" w:sz="{}" w:space="{}" w:color="{}"/>"#,
                    side,
                    edge.style.as_str(),
                    edge.size,
                    edge.space,
                    escape_xml(edge.color)
                )?;
            }
        }
        self.xml.push_str("</w:pgBorders>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_first_line_is_hanging() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml)
            .indentation(Some(425), Some(-283))
            .unwrap();
        assert_eq!(xml, r#"<w:ind w:right="425" w:hanging="283"/>"#);
    }

    #[test]
    fn test_empty_indentation_writes_nothing() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml)
            .indentation(None, None)
            .unwrap();
        assert!(xml.is_empty());
    }

    #[test]
    fn test_fonts_for_all_scripts() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml)
            .fonts_for_all_scripts("Arial")
            .unwrap();
        assert!(xml.contains(r#"w:ascii="Arial""#));
        assert!(xml.contains(r#"w:hAnsi="Arial""#));
        assert!(xml.contains(r#"w:cs="Arial""#));
        assert!(xml.contains(r#"w:eastAsia="Arial""#));
    }

    #[test]
    fn test_spacing_single() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml)
            .spacing(Some(0), Some(0), Some(LineSpacing::Single))
            .unwrap();
        assert_eq!(
            xml,
            r#"<w:spacing w:before="0" w:after="0" w:line="240" w:lineRule="auto"/>"#
        );
    }

    #[test]
    fn test_page_borders_order() {
        let edge = BorderEdge {
            style: BorderStyle::Double,
            size: 12,
            space: 12,
            color: "auto",
        };
        let mut xml = String::new();
        ElementWriter::new(&mut xml)
            .page_borders(BorderOffset::Page, [Some(&edge); 4])
            .unwrap();
        assert!(xml.starts_with(r#"<w:pgBorders w:offsetFrom="page">"#));
        let top = xml.find("<w:top").unwrap();
        let left = xml.find("<w:left").unwrap();
        let bottom = xml.find("<w:bottom").unwrap();
        let right = xml.find("<w:right").unwrap();
        assert!(top < left && left < bottom && bottom < right);
        assert!(xml.contains(r#"<w:right w:val="double" w:sz="12" w:space="12" w:color="auto"/>"#));
    }

    #[test]
    fn test_text_is_escaped_and_preserved() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml).text(" a < b ");
        assert_eq!(xml, r#"<w:t xml:space="preserve"> a &lt; b </w:t>"#);
    }

    #[test]
    fn test_tabs_become_tab_elements() {
        let mut xml = String::new();
        ElementWriter::new(&mut xml).text("1)\tمورد\t");
        assert_eq!(
            xml,
            r#"<w:t xml:space="preserve">1)</w:t><w:tab/><w:t xml:space="preserve">مورد</w:t><w:tab/>"#
        );
    }
}
