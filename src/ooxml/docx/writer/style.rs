/// Style writer support for DOCX documents.
use crate::ooxml::docx::markup::ElementWriter;
use crate::ooxml::error::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// Kind of style definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    Paragraph,
    Character,
}

impl StyleType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
        }
    }
}

/// A mutable style definition for writing.
///
/// Only character formatting is carried: the document body sets paragraph
/// formatting directly on each paragraph.
///
/// # Examples
///
/// ```rust
/// use rtlscribe::ooxml::docx::writer::MutableStyle;
///
/// let mut normal = MutableStyle::normal();
/// normal.set_font_for_all_scripts("Arial");
/// normal.set_font_size(Some(24)); // 12pt
/// assert_eq!(normal.font_name(), Some("Arial"));
/// ```
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Normal")
    style_id: String,
    /// UI-visible name
    name: String,
    style_type: StyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<i32>,
    is_quick_style: bool,
    /// Hidden until used
    is_hidden: bool,
    /// Font family for the ASCII, high-ANSI, complex and East Asian slots
    font_name: Option<String>,
    /// Font size in half-points (e.g., 24 = 12pt)
    font_size: Option<u32>,
}

impl MutableStyle {
    pub fn new(style_id: impl Into<String>, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            priority: None,
            is_quick_style: false,
            is_hidden: false,
            font_name: None,
            font_size: None,
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style_type(&self) -> StyleType {
        self.style_type
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.priority = priority;
    }

    pub fn set_quick_style(&mut self, is_quick_style: bool) {
        self.is_quick_style = is_quick_style;
    }

    pub fn set_hidden(&mut self, is_hidden: bool) {
        self.is_hidden = is_hidden;
    }

    /// Use one font family for every script slot.
    ///
    /// Setting only the Latin slot leaves Persian and Arabic text in
    /// whatever complex-script font the reader's defaults pick.
    pub fn set_font_for_all_scripts(&mut self, font_name: &str) {
        self.font_name = Some(font_name.to_string());
    }

    #[inline]
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Set font size in half-points.
    pub fn set_font_size(&mut self, font_size: Option<u32>) {
        self.font_size = font_size;
    }

    #[inline]
    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.as_str(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;

        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_hidden {
            xml.push_str("<w:semiHidden/><w:unhideWhenUsed/>");
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.font_name.is_some() || self.font_size.is_some() {
            let mut w = ElementWriter::new(xml);
            w.open("w:rPr");
            if let Some(ref font_name) = self.font_name {
                w.fonts_for_all_scripts(font_name)?;
            }
            if let Some(size) = self.font_size {
                w.font_size(size)?;
            }
            w.close("w:rPr");
        }

        xml.push_str("</w:style>");
        Ok(())
    }

    /// The default paragraph style.
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.set_default(true);
        style.set_quick_style(true);
        style
    }

    /// The default character style.
    pub fn default_paragraph_font() -> Self {
        let mut style = Self::new(
            "DefaultParagraphFont",
            "Default Paragraph Font",
            StyleType::Character,
        );
        style.set_default(true);
        style.set_priority(Some(1));
        style.set_hidden(true);
        style
    }
}

/// Generate `word/styles.xml`.
///
/// Document defaults mirror the default paragraph style's font so text
/// outside any style still renders in the same family.
pub fn generate_styles_xml(styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    );
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    let default_para = styles
        .iter()
        .find(|s| s.is_default && s.style_type == StyleType::Paragraph);

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    {
        let mut w = ElementWriter::new(&mut xml);
        if let Some(font_name) = default_para.and_then(MutableStyle::font_name) {
            w.fonts_for_all_scripts(font_name)?;
        }
        if let Some(size) = default_para.and_then(MutableStyle::font_size) {
            w.font_size(size)?;
        }
    }
    xml.push_str(r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="fa-IR"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_style_all_scripts() {
        let mut style = MutableStyle::normal();
        style.set_font_for_all_scripts("Arial");
        style.set_font_size(Some(24));

        let mut xml = String::new();
        style.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:style w:type="paragraph" w:styleId="Normal" w:default="1">"#));
        assert!(xml.contains(r#"w:eastAsia="Arial""#));
        assert!(xml.contains(r#"w:cs="Arial""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/><w:szCs w:val="24"/>"#));
    }

    #[test]
    fn test_default_character_style_hidden() {
        let mut xml = String::new();
        MutableStyle::default_paragraph_font().to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:style w:type="character" w:styleId="DefaultParagraphFont" w:default="1">"#));
        assert!(xml.contains(r#"<w:uiPriority w:val="1"/><w:semiHidden/><w:unhideWhenUsed/>"#));
        assert!(!xml.contains("<w:rPr>"));
    }

    #[test]
    fn test_styles_part_defaults_follow_normal() {
        let mut normal = MutableStyle::normal();
        normal.set_font_for_all_scripts("Arial");
        let xml = generate_styles_xml(&[normal, MutableStyle::default_paragraph_font()]).unwrap();

        let defaults_end = xml.find("</w:docDefaults>").unwrap();
        assert!(xml[..defaults_end].contains(r#"w:ascii="Arial""#));
        assert!(xml.contains(r#"w:styleId="DefaultParagraphFont""#));
        assert!(xml.ends_with("</w:styles>"));
    }
}
