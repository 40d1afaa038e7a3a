/// Run types and implementation for DOCX documents.
use crate::common::xml::strip_invalid_xml_chars;
use crate::ooxml::docx::markup::ElementWriter;
use crate::ooxml::error::Result;

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone, Default)]
pub struct MutableRun {
    text: String,
    pub(crate) properties: RunProperties,
}

/// Run formatting properties.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub font_name: Option<String>,
    /// Size in half-points
    pub font_size: Option<u32>,
    pub rtl: bool,
}

impl RunProperties {
    fn has_properties(&self) -> bool {
        self.font_name.is_some() || self.font_size.is_some() || self.rtl
    }
}

impl MutableRun {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            properties: RunProperties::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the font family for every script slot.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Mark the run as right-to-left.
    pub fn rtl(&mut self, rtl: bool) -> &mut Self {
        self.properties.rtl = rtl;
        self
    }

    pub fn get_font_name(&self) -> Option<&str> {
        self.properties.font_name.as_deref()
    }

    pub fn get_font_size(&self) -> Option<u32> {
        self.properties.font_size
    }

    pub fn is_rtl(&self) -> bool {
        self.properties.rtl
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let mut w = ElementWriter::new(xml);
        w.open("w:r");

        let props = &self.properties;
        if props.has_properties() {
            w.open("w:rPr");
            if let Some(ref name) = props.font_name {
                w.fonts_for_all_scripts(name)?;
            }
            if let Some(size) = props.font_size {
                w.font_size(size)?;
            }
            w.run_direction(props.rtl);
            w.close("w:rPr");
        }

        w.text(&strip_invalid_xml_chars(&self.text));
        w.close("w:r");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_run_xml() {
        let mut run = MutableRun::new("سلام");
        run.font_name("Arial").font_size(24).rtl(true);

        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with("<w:r><w:rPr><w:rFonts "));
        assert!(xml.contains(r#"<w:szCs w:val="24"/><w:rtl/></w:rPr>"#));
        assert!(xml.ends_with(r#"<w:t xml:space="preserve">سلام</w:t></w:r>"#));
    }

    #[test]
    fn test_plain_run_has_no_properties() {
        let mut xml = String::new();
        MutableRun::new("x").to_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:r><w:t xml:space="preserve">x</w:t></w:r>"#);
    }

    #[test]
    fn test_tab_written_as_element() {
        let mut xml = String::new();
        MutableRun::new("1)\tمورد").to_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:r><w:t xml:space="preserve">1)</w:t><w:tab/><w:t xml:space="preserve">مورد</w:t></w:r>"#
        );
    }

    #[test]
    fn test_control_chars_dropped_in_xml() {
        let run = MutableRun::new("a\u{7}b");
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        assert!(xml.contains(">ab<"));
        assert_eq!(run.text(), "a\u{7}b");
    }
}
