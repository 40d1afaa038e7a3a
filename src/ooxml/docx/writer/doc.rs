/// Document writer implementation for DOCX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use std::collections::HashSet;
use std::path::Path;

use super::paragraph::MutableParagraph;
use super::props::{DocumentProperties, app_properties_xml};
use super::section::SectionProperties;
use super::style::{MutableStyle, generate_styles_xml};

const DOCUMENT_PART: &str = "/word/document.xml";
const STYLES_PART: &str = "/word/styles.xml";
const SETTINGS_PART: &str = "/word/settings.xml";
const CORE_PROPS_PART: &str = "/docProps/core.xml";
const APP_PROPS_PART: &str = "/docProps/app.xml";

/// A mutable Word document for writing.
///
/// Holds body paragraphs, the single section's page setup, the style table
/// and package metadata. Nothing touches the filesystem until
/// [`save`](Self::save) is called; [`to_bytes`](Self::to_bytes) produces the
/// complete `.docx` in memory.
#[derive(Debug, Clone)]
pub struct MutableDocument {
    paragraphs: Vec<MutableParagraph>,
    /// Section properties (page setup, margins, borders)
    section: SectionProperties,
    styles: Vec<MutableStyle>,
    properties: DocumentProperties,
    application: String,
}

impl MutableDocument {
    /// Create a new empty document with the default styles.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            section: SectionProperties::default(),
            styles: vec![MutableStyle::normal(), MutableStyle::default_paragraph_font()],
            properties: DocumentProperties::now(),
            application: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    pub fn section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Add a new empty paragraph at the end of the body.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        let idx = self.paragraphs.len() - 1;
        &mut self.paragraphs[idx]
    }

    /// Add a paragraph holding a single run of text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn paragraphs(&self) -> &[MutableParagraph] {
        &self.paragraphs
    }

    pub fn styles(&self) -> &[MutableStyle] {
        &self.styles
    }

    /// Append a style definition.
    ///
    /// Style ids are checked for uniqueness when the document is serialized.
    pub fn add_style(&mut self, style: MutableStyle) {
        self.styles.push(style);
    }

    pub fn style_mut(&mut self, style_id: &str) -> Option<&mut MutableStyle> {
        self.styles.iter_mut().find(|s| s.style_id() == style_id)
    }

    /// The `Normal` style, created if the table has none.
    pub fn normal_style_mut(&mut self) -> &mut MutableStyle {
        let idx = match self.styles.iter().position(|s| s.style_id() == "Normal") {
            Some(idx) => idx,
            None => {
                self.styles.push(MutableStyle::normal());
                self.styles.len() - 1
            },
        };
        &mut self.styles[idx]
    }

    /// Serialize the main document part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.paragraphs.len() * 512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>"#);

        for para in &self.paragraphs {
            para.to_xml(&mut xml)?;
        }

        // The sectPr must be the last element in the body
        self.section.to_xml(&mut xml)?;

        xml.push_str("</w:body></w:document>");
        Ok(xml)
    }

    /// Serialize `word/styles.xml`.
    pub fn styles_xml(&self) -> Result<String> {
        let mut seen = HashSet::new();
        for style in &self.styles {
            if !seen.insert(style.style_id()) {
                return Err(OoxmlError::InvalidFormat(format!(
                    "duplicate style id '{}'",
                    style.style_id()
                )));
            }
        }
        generate_styles_xml(&self.styles)
    }

    fn settings_xml() -> String {
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            r#"<w:defaultTabStop w:val="720"/>"#,
            r#"<w:characterSpacingControl w:val="doNotCompress"/>"#,
            r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>"#,
            r#"</w:settings>"#
        )
        .to_string()
    }

    /// Assemble the OPC package for this document.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let document = partname(DOCUMENT_PART)?;
        let styles = partname(STYLES_PART)?;
        let settings = partname(SETTINGS_PART)?;
        let core = partname(CORE_PROPS_PART)?;
        let app = partname(APP_PROPS_PART)?;

        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::from_xml(document.clone(), ct::WML_DOCUMENT_MAIN, self.to_xml()?))?;
        pkg.add_part(Part::from_xml(styles.clone(), ct::WML_STYLES, self.styles_xml()?))?;
        pkg.add_part(Part::from_xml(settings.clone(), ct::WML_SETTINGS, Self::settings_xml()))?;
        pkg.add_part(Part::from_xml(core.clone(), ct::OPC_CORE_PROPERTIES, self.properties.to_xml()))?;
        pkg.add_part(Part::from_xml(
            app.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            app_properties_xml(&self.application),
        ))?;

        pkg.relate_to(&document, rt::OFFICE_DOCUMENT)?;
        pkg.relate_to(&core, rt::CORE_PROPERTIES)?;
        pkg.relate_to(&app, rt::EXTENDED_PROPERTIES)?;
        pkg.relate_part(&document, &styles, rt::STYLES)?;
        pkg.relate_part(&document, &settings, rt::SETTINGS)?;

        Ok(pkg)
    }

    /// Serialize the whole document to `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.to_package()?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Write the document to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;

    #[test]
    fn test_create_empty_document() {
        let doc = MutableDocument::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.styles().len(), 2);
    }

    #[test]
    fn test_section_is_last_in_body() {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text("سلام");
        let xml = doc.to_xml().unwrap();
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
        assert!(xml.find("</w:p>").unwrap() < xml.find("<w:sectPr>").unwrap());
    }

    #[test]
    fn test_package_parts() {
        let doc = MutableDocument::new();
        let bytes = doc.to_bytes().unwrap();
        let reader = PhysPkgReader::new(&bytes).unwrap();
        let names = reader.member_names();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/settings.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_duplicate_style_fails_serialization() {
        let mut doc = MutableDocument::new();
        doc.add_style(MutableStyle::normal());
        assert!(matches!(doc.to_bytes(), Err(OoxmlError::InvalidFormat(_))));
    }

    #[test]
    fn test_normal_style_recreated() {
        let mut doc = MutableDocument::new();
        doc.normal_style_mut().set_font_for_all_scripts("Arial");
        assert_eq!(doc.style_mut("Normal").unwrap().font_name(), Some("Arial"));
        assert_eq!(doc.styles().iter().filter(|s| s.style_id() == "Normal").count(), 1);
    }
}
