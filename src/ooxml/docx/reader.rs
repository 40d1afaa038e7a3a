//! Structural read-back of `.docx` packages.
//!
//! Parses the main document and style parts into plain summaries so callers
//! (and tests) can check page setup, paragraph direction, indentation and run
//! fonts without string-matching raw XML.

use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackURI;
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Font family per script slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSlots {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub cs: Option<String>,
    pub east_asia: Option<String>,
}

impl FontSlots {
    /// True when every slot names `family`.
    pub fn all_are(&self, family: &str) -> bool {
        [&self.ascii, &self.h_ansi, &self.cs, &self.east_asia]
            .iter()
            .all(|slot| slot.as_deref() == Some(family))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub text: String,
    pub fonts: FontSlots,
    /// Size in half-points
    pub size: Option<u32>,
    /// Complex-script size in half-points
    pub size_cs: Option<u32>,
    pub rtl: bool,
}

/// Paragraph properties as written, in twips where applicable.
#[derive(Debug, Clone, Default)]
pub struct ParagraphSummary {
    /// `w:jc` value
    pub alignment: Option<String>,
    pub bidi: bool,
    /// Paragraph mark carries `w:rtl`
    pub mark_rtl: bool,
    pub space_before: Option<i64>,
    pub space_after: Option<i64>,
    pub line: Option<i64>,
    pub line_rule: Option<String>,
    pub indent_left: Option<i64>,
    pub indent_right: Option<i64>,
    /// First-line indent; hanging indents are reported as negative values
    pub indent_first_line: Option<i64>,
    pub runs: Vec<RunSummary>,
}

impl ParagraphSummary {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderSummary {
    /// `top`, `left`, `bottom` or `right`
    pub side: String,
    pub style: Option<String>,
    pub size: Option<u32>,
    pub space: Option<u32>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SectionSummary {
    pub page_width: Option<i64>,
    pub page_height: Option<i64>,
    pub margin_top: Option<i64>,
    pub margin_right: Option<i64>,
    pub margin_bottom: Option<i64>,
    pub margin_left: Option<i64>,
    pub border_offset: Option<String>,
    pub borders: Vec<BorderSummary>,
}

#[derive(Debug, Clone, Default)]
pub struct StyleSummary {
    pub style_id: String,
    pub style_type: Option<String>,
    pub is_default: bool,
    pub fonts: FontSlots,
    pub size: Option<u32>,
    pub size_cs: Option<u32>,
}

/// What a built document contains.
#[derive(Debug, Clone, Default)]
pub struct DocxSummary {
    pub part_names: Vec<String>,
    pub paragraphs: Vec<ParagraphSummary>,
    pub section: SectionSummary,
    pub styles: Vec<StyleSummary>,
}

impl DocxSummary {
    /// Read a `.docx` from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut pkg = PhysPkgReader::new(bytes)?;
        let part_names = pkg.member_names();

        let document = pkg.blob_for(&partname("/word/document.xml")?)?;
        let styles_uri = partname("/word/styles.xml")?;
        let styles = if pkg.contains(&styles_uri) {
            parse_styles(&pkg.blob_for(&styles_uri)?)?
        } else {
            Vec::new()
        };

        let (paragraphs, section) = parse_document(&document)?;
        Ok(Self {
            part_names,
            paragraphs,
            section,
            styles,
        })
    }

    pub fn style(&self, style_id: &str) -> Option<&StyleSummary> {
        self.styles.iter().find(|s| s.style_id == style_id)
    }

    /// Number of style definitions with the given id.
    pub fn style_count(&self, style_id: &str) -> usize {
        self.styles.iter().filter(|s| s.style_id == style_id).count()
    }

    pub fn has_part(&self, member_name: &str) -> bool {
        self.part_names.iter().any(|n| n == member_name)
    }
}

fn partname(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(|e| OoxmlError::Opc(OpcError::InvalidPackUri(e)))
}

/// Attribute values keyed by local name.
fn attributes(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| OoxmlError::Xml(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|err| OoxmlError::Xml(err.to_string()))?;
        map.insert(key, value.into_owned());
    }
    Ok(map)
}

fn int_attr(attrs: &HashMap<String, String>, key: &str) -> Option<i64> {
    attrs.get(key).and_then(|v| v.parse().ok())
}

fn uint_attr(attrs: &HashMap<String, String>, key: &str) -> Option<u32> {
    attrs.get(key).and_then(|v| v.parse().ok())
}

fn fonts_from(attrs: &HashMap<String, String>) -> FontSlots {
    FontSlots {
        ascii: attrs.get("ascii").cloned(),
        h_ansi: attrs.get("hAnsi").cloned(),
        cs: attrs.get("cs").cloned(),
        east_asia: attrs.get("eastAsia").cloned(),
    }
}

/// Resolve a general entity reference body (`amp`, `#x41`, ...).
fn resolve_entity(name: &str) -> String {
    let numeric = name
        .strip_prefix("#x")
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()));
    match numeric.and_then(char::from_u32) {
        Some(c) => c.to_string(),
        None => unescape_xml(&format!("&{name};")),
    }
}

#[derive(Default)]
struct DocumentState {
    paragraphs: Vec<ParagraphSummary>,
    section: SectionSummary,
    para: Option<ParagraphSummary>,
    run: Option<RunSummary>,
    in_ppr: bool,
    in_mark_rpr: bool,
    in_text: bool,
    in_sect_pr: bool,
    in_pg_borders: bool,
}

impl DocumentState {
    fn element(&mut self, name: &[u8], attrs: &HashMap<String, String>, is_empty: bool) {
        if self.in_sect_pr {
            self.section_element(name, attrs, is_empty);
            return;
        }

        match name {
            b"p" => {
                self.para = Some(ParagraphSummary::default());
                if is_empty {
                    self.end_paragraph();
                }
            },
            b"pPr" => self.in_ppr = !is_empty,
            b"rPr" if self.in_ppr => self.in_mark_rpr = !is_empty,
            b"r" => {
                self.run = Some(RunSummary::default());
                if is_empty {
                    self.end_run();
                }
            },
            b"t" => self.in_text = !is_empty,
            b"sectPr" => self.in_sect_pr = !is_empty,
            _ => {
                if let Some(run) = self.run.as_mut() {
                    Self::run_property(run, name, attrs);
                } else if let Some(para) = self.para.as_mut() {
                    if self.in_mark_rpr {
                        if name == b"rtl" {
                            para.mark_rtl = true;
                        }
                    } else if self.in_ppr {
                        Self::paragraph_property(para, name, attrs);
                    }
                }
            },
        }
    }

    fn paragraph_property(para: &mut ParagraphSummary, name: &[u8], attrs: &HashMap<String, String>) {
        match name {
            b"bidi" => para.bidi = attrs.get("val").is_none_or(|v| v != "0" && v != "false"),
            b"jc" => para.alignment = attrs.get("val").cloned(),
            b"spacing" => {
                para.space_before = int_attr(attrs, "before");
                para.space_after = int_attr(attrs, "after");
                para.line = int_attr(attrs, "line");
                para.line_rule = attrs.get("lineRule").cloned();
            },
            b"ind" => {
                para.indent_left = int_attr(attrs, "left").or_else(|| int_attr(attrs, "start"));
                para.indent_right = int_attr(attrs, "right").or_else(|| int_attr(attrs, "end"));
                para.indent_first_line = int_attr(attrs, "hanging")
                    .map(|h| -h)
                    .or_else(|| int_attr(attrs, "firstLine"));
            },
            _ => {},
        }
    }

    fn run_property(run: &mut RunSummary, name: &[u8], attrs: &HashMap<String, String>) {
        match name {
            b"rFonts" => run.fonts = fonts_from(attrs),
            b"sz" => run.size = uint_attr(attrs, "val"),
            b"szCs" => run.size_cs = uint_attr(attrs, "val"),
            b"rtl" => run.rtl = attrs.get("val").is_none_or(|v| v != "0" && v != "false"),
            b"tab" => run.text.push('\t'),
            _ => {},
        }
    }

    fn section_element(&mut self, name: &[u8], attrs: &HashMap<String, String>, is_empty: bool) {
        let section = &mut self.section;
        match name {
            b"pgSz" => {
                section.page_width = int_attr(attrs, "w");
                section.page_height = int_attr(attrs, "h");
            },
            b"pgMar" => {
                section.margin_top = int_attr(attrs, "top");
                section.margin_right = int_attr(attrs, "right");
                section.margin_bottom = int_attr(attrs, "bottom");
                section.margin_left = int_attr(attrs, "left");
            },
            b"pgBorders" => {
                section.border_offset = attrs.get("offsetFrom").cloned();
                self.in_pg_borders = !is_empty;
            },
            b"top" | b"left" | b"bottom" | b"right" if self.in_pg_borders => {
                section.borders.push(BorderSummary {
                    side: String::from_utf8_lossy(name).into_owned(),
                    style: attrs.get("val").cloned(),
                    size: uint_attr(attrs, "sz"),
                    space: uint_attr(attrs, "space"),
                    color: attrs.get("color").cloned(),
                });
            },
            _ => {},
        }
    }

    fn end_element(&mut self, name: &[u8]) {
        match name {
            b"p" => self.end_paragraph(),
            b"pPr" => self.in_ppr = false,
            b"rPr" => self.in_mark_rpr = false,
            b"r" => self.end_run(),
            b"t" => self.in_text = false,
            b"pgBorders" => self.in_pg_borders = false,
            b"sectPr" => self.in_sect_pr = false,
            _ => {},
        }
    }

    fn end_run(&mut self) {
        if let (Some(run), Some(para)) = (self.run.take(), self.para.as_mut()) {
            para.runs.push(run);
        }
        self.in_text = false;
    }

    fn end_paragraph(&mut self) {
        if let Some(para) = self.para.take() {
            self.paragraphs.push(para);
        }
        self.in_ppr = false;
        self.in_mark_rpr = false;
    }

    fn push_text(&mut self, text: &str) {
        if !self.in_text {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }
}

fn parse_document(xml: &[u8]) -> Result<(Vec<ParagraphSummary>, SectionSummary)> {
    let mut reader = Reader::from_reader(xml);
    let mut state = DocumentState::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let attrs = attributes(&reader, &e)?;
                state.element(e.local_name().as_ref(), &attrs, false);
            },
            Ok(Event::Empty(e)) => {
                let attrs = attributes(&reader, &e)?;
                state.element(e.local_name().as_ref(), &attrs, true);
            },
            Ok(Event::End(e)) => state.end_element(e.local_name().as_ref()),
            Ok(Event::Text(e)) => {
                let raw = std::str::from_utf8(e.as_ref())
                    .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                state.push_text(&unescape_xml(raw));
            },
            Ok(Event::GeneralRef(e)) => {
                let name: &[u8] = &e;
                let name = std::str::from_utf8(name).map_err(|err| OoxmlError::Xml(err.to_string()))?;
                state.push_text(&resolve_entity(name));
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok((state.paragraphs, state.section))
}

fn parse_styles(xml: &[u8]) -> Result<Vec<StyleSummary>> {
    let mut reader = Reader::from_reader(xml);
    let mut styles = Vec::new();
    let mut current: Option<StyleSummary> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"style" => {
                        let attrs = attributes(&reader, &e)?;
                        current = Some(StyleSummary {
                            style_id: attrs.get("styleId").cloned().unwrap_or_default(),
                            style_type: attrs.get("type").cloned(),
                            is_default: attrs.get("default").is_some_and(|v| v == "1" || v == "true"),
                            ..StyleSummary::default()
                        });
                    },
                    b"rFonts" | b"sz" | b"szCs" => {
                        if let Some(style) = current.as_mut() {
                            let attrs = attributes(&reader, &e)?;
                            match name.as_ref() {
                                b"rFonts" => style.fonts = fonts_from(&attrs),
                                b"sz" => style.size = uint_attr(&attrs, "val"),
                                _ => style.size_cs = uint_attr(&attrs, "val"),
                            }
                        }
                    },
                    _ => {},
                }
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"style" {
                    styles.extend(current.take());
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;
    use crate::ooxml::docx::format::{BorderOffset, BorderStyle};
    use crate::ooxml::docx::writer::{
        BorderSpec, LineSpacing, MutableDocument, PageBorders, ParagraphAlignment,
    };

    fn sample() -> Vec<u8> {
        let mut doc = MutableDocument::new();
        doc.section_mut()
            .set_margins_all(Length::from_cm(1.5))
            .set_page_borders(PageBorders::uniform(
                BorderSpec::new(BorderStyle::Double, 12, 12, "auto"),
                BorderOffset::Page,
            ));
        doc.normal_style_mut().set_font_for_all_scripts("Arial");

        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Right)
            .set_bidi(true)
            .set_line_spacing(LineSpacing::Single)
            .set_indent_right(Length::from_cm(0.75))
            .set_indent_first_line(Length::from_cm(-0.5));
        para.add_run_with_text("۱)\ta & b <c>").font_name("Arial").font_size(24).rtl(true);
        doc.add_paragraph();

        doc.to_bytes().unwrap()
    }

    #[test]
    fn test_read_back_paragraphs() {
        let summary = DocxSummary::from_bytes(&sample()).unwrap();
        assert_eq!(summary.paragraphs.len(), 2);

        let para = &summary.paragraphs[0];
        assert_eq!(para.alignment.as_deref(), Some("right"));
        assert!(para.bidi && para.mark_rtl);
        assert_eq!(para.line, Some(240));
        assert_eq!(para.indent_right, Some(425));
        assert_eq!(para.indent_first_line, Some(-283));
        assert_eq!(para.text(), "۱)\ta & b <c>");
        assert!(para.runs[0].rtl);
        assert!(para.runs[0].fonts.all_are("Arial"));
        assert_eq!(para.runs[0].size_cs, Some(24));

        assert!(summary.paragraphs[1].runs.is_empty());
    }

    #[test]
    fn test_read_back_section_and_styles() {
        let summary = DocxSummary::from_bytes(&sample()).unwrap();
        assert_eq!(summary.section.margin_left, Some(850));
        assert_eq!(summary.section.border_offset.as_deref(), Some("page"));
        assert_eq!(summary.section.borders.len(), 4);
        assert!(summary.section.borders.iter().all(|b| b.style.as_deref() == Some("double")));
        assert_eq!(summary.style_count("Normal"), 1);
        assert!(summary.style("Normal").unwrap().fonts.all_are("Arial"));
        assert!(summary.has_part("word/styles.xml"));
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp"), "&");
        assert_eq!(resolve_entity("#x06F1"), "۱");
        assert_eq!(resolve_entity("#65"), "A");
        assert_eq!(resolve_entity("bogus"), "&bogus;");
    }

    #[test]
    fn test_not_a_zip() {
        assert!(DocxSummary::from_bytes(b"plain text").is_err());
    }
}
