/// Section properties: page size, margins and page borders.
use crate::common::Length;
use crate::ooxml::docx::format::{BorderOffset, BorderStyle};
use crate::ooxml::docx::markup::{BorderEdge, ElementWriter};
use crate::ooxml::error::Result;

/// One side of a page border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSpec {
    /// Line style
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub size: u32,
    /// Distance from the offset origin in points
    pub space: u32,
    /// Hex RGB or `auto`
    pub color: String,
}

impl BorderSpec {
    pub fn new(style: BorderStyle, size: u32, space: u32, color: &str) -> Self {
        Self {
            style,
            size,
            space,
            color: color.to_string(),
        }
    }

    fn as_edge(&self) -> BorderEdge<'_> {
        BorderEdge {
            style: self.style,
            size: self.size,
            space: self.space,
            color: &self.color,
        }
    }
}

/// Page borders drawn around every page of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBorders {
    pub top: Option<BorderSpec>,
    pub left: Option<BorderSpec>,
    pub bottom: Option<BorderSpec>,
    pub right: Option<BorderSpec>,
    /// Whether `space` is measured from the page edge or the text
    pub offset_from: BorderOffset,
}

impl PageBorders {
    /// The same border on all four sides.
    pub fn uniform(spec: BorderSpec, offset_from: BorderOffset) -> Self {
        Self {
            top: Some(spec.clone()),
            left: Some(spec.clone()),
            bottom: Some(spec.clone()),
            right: Some(spec),
            offset_from,
        }
    }
}

/// Section properties including page setup and margins.
#[derive(Debug, Clone)]
pub struct SectionProperties {
    pub page_width: Length,
    pub page_height: Length,
    pub margin_top: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,
    pub margin_right: Length,
    /// Header distance from top
    pub header_distance: Length,
    /// Footer distance from bottom
    pub footer_distance: Length,
    pub gutter: Length,
    pub borders: Option<PageBorders>,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: Length::from_twips(12240),
            page_height: Length::from_twips(15840),
            margin_top: Length::from_twips(1440),
            margin_bottom: Length::from_twips(1440),
            margin_left: Length::from_twips(1440),
            margin_right: Length::from_twips(1440),
            header_distance: Length::from_twips(720),
            footer_distance: Length::from_twips(720),
            gutter: Length::ZERO,
            borders: None,
        }
    }
}

impl SectionProperties {
    /// Create A4 page size (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            page_width: Length::from_twips(11906),
            page_height: Length::from_twips(16838),
            ..Default::default()
        }
    }

    /// Create US Letter page size (8.5" x 11").
    pub fn letter() -> Self {
        Self::default()
    }

    /// Set all four margins to the same length.
    pub fn set_margins_all(&mut self, margin: Length) -> &mut Self {
        self.margin_top = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self.margin_right = margin;
        self
    }

    pub fn set_page_borders(&mut self, borders: PageBorders) -> &mut Self {
        self.borders = Some(borders);
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        let mut w = ElementWriter::new(xml);
        w.open("w:sectPr");
        w.page_size(self.page_width.twips(), self.page_height.twips())?;
        w.page_margins(
            [
                self.margin_top.twips(),
                self.margin_right.twips(),
                self.margin_bottom.twips(),
                self.margin_left.twips(),
            ],
            self.header_distance.twips(),
            self.footer_distance.twips(),
            self.gutter.twips(),
        )?;
        if let Some(borders) = &self.borders {
            let edges = [
                borders.top.as_ref().map(BorderSpec::as_edge),
                borders.left.as_ref().map(BorderSpec::as_edge),
                borders.bottom.as_ref().map(BorderSpec::as_edge),
                borders.right.as_ref().map(BorderSpec::as_edge),
            ];
            w.page_borders(
                borders.offset_from,
                [
                    edges[0].as_ref(),
                    edges[1].as_ref(),
                    edges[2].as_ref(),
                    edges[3].as_ref(),
                ],
            )?;
        }
        xml.push_str(r#"<w:cols w:space="720"/><w:docGrid w:linePitch="360"/></w:sectPr>"#);
        Ok(())
    }
}
