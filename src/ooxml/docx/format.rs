//! Shared formatting types for DOCX.

use serde::{Deserialize, Serialize};

/// Line spacing options for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Single line spacing
    Single,
    /// 1.5 line spacing
    OneAndHalf,
    /// Double line spacing
    Double,
    /// Multiple line spacing (e.g., 1.15)
    Multiple(f64),
    /// Exact spacing in points
    Exact(f64),
    /// At least spacing in points
    AtLeast(f64),
}

impl LineSpacing {
    /// The `(w:line, w:lineRule)` pair for this spacing.
    pub(crate) fn line_and_rule(&self) -> (u32, &'static str) {
        match *self {
            Self::Single => (240, "auto"),
            Self::OneAndHalf => (360, "auto"),
            Self::Double => (480, "auto"),
            Self::Multiple(factor) => ((factor * 240.0).round() as u32, "auto"),
            Self::Exact(points) => ((points * 20.0).round() as u32, "exact"),
            Self::AtLeast(points) => ((points * 20.0).round() as u32, "atLeast"),
        }
    }
}

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// Line styles for page borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
}

impl BorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

/// What page border spacing is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderOffset {
    /// Distance from the edge of the page
    Page,
    /// Distance from the text margin
    Text,
}

impl BorderOffset {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Text => "text",
        }
    }
}
