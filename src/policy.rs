//! Formatting policy: the typography and page constants a build applies.
//!
//! A [`FormatPolicy`] is a plain value handed to
//! [`DocumentBuilder::new`](crate::builder::DocumentBuilder::new). The defaults
//! reproduce the house layout (Arial 12pt, 1.5cm margins, a double page
//! border and a 0.75cm / -0.5cm hanging indent for list lines). Policies can be
//! loaded from YAML; missing keys fall back to the defaults.
//!
//! ```
//! use rtlscribe::policy::FormatPolicy;
//!
//! let policy = FormatPolicy::from_yaml_str("font_family: Vazirmatn\nfont_size_pt: 13\n")?;
//! assert_eq!(policy.font_family, "Vazirmatn");
//! assert_eq!(policy.font_half_points(), 26);
//! assert_eq!(policy.margin().twips(), 850);
//! # Ok::<(), rtlscribe::Error>(())
//! ```

use crate::common::unit::pt_to_half_points;
use crate::common::{Error, Length, Result};
use crate::ooxml::docx::format::{BorderOffset, BorderStyle};
use serde::{Deserialize, Serialize};

/// Largest border width Word honours, in eighths of a point.
const MAX_BORDER_SIZE: u32 = 96;
/// Largest page border spacing Word honours, in points.
const MAX_BORDER_SPACE: u32 = 31;

/// Page size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter, 8.5" x 11"
    #[default]
    Letter,
    /// A4, 210mm x 297mm
    A4,
}

/// Page border applied to all four edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderPolicy {
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub size: u32,
    /// Distance from the offset origin in points
    pub space: u32,
    pub color: String,
    pub offset_from: BorderOffset,
}

impl Default for BorderPolicy {
    fn default() -> Self {
        Self {
            style: BorderStyle::Double,
            size: 12,
            space: 12,
            color: "auto".to_string(),
            offset_from: BorderOffset::Page,
        }
    }
}

/// Typography and page layout for built documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatPolicy {
    /// Font family used on every script slot
    pub font_family: String,
    pub font_size_pt: f64,
    /// All four page margins
    pub margin_cm: f64,
    /// Right indent of list lines
    pub list_right_indent_cm: f64,
    /// First-line indent of list lines; negative hangs the marker
    pub list_first_line_indent_cm: f64,
    pub border: BorderPolicy,
    pub page: PageSize,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size_pt: 12.0,
            margin_cm: 1.5,
            list_right_indent_cm: 0.75,
            list_first_line_indent_cm: -0.5,
            border: BorderPolicy::default(),
            page: PageSize::Letter,
        }
    }
}

impl FormatPolicy {
    /// Parse a policy from YAML and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let policy: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse policy YAML: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize policy to YAML: {}", e)))
    }

    /// Reject policies that would produce an unusable document.
    pub fn validate(&self) -> Result<()> {
        if self.font_family.trim().is_empty() {
            return Err(Error::Config("font_family must not be empty".to_string()));
        }
        // Sizes are written in whole half-points; anything that rounds to zero is lost.
        if !(self.font_size_pt.is_finite() && self.font_half_points() >= 1) {
            return Err(Error::Config(format!(
                "font_size_pt must be at least 0.5pt, got {}",
                self.font_size_pt
            )));
        }
        for (name, value) in [
            ("margin_cm", self.margin_cm),
            ("list_right_indent_cm", self.list_right_indent_cm),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!("{name} must not be negative, got {value}")));
            }
        }
        if !self.list_first_line_indent_cm.is_finite() {
            return Err(Error::Config("list_first_line_indent_cm must be finite".to_string()));
        }
        if self.border.color.trim().is_empty() {
            return Err(Error::Config("border color must not be empty".to_string()));
        }
        if self.border.size > MAX_BORDER_SIZE {
            return Err(Error::Config(format!(
                "border size must be at most {MAX_BORDER_SIZE} eighths of a point, got {}",
                self.border.size
            )));
        }
        if self.border.space > MAX_BORDER_SPACE {
            return Err(Error::Config(format!(
                "border space must be at most {MAX_BORDER_SPACE}pt, got {}",
                self.border.space
            )));
        }
        Ok(())
    }

    /// Font size in half-points, as `w:sz` expects.
    #[inline]
    pub fn font_half_points(&self) -> u32 {
        pt_to_half_points(self.font_size_pt)
    }

    #[inline]
    pub fn margin(&self) -> Length {
        Length::from_cm(self.margin_cm)
    }

    #[inline]
    pub fn list_right_indent(&self) -> Length {
        Length::from_cm(self.list_right_indent_cm)
    }

    #[inline]
    pub fn list_first_line_indent(&self) -> Length {
        Length::from_cm(self.list_first_line_indent_cm)
    }
}
