use std::fmt;
use std::ops::Neg;

use crate::common::unit::{
    EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_PT, cm_to_emu_f64, emu_to_twip_i64, pt_to_emu_f64,
};

/// Length measurement with units.
///
/// Stores the value in EMUs (English Metric Units), the native unit of Office
/// Open XML, and converts to whatever unit a particular attribute expects.
///
/// # Examples
///
/// ```rust
/// use rtlscribe::common::Length;
///
/// let margin = Length::from_cm(1.5);
/// assert_eq!(margin.twips(), 850);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// Value in EMUs
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length { emus: 0 };

    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: cm_to_emu_f64(cm),
        }
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self {
            emus: pt_to_emu_f64(pt),
        }
    }

    /// Create a length from twips (1/1440 inch).
    #[inline]
    pub fn from_twips(twips: i64) -> Self {
        Self {
            emus: crate::common::unit::twip_to_emu_i64(twips),
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Value in twips, rounded to the nearest whole twip.
    #[inline]
    pub fn twips(&self) -> i64 {
        emu_to_twip_i64(self.emus)
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to points.
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.emus < 0
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Self::Output {
        Length::from_emus(-self.emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}cm", self.cm())
    }
}
