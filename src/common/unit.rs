//! Unit conversion utilities.
//!
//! WordprocessingML mixes several length units: page geometry and indents are
//! in twips (1/20 pt), font sizes in half-points, border widths in eighths of a
//! point and border spacing in whole points. Everything is converted through
//! EMUs so a length keeps one canonical value.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_TWIP: i64 = 635;

#[inline]
pub fn cm_to_emu_f64(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[inline]
pub fn emu_to_twip_i64(emu: i64) -> i64 {
    (emu as f64 / EMUS_PER_TWIP as f64).round() as i64
}

#[inline]
pub fn twip_to_emu_i64(twips: i64) -> i64 {
    twips.saturating_mul(EMUS_PER_TWIP)
}

/// Convert a point size to the half-point value used by `w:sz`.
#[inline]
pub fn pt_to_half_points(pt: f64) -> u32 {
    (pt * 2.0).round().max(0.0) as u32
}
