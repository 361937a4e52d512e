//! Relative luminance per WCAG 2.1.
//!
//! The constants here are normative, taken straight from the WCAG 2.1
//! definition of relative luminance (§ "relative luminance"):
//!
//! - piecewise linearization threshold `0.03928`
//! - low-range divisor `12.92`
//! - gamma branch `((c + 0.055) / 1.055) ^ 2.4`
//! - channel weights `0.2126 / 0.7152 / 0.0722`
//!
//! None of them is tunable. The WCAG threshold differs from the sRGB
//! standard's own `0.04045` — conformance tooling must use the WCAG
//! value to reproduce reference ratios, so that is what this module
//! implements.

use crate::rgb::Rgb;

/// Linearize a single 8-bit sRGB channel (remove gamma), WCAG variant.
///
/// Returns a value in `[0.0, 1.0]`.
#[inline]
#[must_use]
pub fn linearize_channel(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`
///
/// Returns a value in `[0.0, 1.0]`: exactly `0.0` for black, `1.0`
/// (within float rounding) for white. Total over all [`Rgb`] values —
/// there is no failure mode.
///
/// # Examples
///
/// ```
/// use contrast_core::{relative_luminance, Rgb};
///
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = linearize_channel(color.r);
    let g_lin = linearize_channel(color.g);
    let b_lin = linearize_channel(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
