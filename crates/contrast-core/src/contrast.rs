//! WCAG 2.1 contrast ratio between two colors.

use crate::luminance::relative_luminance;
use crate::rgb::Rgb;

/// Compute the contrast ratio from two already-computed luminances.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)` — the 0.05 flare term is
/// part of the WCAG formula, not a fudge factor.
#[inline]
#[must_use]
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]`: identical colors give exactly
/// `1.0`, black against white gives `21.0`. Symmetric — argument order
/// never matters. The result is unrounded; rounding to two decimals
/// for display is the caller's concern.
///
/// # Examples
///
/// ```
/// use contrast_core::{contrast_ratio, Rgb};
///
/// let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
