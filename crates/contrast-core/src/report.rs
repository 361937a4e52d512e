//! End-to-end evaluation — the one call adapters actually make.
//!
//! Strict-parses a foreground/background pair, runs the full pipeline,
//! and hands back everything a presentation layer needs in one value.
//! The ratio is unrounded; formatting to two decimals belongs to
//! whoever renders it.

use crate::conformance::Conformance;
use crate::contrast::contrast_ratio;
use crate::rgb::{ParseColorError, Rgb};

/// The result of evaluating one foreground/background pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// The parsed foreground (text) color.
    pub fg: Rgb,
    /// The parsed background color.
    pub bg: Rgb,
    /// The unrounded contrast ratio, in `[1.0, 21.0]`.
    pub ratio: f64,
    /// Pass/fail against all four WCAG thresholds.
    pub conformance: Conformance,
}

/// Evaluate a foreground/background pair given as strict `#RRGGBB`
/// strings.
///
/// # Errors
///
/// Returns [`ParseColorError`] if either string fails the strict gate.
/// Foreground is checked first, so the error always names the first
/// offending input.
///
/// # Examples
///
/// ```
/// use contrast_core::evaluate_hex;
///
/// let eval = evaluate_hex("#000000", "#ffffff").unwrap();
/// assert!((eval.ratio - 21.0).abs() < 1e-9);
/// assert!(eval.conformance.passes_all());
/// ```
pub fn evaluate_hex(fg: &str, bg: &str) -> Result<Evaluation, ParseColorError> {
    let fg = Rgb::from_hex_strict(fg)?;
    let bg = Rgb::from_hex_strict(bg)?;
    let ratio = contrast_ratio(fg, bg);
    Ok(Evaluation {
        fg,
        bg,
        ratio,
        conformance: Conformance::evaluate(ratio),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
