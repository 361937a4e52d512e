//! AA/AAA conformance classification for a contrast ratio.
//!
//! Thresholds are fixed by WCAG 2.1 §1.4.3 (AA) and §1.4.6 (AAA):
//!
//! | Level | Text size | Minimum ratio |
//! |-------|-----------|---------------|
//! | AA    | normal    | 4.5           |
//! | AA    | large     | 3.0           |
//! | AAA   | normal    | 7.0           |
//! | AAA   | large     | 4.5           |
//!
//! Every verdict is an inclusive comparison — a ratio of exactly 4.5
//! passes AA normal.

use std::fmt;

/// Minimum ratio for AA conformance, normal-size text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA conformance, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA conformance, normal-size text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA conformance, large text.
pub const AAA_LARGE: f64 = 4.5;

/// A WCAG conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// AA — the common legal/contractual baseline.
    Aa,
    /// AAA — the stricter enhanced-contrast level.
    Aaa,
}

impl Level {
    /// The minimum contrast ratio this level demands for the given
    /// text size.
    #[must_use]
    pub const fn threshold(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Self::Aa, false) => AA_NORMAL,
            (Self::Aa, true) => AA_LARGE,
            (Self::Aaa, false) => AAA_NORMAL,
            (Self::Aaa, true) => AAA_LARGE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// Four independent pass/fail verdicts for one contrast ratio.
///
/// The four booleans are the canonical report; [`Conformance::passes`]
/// is a derived view for callers that care about a single level/size
/// pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conformance {
    /// Ratio >= 4.5 — AA, normal text.
    pub aa_normal: bool,
    /// Ratio >= 3.0 — AA, large text.
    pub aa_large: bool,
    /// Ratio >= 7.0 — AAA, normal text.
    pub aaa_normal: bool,
    /// Ratio >= 4.5 — AAA, large text.
    pub aaa_large: bool,
}

impl Conformance {
    /// Classify a contrast ratio against all four thresholds.
    ///
    /// Total over any finite ratio; boundaries are inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrast_core::Conformance;
    ///
    /// let report = Conformance::evaluate(4.5);
    /// assert!(report.aa_normal);
    /// assert!(!report.aaa_normal);
    /// ```
    #[must_use]
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }

    /// The verdict for one level/size pairing.
    #[must_use]
    pub const fn passes(self, level: Level, large_text: bool) -> bool {
        match (level, large_text) {
            (Level::Aa, false) => self.aa_normal,
            (Level::Aa, true) => self.aa_large,
            (Level::Aaa, false) => self.aaa_normal,
            (Level::Aaa, true) => self.aaa_large,
        }
    }

    /// Whether all four verdicts pass.
    #[must_use]
    pub const fn passes_all(self) -> bool {
        self.aa_normal && self.aa_large && self.aaa_normal && self.aaa_large
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_4_5_passes_both_four_five_thresholds() {
        let report = Conformance::evaluate(4.5);
        assert!(report.aa_normal);
        assert!(report.aa_large);
        assert!(!report.aaa_normal);
        assert!(report.aaa_large);
    }

    #[test]
    fn boundary_3_0_passes_only_aa_large() {
        let report = Conformance::evaluate(3.0);
        assert!(!report.aa_normal);
        assert!(report.aa_large);
        assert!(!report.aaa_normal);
        assert!(!report.aaa_large);
    }

    #[test]
    fn boundary_7_0_passes_everything() {
        let report = Conformance::evaluate(7.0);
        assert!(report.passes_all());
    }

    #[test]
    fn minimum_ratio_passes_nothing() {
        let report = Conformance::evaluate(1.0);
        assert!(!report.aa_normal);
        assert!(!report.aa_large);
        assert!(!report.aaa_normal);
        assert!(!report.aaa_large);
    }

    #[test]
    fn just_under_a_threshold_fails_it() {
        let report = Conformance::evaluate(4.499_999);
        assert!(!report.aa_normal);
        assert!(report.aa_large);
    }

    #[test]
    fn passes_view_agrees_with_the_four_booleans() {
        let report = Conformance::evaluate(5.0);
        assert_eq!(report.passes(Level::Aa, false), report.aa_normal);
        assert_eq!(report.passes(Level::Aa, true), report.aa_large);
        assert_eq!(report.passes(Level::Aaa, false), report.aaa_normal);
        assert_eq!(report.passes(Level::Aaa, true), report.aaa_large);
    }

    #[test]
    fn level_thresholds_match_the_table() {
        assert!((Level::Aa.threshold(false) - 4.5).abs() < f64::EPSILON);
        assert!((Level::Aa.threshold(true) - 3.0).abs() < f64::EPSILON);
        assert!((Level::Aaa.threshold(false) - 7.0).abs() < f64::EPSILON);
        assert!((Level::Aaa.threshold(true) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn level_display_names() {
        assert_eq!(Level::Aa.to_string(), "AA");
        assert_eq!(Level::Aaa.to_string(), "AAA");
    }
}
