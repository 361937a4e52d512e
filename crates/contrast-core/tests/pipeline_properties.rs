use contrast_core::{Conformance, Rgb, contrast_ratio, relative_luminance};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn contrast_is_symmetric(a in rgb_strategy(), b in rgb_strategy()) {
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        prop_assert!((ab - ba).abs() < 1e-12, "asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_of_a_color_with_itself_is_one(c in rgb_strategy()) {
        let ratio = contrast_ratio(c, c);
        prop_assert!((ratio - 1.0).abs() < 1e-15, "self-contrast: {ratio}");
    }

    #[test]
    fn contrast_stays_in_wcag_range(a in rgb_strategy(), b in rgb_strategy()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0, "ratio below 1: {ratio}");
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio above 21: {ratio}");
    }

    #[test]
    fn luminance_stays_in_unit_interval(c in rgb_strategy()) {
        let lum = relative_luminance(c);
        prop_assert!((0.0..=1.0 + 1e-9).contains(&lum), "luminance out of range: {lum}");
    }

    #[test]
    fn luminance_grows_with_joint_channel_increase(c in rgb_strategy(), bump in 0u8..=255) {
        let brighter = Rgb::new(
            c.r.saturating_add(bump),
            c.g.saturating_add(bump),
            c.b.saturating_add(bump),
        );
        prop_assert!(
            relative_luminance(brighter) >= relative_luminance(c),
            "luminance decreased from {c} to {brighter}"
        );
    }

    #[test]
    fn display_form_parses_back_to_the_same_color(c in rgb_strategy()) {
        let round_tripped = Rgb::from_hex(&c.to_string()).expect("display form is valid hex");
        prop_assert_eq!(round_tripped, c);
    }

    #[test]
    fn uppercase_and_lowercase_hex_decode_identically(c in rgb_strategy()) {
        let lower = c.to_string();
        let upper = lower.to_uppercase();
        prop_assert_eq!(Rgb::from_hex(&lower).unwrap(), Rgb::from_hex(&upper).unwrap());
    }

    #[test]
    fn strict_gate_rejects_whatever_lacks_the_hash(c in rgb_strategy()) {
        let bare = format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b);
        prop_assert!(Rgb::from_hex_strict(&bare).is_err());
        prop_assert!(Rgb::from_hex_strict(&c.to_string()).is_ok());
    }

    #[test]
    fn conformance_verdicts_are_monotone_in_the_ratio(ratio in 1.0f64..21.0) {
        // A report at some ratio never passes a check that a higher
        // ratio fails.
        let lower = Conformance::evaluate(ratio);
        let higher = Conformance::evaluate(ratio + 0.5);
        prop_assert!(!lower.aa_normal || higher.aa_normal);
        prop_assert!(!lower.aa_large || higher.aa_large);
        prop_assert!(!lower.aaa_normal || higher.aaa_normal);
        prop_assert!(!lower.aaa_large || higher.aaa_large);
    }
}
