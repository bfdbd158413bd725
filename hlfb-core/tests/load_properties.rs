//! Properties of the duty-cycle → load mapping

use hlfb_core::sampler::decode_load;
use proptest::prelude::*;

const PERIOD_US: u32 = 1000;

/// round(2 × |active / 10 − 50|) for a 1000us period, in integers
fn expected_load(active_us: u32) -> u32 {
    let deviation = active_us.abs_diff(PERIOD_US / 2);
    let (whole, rest) = (deviation / 5, deviation % 5);
    if rest >= 3 {
        whole + 1
    } else {
        whole
    }
}

fn load(active_us: u32) -> u32 {
    decode_load(active_us, PERIOD_US - active_us, 100.0).unwrap()
}

#[test]
fn center_and_extremes() {
    assert_eq!(load(500), 0);
    assert_eq!(load(0), 100);
    assert_eq!(load(PERIOD_US), 100);
}

proptest! {
    #[test]
    fn identity_factor_is_linear(active in 0..=PERIOD_US) {
        prop_assert_eq!(load(active), expected_load(active));
    }

    #[test]
    fn symmetric_about_center(active in 0..=PERIOD_US) {
        prop_assert_eq!(load(active), load(PERIOD_US - active));
    }

    #[test]
    fn falls_toward_center(a in 0..=500u32, b in 0..=500u32) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(load(low) >= load(high));
    }

    #[test]
    fn bounded_for_factors_up_to_100(
        active in 0..=10_000u32,
        inactive in 0..=10_000u32,
        factor in 0.0f32..=100.0,
    ) {
        prop_assume!(active + inactive > 0);
        let load = decode_load(active, inactive, factor).unwrap();
        prop_assert!(load <= 100);
    }

    #[test]
    fn any_observed_period_decodes(
        active in 0..=u32::MAX,
        inactive in 0..=u32::MAX,
        factor in -1000.0f32..1000.0,
    ) {
        prop_assume!(active > 0 || inactive > 0);
        prop_assert!(decode_load(active, inactive, factor).is_some());
    }
}

#[test]
fn no_period_never_decodes() {
    assert_eq!(decode_load(0, 0, 100.0), None);
    assert_eq!(decode_load(0, 0, 0.0), None);
}
