use crate::probability::{
    error::RangeError,
    range::{ProbabilityRange, fuzzy_equals},
};

fn range(low: f64, high: f64) -> ProbabilityRange {
    ProbabilityRange::closed(low, high).expect("valid range")
}

#[test]
fn closed_rejects_inverted_or_non_finite_bounds() {
    assert!(matches!(
        ProbabilityRange::closed(0.6, 0.4),
        Err(RangeError::InvalidBounds { .. })
    ));
    assert!(ProbabilityRange::closed(f64::NAN, 0.4).is_err());
    assert!(ProbabilityRange::closed(0.1, f64::INFINITY).is_err());
    assert!(ProbabilityRange::closed(0.3, 0.3).is_ok());
}

#[test]
fn around_clamps_to_the_unit_interval() {
    let low_edge = ProbabilityRange::around(0.05, 0.15).expect("valid");
    assert_eq!(low_edge.low(), 0.0);
    assert!((low_edge.high() - 0.2).abs() < 1e-12);

    let high_edge = ProbabilityRange::around(0.95, 0.15).expect("valid");
    assert!((high_edge.low() - 0.8).abs() < 1e-12);
    assert_eq!(high_edge.high(), 1.0);
}

#[test]
fn containment_and_enclosure() {
    let outer = range(0.2, 0.8);

    assert!(outer.contains(0.2));
    assert!(outer.contains(0.8));
    assert!(!outer.contains(0.81));

    assert!(outer.encloses(&range(0.3, 0.8)));
    assert!(outer.encloses(&outer));
    assert!(!outer.encloses(&range(0.1, 0.5)));

    assert!(outer.is_within_unit());
    assert!(!range(-0.1, 0.5).is_within_unit());
    assert!((outer.width() - 0.6).abs() < 1e-12);
}

#[test]
fn intersection_keeps_the_overlap() {
    let a = range(0.2, 0.6);
    let b = range(0.5, 0.9);
    assert_eq!(a.intersection(&b), Ok(range(0.5, 0.6)));

    let touching = range(0.6, 0.7);
    assert_eq!(a.intersection(&touching), Ok(range(0.6, 0.6)));

    let apart = range(0.7, 0.9);
    assert!(matches!(
        a.intersection(&apart),
        Err(RangeError::Disconnected { .. })
    ));
}

#[test]
fn fuzzy_equality_uses_absolute_tolerance() {
    assert!(fuzzy_equals(0.45, 0.4500000001, 1e-6));
    assert!(!fuzzy_equals(0.45, 0.46, 1e-6));
    assert!(fuzzy_equals(1.0, 1.0, 0.0));
}

#[test]
fn display_shows_closed_bounds() {
    assert_eq!(range(0.25, 0.5).to_string(), "[0.25, 0.5]");
}
