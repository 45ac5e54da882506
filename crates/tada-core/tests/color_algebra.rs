//! Color algebra properties across channel types and ranges.

use approx::assert_relative_eq;
use tada_core::prelude::*;

type C = Color<Normal, f64>;
type C255 = Color<Range255, f32>;

// ============================================================================
// Ordering
// ============================================================================

fn grid() -> Vec<C> {
    let vals = [-1.0, 0.0, 0.5, 2.0];
    let mut out = Vec::new();
    for &a in &vals {
        for &b in &vals {
            for &c in &vals {
                out.push(C::new(a, b, c));
            }
        }
    }
    out
}

#[test]
fn test_compare_is_antisymmetric_and_reflexive() {
    let g = grid();
    for x in &g {
        assert_eq!(x.compare(x), 0.0);
        for y in &g {
            assert_eq!(x.compare(y), -y.compare(x));
        }
    }
}

#[test]
fn test_compare_is_transitive_over_grid() {
    let g = grid();
    for x in &g {
        for y in &g {
            for z in g.iter().step_by(7) {
                if x.compare(y) < 0.0 && y.compare(z) < 0.0 {
                    assert!(x.compare(z) < 0.0);
                }
            }
        }
    }
}

#[test]
fn test_relations_agree_with_partial_ord() {
    let g = grid();
    for x in g.iter().step_by(5) {
        for y in g.iter().step_by(3) {
            assert_eq!(x.compare_with(y, Relation::Lt), x < y);
            assert_eq!(x.compare_with(y, Relation::Le), x <= y);
            assert_eq!(x.compare_with(y, Relation::Gt), x > y);
            assert_eq!(x.compare_with(y, Relation::Ge), x >= y);
            assert_eq!(x.compare_with(y, Relation::Eq), x == y);
            assert_eq!(x.compare_with(y, Relation::Ne), x != y);
        }
    }
}

// ============================================================================
// Distance
// ============================================================================

#[test]
fn test_distance_properties() {
    let g = grid();
    for x in g.iter().step_by(3) {
        assert_eq!(x.distance2(x), 0.0);
        assert_eq!(x.distance(x), 0.0);
        for y in g.iter().step_by(4) {
            assert!(x.distance2(y) >= 0.0);
            assert_eq!(x.distance(y), y.distance(x));
            assert_relative_eq!(x.distance(y).powi(2), x.distance2(y), max_relative = 1e-12);
        }
    }
}

// ============================================================================
// Host numeric semantics
// ============================================================================

#[test]
fn test_division_is_true_division() {
    let a = C255::new(1.0, 3.0, -3.0);
    let b = C255::new(2.0, 2.0, 2.0);
    assert_eq!(a / b, C255::new(0.5, 1.5, -1.5));
}

#[test]
fn test_modulo_sign_follows_divisor() {
    let a = C255::new(-1.0, 1.0, -4.0);
    let b = C255::new(255.0, -255.0, 3.0);
    assert_eq!(a % b, C255::new(254.0, -254.0, 2.0));
}

#[test]
fn test_rounding_is_bankers() {
    let c = C255::new(126.5, 127.5, 128.5);
    assert_eq!(c.round(0), C255::new(126.0, 128.0, 128.0));
}

#[test]
fn test_rounding_uses_exact_decimal_value() {
    let c = C::new(0.0005, 0.0025, 0.0055);
    assert_eq!(c.round(3), C::new(0.001, 0.003, 0.005));
    assert_eq!(c.round(i32::MIN), C::zero());
    assert_eq!(C::splat(1.7).round(30), C::splat(1.7));
}

#[test]
fn test_power_matches_platform_pow() {
    let base = C::new(1.1, 3.3, -2.0);
    let exp = C::new(100.0, 37.0, 3.0);
    let got = base.pow(exp);
    assert_eq!(got[0], 13780.61233982238);
    assert_eq!(got[1], 3.3f64.powf(37.0));
    assert_eq!(got[2], -8.0);
}

#[test]
fn test_invert_is_an_involution() {
    for c in grid() {
        assert_eq!(c.invert().invert(), c);
    }
    let c = C255::new(0.0, 100.0, 255.0);
    assert_eq!(c.invert(), C255::new(255.0, 155.0, 0.0));
}

// ============================================================================
// Codecs
// ============================================================================

#[test]
fn test_hex_roundtrip_at_range_boundaries() {
    for hex in [0x000000, 0xFFFFFF, 0x808080] {
        assert_eq!(C::from_hex(hex).to_hex(), hex);
        assert_eq!(C255::from_hex(hex).to_hex(), hex);
        assert_eq!(Color::<Range256, f32>::from_hex(hex).to_hex(), hex);
    }
}

#[test]
fn test_hex_quantizes_out_of_range() {
    assert_eq!(C::new(1.5, -0.5, 0.5).to_hex(), 0xFF0080);
}

#[test]
fn test_text_roundtrip_through_every_range() {
    let n: C = "orange".parse().unwrap();
    let r: C255 = "orange".parse().unwrap();
    assert_eq!(n.to_hex(), 0xFFA500);
    assert_eq!(r.to_array(), [255.0, 165.0, 0.0]);
    assert_eq!(r.to_string(), "orange");
    assert_eq!(n.to_string(), "orange");
}

#[test]
fn test_text_parse_failure_produces_nothing() {
    let parsed: Result<C255> = "(1, 2".parse();
    let err = parsed.unwrap_err();
    assert_eq!(err, Error::parse("(1, 2"));
}

#[cfg(feature = "f16")]
#[test]
fn test_half_channels_follow_the_same_rules() {
    use half::f16;
    type H = Color<Normal, f16>;
    let a = H::from_f64_array([-7.0, 2.5, 0.5]);
    let b = H::from_f64_array([3.0, 1.0, 0.25]);
    assert_eq!((a % b).to_f64_array(), [2.0, 0.5, 0.0]);
    assert_eq!(a.round(0).to_f64_array(), [-7.0, 2.0, 0.0]);
}
