use super::*;
use crate::angle::{EAST, TWO_PI};
use crate::orient::rotate;
use crate::uncertain::Uncertain;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

type U4 = Uncertain<4>;

fn deg(v: f64) -> f64 {
    v.to_radians()
}

fn ang_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TWO_PI);
    d.min(TWO_PI - d)
}

#[test]
fn angle_between_horizontal_and_inclined_lines() {
    let (a, s) = angles((0.0, 0.0), (0.0, deg(45.0)), Relation::LineAngle).unwrap();
    assert!((a - deg(45.0)).abs() < 1e-12);
    assert!((s - deg(135.0)).abs() < 1e-12);
    let (a, s) = angles((0.0, 0.0), (EAST, 0.0), Relation::LineAngle).unwrap();
    assert!((a - EAST).abs() < 1e-12 && (s - EAST).abs() < 1e-12);
}

#[test]
fn identical_lines_meet_at_zero_without_nan() {
    let (a, s) = angles((1.0, 0.3), (1.0, 0.3), Relation::LineAngle).unwrap();
    assert!(a.abs() < 1e-7);
    assert!((s - PI).abs() < 1e-7);
}

#[test]
fn angle_between_planes_uses_poles() {
    let (a, s) = angles((0.0, deg(30.0)), (0.0, deg(60.0)), Relation::PlaneAngle).unwrap();
    assert!((a - deg(30.0)).abs() < 1e-12);
    assert!((a + s - PI).abs() < 1e-12);
}

#[test]
fn intersection_of_vertical_and_dipping_planes() {
    // vertical N-S plane and a plane striking E dipping 45° S
    let (t, p) = angles((0.0, EAST), (EAST, deg(45.0)), Relation::Intersection).unwrap();
    assert!(ang_diff(t, PI) < 1e-12, "trend {t}");
    assert!((p - deg(45.0)).abs() < 1e-12);
    // argument order does not change the lower-hemisphere answer
    let (t2, p2) = angles((EAST, deg(45.0)), (0.0, EAST), Relation::Intersection).unwrap();
    assert!(ang_diff(t, t2) < 1e-12 && (p - p2).abs() < 1e-12);
}

#[test]
fn best_fit_plane_from_strike_and_dip_lines() {
    let strike = deg(30.0);
    let dip = deg(40.0);
    let (s, d) = angles((strike, 0.0), (strike + EAST, dip), Relation::BestFitPlane).unwrap();
    assert!(ang_diff(s, strike) < 1e-12, "strike {s}");
    assert!((d - dip).abs() < 1e-12);
}

#[test]
fn best_fit_plane_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let cfg = StereoCfg::default();
    for _ in 0..50 {
        let plane = Plane::new(rng.gen_range(0.0..TWO_PI), rng.gen_range(0.05..1.5));
        let pole = plane.pole();
        let strike_line = Line::new(plane.strike, 0.0);
        // two distinct lines in the plane, obtained by turning the strike line about the pole
        let r1 = rotate(pole, rng.gen_range(0.2..1.4), strike_line);
        let r2 = rotate(pole, rng.gen_range(1.7..2.9), strike_line);
        let fit = plane_from_apparent_dips(&r1, &r2, cfg).unwrap();
        assert!(ang_diff(fit.strike, plane.strike) < 1e-9);
        assert!((fit.dip - plane.dip).abs() < 1e-9);
    }
}

#[test]
fn parallel_inputs_are_rejected() {
    for rel in [Relation::Intersection, Relation::BestFitPlane] {
        let err = angles((0.4, 0.7), (0.4, 0.7), rel).unwrap_err();
        assert!(matches!(err, StereoError::DegenerateInput { .. }), "{rel}");
    }
}

#[test]
fn parallel_check_ignores_uncertainty() {
    let [t1, p1, t2, p2] = U4::independent([(0.4, 0.01), (0.7, 0.02), (0.4, 0.05), (0.7, 0.0)]);
    let err = angles((t1, p1), (t2, p2), Relation::Intersection).unwrap_err();
    assert!(matches!(err, StereoError::DegenerateInput { .. }));
}

#[test]
fn near_parallel_planes_hit_norm_guard() {
    let err = angles((0.0, 0.5), (1e-17, 0.5), Relation::Intersection).unwrap_err();
    assert!(matches!(err, StereoError::DegenerateInput { .. }));
    // same plane written with strike 0 and strike 2π
    let err = angles((0.0, 0.5), (TWO_PI, 0.5), Relation::Intersection).unwrap_err();
    assert!(matches!(err, StereoError::DegenerateInput { .. }));
}

#[test]
fn relation_flags() {
    assert_eq!("a".parse::<Relation>().unwrap(), Relation::BestFitPlane);
    assert_eq!("intersection".parse::<Relation>().unwrap(), Relation::Intersection);
    assert_eq!(Relation::PlaneAngle.input_kind(), Kind::Pole);
    assert!(matches!(
        "x".parse::<Relation>(),
        Err(StereoError::InvalidMode { .. })
    ));
}

#[test]
fn zero_uncertainty_in_gives_zero_out() {
    let [a, b, c, d] = U4::independent([(0.3, 0.0), (0.2, 0.0), (2.0, 0.0), (0.9, 0.0)]);
    for rel in [
        Relation::LineAngle,
        Relation::PlaneAngle,
        Relation::Intersection,
        Relation::BestFitPlane,
    ] {
        let (x, y) = angles((a, b), (c, d), rel).unwrap();
        let (xn, yn) = angles((0.3, 0.2), (2.0, 0.9), rel).unwrap();
        assert_eq!(x.std_dev(), 0.0, "{rel}");
        assert_eq!(y.std_dev(), 0.0, "{rel}");
        assert!((x.value() - xn).abs() < 1e-12, "{rel}");
        assert!((y.value() - yn).abs() < 1e-12, "{rel}");
    }
}

#[test]
fn propagated_sensitivity_matches_finite_difference() {
    let x0 = [0.3, 0.2, 2.0, 0.9];
    let sigma = 1.0;
    let h = 1e-6;
    for rel in [
        Relation::LineAngle,
        Relation::PlaneAngle,
        Relation::Intersection,
        Relation::BestFitPlane,
    ] {
        let u = U4::independent([(x0[0], sigma), (x0[1], sigma), (x0[2], sigma), (x0[3], sigma)]);
        let (r1, r2) = angles((u[0], u[1]), (u[2], u[3]), rel).unwrap();
        for i in 0..4 {
            let eval = |delta: f64| {
                let mut x = x0;
                x[i] += delta;
                angles((x[0], x[1]), (x[2], x[3]), rel).unwrap()
            };
            let (hi, lo) = (eval(h), eval(-h));
            let fd1 = (hi.0 - lo.0) / (2.0 * h);
            let fd2 = (hi.1 - lo.1) / (2.0 * h);
            assert!((r1.sensitivity()[i] - fd1).abs() < 1e-6, "{rel} d0/dx{i}");
            assert!((r2.sensitivity()[i] - fd2).abs() < 1e-6, "{rel} d1/dx{i}");
        }
    }
}

#[test]
fn supplement_is_perfectly_anticorrelated() {
    let [a, b, c, d] = U4::independent([(0.3, 0.01), (0.2, 0.02), (2.0, 0.01), (0.9, 0.03)]);
    let (x, y) = angles((a, b), (c, d), Relation::LineAngle).unwrap();
    assert!(x.std_dev() > 0.0);
    assert!((x.std_dev() - y.std_dev()).abs() < 1e-15);
    assert!((x.covariance(&y) + x.std_dev() * y.std_dev()).abs() < 1e-15);
}

#[test]
fn vertical_planes_meet_in_vertical_line_with_bounded_plunge_spread() {
    let [a, b, c, d] = U4::independent([(0.0, 0.01), (EAST, 0.01), (1.0, 0.01), (EAST, 0.01)]);
    let (trend, plunge) = angles((a, b), (c, d), Relation::Intersection).unwrap();
    assert!((plunge.value() - EAST).abs() < 1e-9);
    assert!(plunge.std_dev() < 1e-9, "plunge spread {}", plunge.std_dev());
    // the trend of a vertical line is undefined
    assert!(!trend.std_dev().is_finite());
}

#[test]
fn horizontal_apparent_dips_give_horizontal_plane_with_bounded_dip_spread() {
    let [a, b, c, d] = U4::independent([(0.2, 0.01), (0.0, 0.01), (1.4, 0.01), (0.0, 0.01)]);
    let (strike, dip) = angles((a, b), (c, d), Relation::BestFitPlane).unwrap();
    assert!(dip.value().abs() < 1e-12);
    assert!(dip.std_dev() < 1e-9, "dip spread {}", dip.std_dev());
    assert!(!strike.std_dev().is_finite());
}

#[test]
fn coincident_directions_have_no_first_order_spread() {
    // two vertical lines with different nominal trends
    let [a, b, c, d] = U4::independent([(0.0, 0.01), (EAST, 0.01), (1.0, 0.01), (EAST, 0.01)]);
    let (ang, sup) = angles((a, b), (c, d), Relation::LineAngle).unwrap();
    assert!(ang.value() < 1e-7);
    assert_eq!(ang.std_dev(), 0.0);
    assert_eq!(sup.std_dev(), 0.0);
    // identical lines and identical planes agree
    let [a, b, c, d] = U4::independent([(1.0, 0.01), (0.3, 0.01), (1.0, 0.01), (0.3, 0.01)]);
    let (lines, _) = angles((a, b), (c, d), Relation::LineAngle).unwrap();
    let (planes, _) = angles((a, b), (c, d), Relation::PlaneAngle).unwrap();
    assert_eq!(lines.std_dev(), 0.0);
    assert_eq!(planes.std_dev(), 0.0);
}

proptest! {
    #[test]
    fn line_angle_is_symmetric(
        t1 in 0.0..TWO_PI, p1 in -EAST..EAST,
        t2 in 0.0..TWO_PI, p2 in -EAST..EAST
    ) {
        let ab = angles((t1, p1), (t2, p2), Relation::LineAngle).unwrap();
        let ba = angles((t2, p2), (t1, p1), Relation::LineAngle).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!((ab.0 + ab.1 - PI).abs() < 1e-12);
        prop_assert!((0.0..=PI).contains(&ab.0));
    }

    #[test]
    fn intersection_lies_in_both_planes(
        s1 in 0.0..TWO_PI, d1 in 0.05f64..1.5,
        s2 in 0.0..TWO_PI, d2 in 0.05f64..1.5
    ) {
        let a = Plane::new(s1, d1);
        let b = Plane::new(s2, d2);
        if let Ok(l) = intersection(&a, &b, StereoCfg::default()) {
            let v = l.dir_cos();
            prop_assert!(l.plunge >= -1e-12);
            prop_assert!(v.dot(&a.dir_cos()).abs() < 1e-9);
            prop_assert!(v.dot(&b.dir_cos()).abs() < 1e-9);
        }
    }
}
