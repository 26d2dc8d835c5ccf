//! Worked example: relationships between field measurements with uncertainty.
//!
//! Purpose
//! - Show the degree → radian boundary, `Uncertain<4>` inputs, and the four
//!   `Relation`s on a bedding/cleavage pair and two apparent dips.
//!
//! Run with `cargo run -p stereonet --example field_angles`.

use stereonet::prelude::*;

fn deg_pair(a: (f64, f64), sigma: (f64, f64)) -> [(f64, f64); 2] {
    [
        (a.0.to_radians(), sigma.0.to_radians()),
        (a.1.to_radians(), sigma.1.to_radians()),
    ]
}

fn show(label: &str, (v1, v2): (Uncertain<4>, Uncertain<4>)) {
    println!(
        "{label:<28} {:>7.2} ± {:<5.2} {:>7.2} ± {:<5.2}",
        v1.value().to_degrees(),
        v1.std_dev().to_degrees(),
        v2.value().to_degrees(),
        v2.std_dev().to_degrees()
    );
}

fn main() -> Result<(), StereoError> {
    // bedding 030/40 and cleavage 200/75, ±2° on every reading
    let [s1, d1] = deg_pair((30.0, 40.0), (2.0, 2.0));
    let [s2, d2] = deg_pair((200.0, 75.0), (2.0, 2.0));
    let [a, b, c, d] = Uncertain::<4>::independent([s1, d1, s2, d2]);
    show("angle between planes", angles((a, b), (c, d), Relation::PlaneAngle)?);
    show("intersection (trend/plunge)", angles((a, b), (c, d), Relation::Intersection)?);

    // two apparent dips measured on quarry faces
    let [t1, p1] = deg_pair((110.0, 28.0), (3.0, 1.0));
    let [t2, p2] = deg_pair((175.0, 20.0), (3.0, 1.0));
    let [a, b, c, d] = Uncertain::<4>::independent([t1, p1, t2, p2]);
    show("angle between lines", angles((a, b), (c, d), Relation::LineAngle)?);
    show("best-fit plane (strike/dip)", angles((a, b), (c, d), Relation::BestFitPlane)?);

    let (x, y) = project_line(a, b, ProjectionKind::EqualArea);
    println!(
        "first apparent dip on an equal-area net: ({:.3} ± {:.3}, {:.3} ± {:.3})",
        x.value(),
        x.std_dev(),
        y.value(),
        y.std_dev()
    );
    Ok(())
}
