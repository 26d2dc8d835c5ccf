//! JSON documents written by the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Vector2;
use serde::Serialize;
use stereonet::prelude::{CircleTrace, Net, ProjectionKind, Scalar, Uncertain};

/// A named result with its one-sigma spread, in degrees. An unbounded spread
/// (undefined trend of a vertical result) serializes as `null`.
#[derive(Debug, Serialize)]
pub struct Valued {
    pub name: &'static str,
    pub value: f64,
    pub std_dev: f64,
}

impl Valued {
    pub fn degrees(name: &'static str, v: Uncertain<4>) -> Self {
        Self {
            name,
            value: v.nominal().to_degrees(),
            std_dev: v.std_dev().to_degrees(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnglesReport {
    pub mode: String,
    pub first: (f64, f64),
    pub second: (f64, f64),
    pub results: Vec<Valued>,
}

type Polyline = Vec<[f64; 2]>;

#[derive(Debug, Serialize)]
pub struct NetReport {
    pub kind: String,
    pub view: (f64, f64),
    pub interval: f64,
    pub primitive: Polyline,
    /// Each small circle is a list of one or two arcs.
    pub small_circles: Vec<Vec<Polyline>>,
    pub great_circles: Vec<Vec<Polyline>>,
}

fn polyline(points: &[Vector2<f64>]) -> Polyline {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn arcs(trace: &CircleTrace) -> Vec<Polyline> {
    trace.paths().map(polyline).collect()
}

impl NetReport {
    pub fn new(kind: ProjectionKind, view_trend: f64, view_plunge: f64, interval: f64, net: &Net) -> Self {
        Self {
            kind: kind.to_string(),
            view: (view_trend, view_plunge),
            interval,
            primitive: polyline(&net.primitive),
            small_circles: net.small_circles.iter().map(arcs).collect(),
            great_circles: net.great_circles.iter().map(arcs).collect(),
        }
    }
}

/// Pretty JSON to `out`, or to stdout.
pub fn emit<T: Serialize>(doc: &T, out: Option<&Path>) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote");
        }
        None => println!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use stereonet::prelude::{stereonet, View};
    use stereonet::StereoCfg;
    use tempfile::tempdir;

    #[test]
    fn net_report_written_to_file() {
        let net = stereonet(
            &View::default(),
            30f64.to_radians(),
            ProjectionKind::EqualArea,
            StereoCfg::default(),
        )
        .unwrap();
        let report = NetReport::new(ProjectionKind::EqualArea, 0.0, 90.0, 30.0, &net);
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("net.json");
        emit(&report, Some(&path)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["kind"], "equal-area");
        assert_eq!(parsed["small_circles"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["great_circles"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["primitive"].as_array().unwrap().len(), 361);
    }
}
