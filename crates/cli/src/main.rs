//! Command-line front end for the `stereonet` crate.
//!
//! Takes degrees (the core only accepts radians), evaluates one request and
//! prints JSON for a plotting layer. Logs go to stderr.

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stereonet::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

use output::{emit, AnglesReport, NetReport, Valued};

#[derive(Parser)]
#[command(name = "stereonet-cli")]
#[command(about = "Orientation angles and stereonet traces as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Angle between lines/planes, intersection, or plane from two apparent dips
    Angles {
        /// l (lines), p (planes), i (intersection), a (apparent dips)
        #[arg(long)]
        mode: Relation,
        /// First orientation "trend,plunge" or "strike,dip" in degrees
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        first: (f64, f64),
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        second: (f64, f64),
        /// One-sigma uncertainties of the first orientation, degrees
        #[arg(long, value_parser = parse_pair, default_value = "0,0")]
        sigma_first: (f64, f64),
        #[arg(long, value_parser = parse_pair, default_value = "0,0")]
        sigma_second: (f64, f64),
    },
    /// Disk coordinates of a line
    Project {
        #[arg(long)]
        trend: f64,
        #[arg(long, allow_hyphen_values = true)]
        plunge: f64,
        #[arg(long, default_value_t = ProjectionKind::EqualAngle)]
        kind: ProjectionKind,
    },
    /// Reference net traces
    Net {
        #[arg(long, default_value_t = 0.0)]
        view_trend: f64,
        #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
        view_plunge: f64,
        /// Spacing between circles, degrees
        #[arg(long, default_value_t = 10.0)]
        interval: f64,
        #[arg(long, default_value_t = ProjectionKind::EqualAngle)]
        kind: ProjectionKind,
        /// Write here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Angles {
            mode,
            first,
            second,
            sigma_first,
            sigma_second,
        } => {
            let report = angles_report(mode, first, second, sigma_first, sigma_second)?;
            emit(&report, None)
        }
        Action::Project {
            trend,
            plunge,
            kind,
        } => {
            tracing::info!(trend, plunge, %kind, "project");
            let (x, y) = project_line(trend.to_radians(), plunge.to_radians(), kind);
            emit(&serde_json::json!({ "kind": kind.to_string(), "x": x, "y": y }), None)
        }
        Action::Net {
            view_trend,
            view_plunge,
            interval,
            kind,
            out,
        } => {
            let view = View::new(view_trend.to_radians(), view_plunge.to_radians());
            let net = stereonet(&view, interval.to_radians(), kind, StereoCfg::default())
                .with_context(|| format!("building net with interval {interval}°"))?;
            let report = NetReport::new(kind, view_trend, view_plunge, interval, &net);
            emit(&report, out.as_deref())
        }
    }
}

/// "a,b" → (a, b).
fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("{v:?}: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn angles_report(
    mode: Relation,
    first: (f64, f64),
    second: (f64, f64),
    sigma_first: (f64, f64),
    sigma_second: (f64, f64),
) -> Result<AnglesReport> {
    tracing::info!(%mode, ?first, ?second, "angles");
    let r = |v: f64| v.to_radians();
    let [a0, a1, b0, b1] = Uncertain::<4>::independent([
        (r(first.0), r(sigma_first.0)),
        (r(first.1), r(sigma_first.1)),
        (r(second.0), r(sigma_second.0)),
        (r(second.1), r(sigma_second.1)),
    ]);
    let (v1, v2) = angles((a0, a1), (b0, b1), mode)
        .with_context(|| format!("{mode} of {first:?} and {second:?}"))?;
    let names = match mode {
        Relation::LineAngle | Relation::PlaneAngle => ["angle", "supplement"],
        Relation::Intersection => ["trend", "plunge"],
        Relation::BestFitPlane => ["strike", "dip"],
    };
    Ok(AnglesReport {
        mode: mode.to_string(),
        first,
        second,
        results: vec![Valued::degrees(names[0], v1), Valued::degrees(names[1], v2)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_accepts_spaces_and_signs() {
        assert_eq!(parse_pair("30, -12.5").unwrap(), (30.0, -12.5));
        assert!(parse_pair("30").is_err());
        assert!(parse_pair("a,b").is_err());
    }

    #[test]
    fn angles_report_in_degrees() {
        let rep = angles_report(Relation::LineAngle, (0.0, 0.0), (90.0, 0.0), (0.0, 0.0), (1.0, 0.0))
            .unwrap();
        assert_eq!(rep.results[0].name, "angle");
        assert!((rep.results[0].value - 90.0).abs() < 1e-9);
        assert!((rep.results[1].value - 90.0).abs() < 1e-9);
        // angle between horizontal lines moves 1:1 with trend
        assert!((rep.results[0].std_dev - 1.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_request_is_an_error() {
        let err = angles_report(Relation::Intersection, (10.0, 20.0), (10.0, 20.0), (0.0, 0.0), (0.0, 0.0))
            .unwrap_err();
        assert!(format!("{err:#}").contains("parallel"));
    }

    #[test]
    fn cli_parses_mode_and_kind() {
        let cmd = Cmd::try_parse_from([
            "stereonet-cli",
            "angles",
            "--mode",
            "i",
            "--first",
            "0,90",
            "--second",
            "90,45",
        ])
        .unwrap();
        assert!(matches!(
            cmd.action,
            Action::Angles {
                mode: Relation::Intersection,
                ..
            }
        ));
        assert!(Cmd::try_parse_from(["stereonet-cli", "project", "--trend", "0", "--plunge", "0", "--kind", "polar"]).is_err());
        assert!(Cmd::try_parse_from(["stereonet-cli", "angles", "--mode", "z", "--first", "0,0", "--second", "1,1"]).is_err());
    }
}
