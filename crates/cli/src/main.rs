use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;
use trisolve::api::{solve, Case, Kind, Label, TriangleInputSet};

mod provenance;

use provenance::{envelope, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Solve a triangle from three of its sides and angles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve and print all six measurements (two triangles for ambiguous SSA)
    Solve(Inputs),
    /// Print which congruence case the inputs form
    Classify(Inputs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug, Serialize)]
struct Inputs {
    /// Side length as `label=value`, e.g. `a=3`
    #[arg(long = "side", value_parser = parse_side)]
    sides: Vec<(Label, f64)>,
    /// Angle in degrees as `label=value`, e.g. `gamma=90`
    #[arg(long = "angle", value_parser = parse_angle)]
    angles: Vec<(Label, f64)>,
    /// Mark this input as the one lying between the other two
    #[arg(long, conflicts_with = "none_included")]
    included: Option<Label>,
    /// Clear the automatic mark; requests SSA or AAS
    #[arg(long)]
    none_included: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(inputs) => run_solve(inputs),
        Action::Classify(inputs) => run_classify(inputs),
        Action::Report => report(),
    }
}

fn run_solve(inputs: Inputs) -> Result<()> {
    let set = build_set(&inputs)?;
    tracing::info!(case = %set.classify(), inputs = set.len(), "solve");
    let result = solve(&set).with_context(|| format!("cannot solve {} inputs", set.classify()))?;
    let doc = envelope(
        Payload::new(serde_json::to_value(&inputs)?).with_result(serde_json::to_value(&result)?),
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn run_classify(inputs: Inputs) -> Result<()> {
    let set = build_set(&inputs)?;
    let case: Case = set.classify();
    tracing::info!(%case, "classify");
    let doc = envelope(Payload::new(serde_json::to_value(&inputs)?).with_result(
        serde_json::json!({ "case": case, "solvable": case.is_solvable() }),
    ));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = envelope(Payload::new(serde_json::json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Feed the parsed arguments into a fresh input set, then apply the mark options.
fn build_set(inputs: &Inputs) -> Result<TriangleInputSet> {
    let mut set = TriangleInputSet::new();
    let entries = inputs
        .sides
        .iter()
        .map(|&(l, v)| (Kind::Side, l, v))
        .chain(inputs.angles.iter().map(|&(l, v)| (Kind::Angle, l, v)));
    for (kind, label, value) in entries {
        set.add(kind, label, value)
            .with_context(|| format!("adding {label}={value}"))?;
    }
    if let Some(label) = inputs.included {
        let id = set
            .input(label)
            .map(|m| m.id)
            .with_context(|| format!("--included {label} is not among the inputs"))?;
        set.set_adjacent(id, true)
            .with_context(|| format!("marking {label} as included"))?;
    }
    if inputs.none_included {
        if let Some(id) = set.flagged().map(|m| m.id) {
            set.set_adjacent(id, false)?;
        }
    }
    Ok(set)
}

fn parse_side(s: &str) -> std::result::Result<(Label, f64), String> {
    parse_measurement(s, Kind::Side)
}

fn parse_angle(s: &str) -> std::result::Result<(Label, f64), String> {
    parse_measurement(s, Kind::Angle)
}

fn parse_measurement(s: &str, kind: Kind) -> std::result::Result<(Label, f64), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `label=value`, got `{s}`"))?;
    let label: Label = label.parse().map_err(|e| format!("{e}"))?;
    if label.kind() != kind {
        return Err(format!("`{label}` does not name a {kind:?}"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value `{value}`: {e}"))?;
    Ok((label, value))
}
