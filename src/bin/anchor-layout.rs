use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anchor-layout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a scene and print every frame as JSON.
    Solve(SolveArgs),
    /// Check a scene document without laying it out.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the root width constraint (`exact:N`, `at_most:N` or `unspecified`).
    #[arg(long, value_parser = parse_constraint)]
    width: Option<anchor_layout::SizeConstraint>,

    /// Override the root height constraint (`exact:N`, `at_most:N` or `unspecified`).
    #[arg(long, value_parser = parse_constraint)]
    height: Option<anchor_layout::SizeConstraint>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,

    /// Report nodes whose frame leaves their parent, and fail if any do.
    #[arg(long)]
    check_bounds: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<anchor_layout::Scene> {
    anchor_layout::Scene::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))
}

fn parse_constraint(s: &str) -> Result<anchor_layout::SizeConstraint, String> {
    if s == "unspecified" {
        return Ok(anchor_layout::SizeConstraint::unspecified());
    }
    let (mode, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MODE:PIXELS, got '{s}'"))?;
    let value: u32 = value
        .parse()
        .map_err(|e| format!("invalid pixel value '{value}': {e}"))?;
    match mode {
        "exact" => Ok(anchor_layout::SizeConstraint::exact(value)),
        "at_most" => Ok(anchor_layout::SizeConstraint::at_most(value)),
        other => Err(format!("unknown constraint mode '{other}'")),
    }
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let mut scene = read_scene(&args.in_path)?;
    if let Some(w) = args.width {
        scene.width = w;
    }
    if let Some(h) = args.height {
        scene.height = h;
    }

    let report = scene.solve().context("solve scene")?;

    let encoded = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    let json = encoded.context("serialize layout report")?;
    println!("{json}");

    if args.check_bounds {
        let over = report.overflowing();
        for o in &over {
            eprintln!(
                "out of bounds: '{}' at ({}, {})-({}, {}), {:.0}% visible",
                o.id,
                o.frame.left,
                o.frame.top,
                o.frame.right,
                o.frame.bottom,
                o.visible_fraction * 100.0
            );
        }
        if !over.is_empty() {
            anyhow::bail!("{} node(s) extend past their container", over.len());
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    scene.validate().context("validate scene")?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}
