//! Set-Piece Planner CLI
//!
//! Usage:
//!   set-piece-planner [OPTIONS] [PLAN]
//!
//! Options:
//!   --scenario <KEY>         Set piece (corner-left, corner-right, lateral-free-kick)
//!   --assign <ZONE=PLAYER>   Put a player in a zone (repeatable, last one wins)
//!   --background <MODE>      flat or textured
//!   -o, --output <FILE>      Write the SVG to a file instead of stdout
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use set_piece_planner::logging::init_cli_logger;
use set_piece_planner::plan::parse_override;
use set_piece_planner::renderer::DEFAULT_TEXTURE_URL;
use set_piece_planner::{
    render_plan_with_config, BackgroundMode, Plan, PlanError, PlanFile, RenderConfig,
    ScenarioKind, Zone,
};

#[derive(Clone, Copy, ValueEnum)]
enum BackgroundArg {
    /// Solid grass color
    Flat,
    /// Downloaded grass image, solid color if unavailable
    Textured,
}

#[derive(Parser)]
#[command(name = "set-piece-planner")]
#[command(about = "Plan corner and free-kick routines and draw them as SVG")]
struct Cli {
    /// Plan file (TOML); the default squad is used without one
    plan: Option<PathBuf>,

    /// Set piece to plan, overriding the plan file
    #[arg(long)]
    scenario: Option<String>,

    /// Assign a player to a zone as ZONE=PLAYER ("none" clears the zone)
    #[arg(short, long = "assign", value_name = "ZONE=PLAYER")]
    assignments: Vec<String>,

    /// Tactical note, overriding the plan file
    #[arg(short, long)]
    note: Option<String>,

    /// Pitch background
    #[arg(short, long, value_enum, default_value = "flat")]
    background: BackgroundArg,

    /// Grass texture URL for the textured background
    #[arg(long, default_value = DEFAULT_TEXTURE_URL)]
    texture_url: String,

    /// Stylesheet file for colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List zone keys and exit
    #[arg(long)]
    zones: bool,

    /// List scenario keys and exit
    #[arg(long)]
    scenarios: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    if cli.zones {
        print_zones();
        return;
    }

    if cli.scenarios {
        print_scenarios();
        return;
    }

    let mut plan = match &cli.plan {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading plan '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            let filename = path.display().to_string();
            match PlanFile::parse(&source).and_then(PlanFile::into_plan) {
                Ok(plan) => plan,
                Err(e) => {
                    eprintln!("{}", e.format(&source, &filename));
                    std::process::exit(1);
                }
            }
        }
        None => Plan::default(),
    };

    if let Err(e) = apply_overrides(&mut plan, &cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut config = RenderConfig::new();
    if let Some(path) = &cli.stylesheet {
        config = match config.with_stylesheet_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    let config = config.with_background(match cli.background {
        BackgroundArg::Flat => BackgroundMode::Flat,
        BackgroundArg::Textured => BackgroundMode::textured(cli.texture_url.clone()),
    });

    let rendered = render_plan_with_config(&plan, &config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered.svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", rendered.svg),
    }
    eprintln!("{}", rendered.summary);
}

/// Apply command-line choices on top of the plan file
fn apply_overrides(plan: &mut Plan, cli: &Cli) -> Result<(), PlanError> {
    if let Some(scenario) = &cli.scenario {
        plan.set_scenario(scenario.parse::<ScenarioKind>()?);
    }
    for raw in &cli.assignments {
        let (zone, player) = parse_override(raw)?;
        plan.assign(zone, &player)?;
    }
    if let Some(note) = &cli.note {
        plan.set_note(note.clone());
    }
    Ok(())
}

fn print_zones() {
    println!("ZONES");
    println!("=====");
    for zone in Zone::ALL {
        let spot = match zone.fixed_anchor() {
            Some(p) => format!("({}, {})", p.x, p.y),
            None => "depends on the set piece".to_string(),
        };
        println!("{:<20} {:<32} {}", zone.key(), zone.label(), spot);
    }
}

fn print_scenarios() {
    println!("SCENARIOS");
    println!("=========");
    for scenario in ScenarioKind::ALL {
        let p = scenario.kicker_spot();
        println!(
            "{:<20} {:<26} kicker at ({}, {})",
            scenario.key(),
            scenario.label(),
            p.x,
            p.y
        );
    }
}
