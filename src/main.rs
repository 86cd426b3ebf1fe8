use crate::algos::{Search, pick};
use crate::config::Config;
use crate::model::RankTable;
use clap::{ArgAction, Parser};
use eyre::{Result, eyre};
use std::path::PathBuf;
use tracing::{Level, info};

mod algos;
mod checks;
mod config;
mod display;
mod loader;
mod model;
mod stats;

/// Assign students to project teams by exhaustive search
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "tsolver.toml")]
    config: PathBuf,
    /// CSV file with students and their rankings, overrides the configuration
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Seed used to pick one of the best configurations
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write the selected assignment to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Maximum number of best configurations to list
    #[arg(short, long)]
    max_listed: Option<usize>,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&args.config)?;
    let projects = config.projects();
    checks::check_projects(&projects)?;
    checks::check_unranked(config.solver.unranked_rank)?;
    info!(
        projects = projects.len(),
        cost = ?config.solver.cost,
        prune = config.solver.prune,
        "configuration loaded"
    );

    let input = args
        .input
        .or_else(|| config.input.file.clone())
        .ok_or_else(|| eyre!("no input file given on the command line or in the configuration"))?;
    let students = loader::load_students(&input, &config.input)?;
    checks::check_roster(&students)?;
    checks::check_capacity(&projects, &students, config.solver.allow_unassigned)?;
    checks::check_popularity(&projects, &students);
    display::display_roster(&students);

    let ranks = RankTable::new(&projects, &students, config.solver.unranked_rank);
    info!(unranked = ranks.unranked(), "ranks computed");
    display::display_rank_maps(&projects, &students, &ranks);

    let pool = students.iter().map(|s| s.id).collect::<Vec<_>>();
    let outcome = Search::new(&projects, &ranks, config.solver.cost)
        .with_pruning(config.solver.prune)
        .run(&pool);
    display::display_search(&projects, &outcome.stats);
    display::display_best(&outcome, &projects, &students, args.max_listed);

    let seed = args.seed.unwrap_or(config.solver.seed);
    let chosen = pick(outcome.best.assignments(), seed)?;
    println!("Randomly picked configuration (seed {}):", seed);
    display::display_details(chosen, &projects, &students, &ranks);
    display::display_stats(chosen, &projects, &ranks);
    display::display_unassigned(chosen, &students);
    if let Some(output) = args.output {
        loader::save_assignment(&output, chosen, &projects, &students, &ranks)?;
        info!(output = %output.display(), "assignment saved");
    }
    Ok(())
}
