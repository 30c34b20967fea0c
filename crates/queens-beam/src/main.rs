//! N-Queens beam search CLI.
//!
//! Commands:
//! - init: Validate a config and start a new session
//! - step: Advance the session a fixed number of iterations
//! - run: Advance the session until it solves or exhausts its budget
//! - reset: Restart the session from a fresh random beam
//! - show: Print the session's status, best board and beam
//! - trials: Run a batch of independent searches and summarize them

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use queens_beam::{
    ConfigOverrides, QueensConfig, QueensSearch, Session, attacking_columns, run_trials,
    run_with_report,
};

#[derive(Parser)]
#[command(name = "queens-beam")]
#[command(version)]
#[command(about = "Solve N-Queens with local beam search")]
struct Cli {
    /// Session file shared by init/step/run/reset/show
    #[arg(long, env = "QUEENS_SESSION", default_value = "queens-session.json")]
    session: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Search parameters; each flag overrides the config file and the defaults.
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board size (number of queens)
    #[arg(short, long, allow_negative_numbers = true)]
    n: Option<i64>,

    /// Number of states kept in the beam
    #[arg(long, allow_negative_numbers = true)]
    beam_width: Option<i64>,

    /// Iteration budget
    #[arg(long, allow_negative_numbers = true)]
    max_iterations: Option<i64>,

    /// Probability of replacing a member's expansion with one random neighbor
    #[arg(long, allow_negative_numbers = true)]
    randomness_factor: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<QueensConfig> {
        let base = match &self.config {
            Some(path) => QueensConfig::load(path)?,
            None => QueensConfig::default(),
        };
        let overrides = ConfigOverrides {
            board_size: self.n,
            beam_width: self.beam_width,
            max_iterations: self.max_iterations,
            randomness_factor: self.randomness_factor,
            seed: self.seed,
        };
        Ok(base.with_overrides(&overrides)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Advance the session by single iterations
    Step {
        /// Number of steps
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Run the session to completion
    Run {
        /// Stop after this many steps even if still running
        #[arg(long)]
        max_steps: Option<usize>,

        /// Write a JSON run report
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Reset the session to a fresh random beam
    Reset,

    /// Display the session
    Show,

    /// Run independent searches and summarize them
    Trials {
        /// Number of runs
        #[arg(short, long, default_value = "10")]
        trials: usize,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output file for the summary (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Init { config } => {
            let config = config.resolve()?;
            let search = config.build()?;
            info!(
                n = config.board_size,
                beam_width = config.search.beam_width,
                max_iterations = config.search.max_iterations,
                randomness_factor = config.search.randomness_factor,
                seed = ?config.search.seed,
                "Initialized search"
            );
            save(&cli.session, &search)?;
            print_summary(&search);
        }

        Commands::Step { count } => {
            let mut search = Session::load(&cli.session)?.resume()?;
            for _ in 0..count {
                if search.step().is_terminal() {
                    break;
                }
            }
            save(&cli.session, &search)?;
            print_summary(&search);
        }

        Commands::Run { max_steps, report } => {
            let mut search = Session::load(&cli.session)?.resume()?;
            let run = run_with_report(&mut search, max_steps);
            save(&cli.session, &search)?;
            print_summary(&search);

            if let Some(path) = report {
                run.save(&path)?;
                println!("Report written to: {}", path.display());
            }
        }

        Commands::Reset => {
            let mut search = Session::load(&cli.session)?.resume()?;
            search.reset();
            save(&cli.session, &search)?;
            print_summary(&search);
        }

        Commands::Show => {
            let search = Session::load(&cli.session)?.resume()?;
            show(&search);
        }

        Commands::Trials {
            trials,
            config,
            output,
        } => {
            let config = config.resolve()?;
            info!(trials, n = config.board_size, "Starting trials");

            let summary = run_trials(&config, trials)?;

            println!("\n=== Trials Complete ===");
            println!("Board: {}x{}", config.board_size, config.board_size);
            println!("Beam width: {}", config.search.beam_width);
            println!(
                "Solved: {}/{} ({:.1}%)",
                summary.solved,
                summary.trials,
                summary.solve_rate * 100.0
            );
            println!(
                "Iterations: avg={:.1}, min={}, max={}",
                summary.avg_iterations, summary.min_iterations, summary.max_iterations
            );
            println!("Restarts: avg={:.1}", summary.avg_restarts);

            if let Some(path) = output {
                summary.save(&path)?;
                println!("Results saved to: {}", path.display());
            }
        }
    }

    Ok(())
}

fn save(path: &Path, search: &QueensSearch) -> Result<()> {
    Session::capture(search).save(path)?;
    info!(path = %path.display(), "Session saved");
    Ok(())
}

fn print_summary(search: &QueensSearch) {
    let snapshot = search.snapshot();
    println!(
        "Status: {} | Moves: {} | Restarts: {} | Attacking pairs: {}",
        snapshot.status,
        snapshot.iteration,
        snapshot.restarts,
        snapshot
            .best_cost()
            .map_or_else(|| "-".to_string(), |c| c.to_string())
    );
}

fn show(search: &QueensSearch) {
    let snapshot = search.snapshot();

    println!("Status: {}", snapshot.status);
    println!("Moves: {}", snapshot.iteration);
    println!("Restarts: {}", snapshot.restarts);
    println!("Beam width: {}", search.config().beam_width);

    if let Some(best) = &snapshot.best {
        println!("Attacking pairs: {}", best.cost);
        let conflicts: Vec<String> = attacking_columns(&best.state)
            .into_iter()
            .map(|(a, b)| format!("{a}-{b}"))
            .collect();
        if !conflicts.is_empty() {
            println!("Attacking columns: {}", conflicts.join(", "));
        }
        println!("\n{}\n", best.state);
    }

    println!("Beam:");
    for member in &snapshot.beam {
        println!("  {} (H={})", member.state.label(), member.cost);
    }
}
