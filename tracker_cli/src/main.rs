use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "fitrep")]
#[command(about = "Workout summaries from fitness tracker packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary line for each package (default)
    Summary {
        /// Package file (.csv rows or JSON Lines); built-in samples if omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List supported workout labels and their field order
    Labels,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    tracker_core::logging::init_with_level(&config.logging.level);

    match cli.command {
        Some(Commands::Summary { input }) => cmd_summary(input, &config),
        Some(Commands::Labels) => {
            cmd_labels();
            Ok(ExitCode::SUCCESS)
        }
        None => cmd_summary(None, &config),
    }
}

fn cmd_summary(input: Option<PathBuf>, config: &Config) -> Result<ExitCode> {
    let packages = match input.or_else(|| config.input.packages_path.clone()) {
        Some(path) => load_packages(&path)?,
        None => {
            tracing::debug!("No package file given, using built-in samples");
            default_packages()
        }
    };

    let mut failures = 0;
    for (package, result) in packages.iter().zip(summarize_packages(&packages)) {
        match result {
            Ok(line) => println!("{}", line),
            Err(e) => {
                failures += 1;
                eprintln!("error: {} package {:?}: {}", package.workout_type, package.data, e);
            }
        }
    }

    if failures > 0 {
        tracing::warn!("{} of {} packages failed", failures, packages.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_labels() {
    for kind in WorkoutKind::ALL {
        println!(
            "{}  {:<14} {}",
            kind.label(),
            kind.name(),
            kind.field_names().join(", ")
        );
    }
}
