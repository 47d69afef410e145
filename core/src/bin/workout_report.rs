use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use workout_core::cli::{default_packages, print_report, summarize_all};
use workout_core::load_packages;

#[derive(Parser)]
#[command(name = "workout-report", version, about = "Distance, mean speed and calories per workout")]
struct Cli {
    /// Print the summaries as a JSON array instead of report lines
    #[arg(long)]
    json: bool,

    /// JSON file with packages; the built-in demo runs when omitted
    packages: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let packages = match &cli.packages {
        Some(path) => load_packages(path)
            .with_context(|| format!("could not load packages from {}", path.display()))?,
        None => default_packages(),
    };

    if cli.json {
        let summaries = summarize_all(&packages)?;
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print_report(&packages)?;
    }
    Ok(())
}
