//! Command-line interface for otif-synth
//!
//! ```bash
//! otif-synth
//! otif-synth --output-dir /tmp/otif
//! ```

use clap::Parser;
use otif_populate_csv::CsvOutputArgs;
use otif_synth::{run_generate, COMPLETION_MESSAGE};

#[derive(Parser)]
#[command(name = "otif-synth")]
#[command(about = "Generate synthetic OTIF operations data.")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    output: CsvOutputArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    run_generate(&cli.output)?;
    println!("{COMPLETION_MESSAGE}");

    Ok(())
}
