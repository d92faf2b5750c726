//! MPM CLI: solid setup, validation and EOS listing.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mpm")]
#[command(version, about = "Material point method solid setup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, initialize and grow every solid in a setup file.
    Setup {
        /// Path to setup input (TOML, or JSON by extension).
        #[arg(short, long, default_value = "setup.toml")]
        config: String,

        /// Print the summary as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Validate a setup file without allocating particles.
    Validate {
        /// Path to setup input.
        path: String,
    },

    /// List the built-in EOS presets.
    Eos,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup { config, json } => commands::setup(&config, json),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Eos => commands::list_eos(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
