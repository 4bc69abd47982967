//! # cape
//!
//! Command-line tool for inspecting Cape route declaration files.
//!
//! - `cape routes` lists the compiled route table.
//! - `cape recognize <FRAGMENT>` shows which route a fragment resolves to.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "cape")]
#[command(about = "Resourceful client-side routing in Rust", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every compiled route
    Routes(commands::routes::RoutesArgs),

    /// Resolve a fragment against the route table
    Recognize(commands::recognize::RecognizeArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match cli.command {
        Commands::Routes(args) => commands::routes::run(args),
        Commands::Recognize(args) => commands::recognize::run(args),
    }
}
