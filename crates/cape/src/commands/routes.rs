//! Routes command - List the compiled route table

use clap::Args;
use std::path::PathBuf;

use cape::format_routes;

#[derive(Args)]
pub struct RoutesArgs {
    /// Routes file path (default: ./cape.routes.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RoutesArgs) {
    let table = super::load_or_exit(args.config.as_deref());

    if table.is_empty() {
        eprintln!("No routes declared");
        return;
    }

    print!("{}", format_routes(&table));
    eprintln!("{} route(s)", table.len());
}
