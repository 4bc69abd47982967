//! Recognize command - Resolve a fragment to its route and params

use clap::Args;
use std::path::PathBuf;

use cape::armature::recognize;
use cape::format_params;

#[derive(Args)]
pub struct RecognizeArgs {
    /// Fragment to resolve (a leading `#` or `/` is ignored)
    pub fragment: String,

    /// Routes file path (default: ./cape.routes.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RecognizeArgs) {
    let table = super::load_or_exit(args.config.as_deref());
    let fragment = args
        .fragment
        .trim_start_matches('#')
        .trim_start_matches('/');

    match recognize(&table, fragment) {
        Some(recognized) => {
            let route = recognized.route;
            println!(
                "/{} -> {}#{} ({})",
                route.pattern(),
                route.collection(),
                route.action(),
                route.component()
            );
            print!("{}", format_params(&recognized.params));
        }
        None => {
            eprintln!("No route matches '{}'", fragment);
            std::process::exit(1);
        }
    }
}
