//! CLI subcommands.

pub mod recognize;
pub mod routes;

use std::path::{Path, PathBuf};

use cape::config::{load_table, routes_path};
use cape::relief::RouteTable;

/// Compile the routes file at `config` (or `cape.routes.json` in the
/// current directory), exiting on failure.
pub(crate) fn load_or_exit(config: Option<&Path>) -> RouteTable {
    let path: PathBuf = config.map_or_else(|| routes_path(None), Path::to_path_buf);
    match load_table(&path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            std::process::exit(1);
        }
    }
}
