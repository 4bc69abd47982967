//! # Cape
//!
//! Resourceful client-side routing written in Rust.
//!
//! This crate re-exports all Cape sub-crates for unified documentation and
//! adds route declaration files plus the `cape` command-line tool.
//!
//! ## Name Origin
//!
//! A **cape** is a headland that ships steer by. Every fragment the
//! application sees is steered past the route table to exactly one component.
//!
//! ## Crates
//!
//! - [`carton`] - String and map aliases, case conversion, inflection
//! - [`relief`] - Route data model (patterns, params, route table)
//! - [`armature`] - Pattern compiler, matcher, and generator
//! - [`atelier`] - Route declaration DSL
//! - [`maestro`] - Router state machine

/// String and map aliases, case conversion, inflection.
pub use cape_carton as carton;

/// Route data model.
pub use cape_relief as relief;

/// Pattern compiler, matcher, and generator.
pub use cape_armature as armature;

/// Route declaration DSL.
pub use cape_atelier as atelier;

/// Router state machine.
pub use cape_maestro as maestro;

pub mod config;
pub mod listing;

pub use config::{
    load_routes, load_table, routes_path, ConfigError, RouteEntry, RoutesFile, ROUTES_FILE_NAME,
};
pub use listing::{format_params, format_routes};
