//! Route declaration files for cape.
//!
//! Reads `cape.routes.json`, a JSON rendition of the declaration DSL:
//!
//! ```json
//! {
//!   "container": "main",
//!   "routes": [
//!     { "root": "top#index" },
//!     { "resources": "members", "only": ["index", "show"], "routes": [
//!       { "verb": "get", "actions": "info" }
//!     ] },
//!     { "namespace": "admin", "routes": [{ "resource": "account" }] }
//!   ]
//! }
//! ```
//!
//! Each entry names exactly one of `match`, `root`, `resources`, `resource`,
//! `namespace`, or `verb`. Entries that mix kinds, or carry keys their kind
//! does not take, are reported as malformed declarations.

use std::path::{Path, PathBuf};

use cape_atelier::{
    CustomRouteOptions, NameList, NamespaceOptions, On, PathNames, ResourceOptions, RoutingMapper,
};
use cape_carton::String;
use cape_maestro::{Location, Router, RouterError};
use cape_relief::{Constraints, RouteTable, RoutingError, RoutingErrors, Verb};
use serde::Deserialize;

/// Default routes file name, looked up in the working directory.
pub const ROUTES_FILE_NAME: &str = "cape.routes.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("routes file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid routes in {}: {source}", path.display())]
    Routing {
        path: PathBuf,
        source: RoutingErrors,
    },
}

/// Top-level routes file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesFile {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,

    /// Container id components are mounted into.
    #[serde(default)]
    pub container: Option<String>,

    /// Declarations, in matching order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RoutesFile {
    pub fn parse(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Run every entry against `m`.
    pub fn declare(&self, m: &mut RoutingMapper<'_>) {
        declare_all(&self.routes, m);
    }

    /// Compile the declarations into a fresh table.
    pub fn table(&self) -> Result<RouteTable, RoutingErrors> {
        cape_atelier::draw(|m| self.declare(m))
    }

    /// Draw the declarations into `router` and mount its container.
    pub fn install<L: Location>(&self, router: &mut Router<L>) -> Result<(), RouterError> {
        router.draw(|m| self.declare(m))?;
        if let Some(container) = &self.container {
            router.mount(container);
        }
        Ok(())
    }
}

/// One declaration.
///
/// Kept flat so each key maps onto one DSL argument; [`RouteEntry::declare`]
/// decides which declaration it is.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RouteEntry {
    #[serde(rename = "match")]
    pub pattern: Option<String>,
    pub to: Option<String>,
    pub root: Option<String>,
    pub resources: Option<String>,
    pub resource: Option<String>,
    pub namespace: Option<String>,
    pub verb: Option<Verb>,
    pub actions: Option<NameList>,
    pub on: Option<On>,
    pub only: Option<NameList>,
    pub except: Option<NameList>,
    pub path: Option<String>,
    pub path_names: Option<PathNames>,
    pub module: Option<String>,
    pub constraints: Constraints,
    pub routes: Vec<RouteEntry>,
}

enum EntryKind<'e> {
    Match { pattern: &'e str, target: &'e str },
    Root(&'e str),
    Resources(&'e str),
    Resource(&'e str),
    Namespace(&'e str),
    Custom { verb: Verb, actions: &'e NameList },
}

impl EntryKind<'_> {
    fn name(&self) -> &'static str {
        match self {
            EntryKind::Match { .. } => "match",
            EntryKind::Root(_) => "root",
            EntryKind::Resources(_) => "resources",
            EntryKind::Resource(_) => "resource",
            EntryKind::Namespace(_) => "namespace",
            EntryKind::Custom { .. } => "verb",
        }
    }

    fn allowed_keys(&self) -> &'static [&'static str] {
        match self {
            EntryKind::Match { .. } => &["to", "constraints"],
            EntryKind::Root(_) => &[],
            EntryKind::Resources(_) | EntryKind::Resource(_) => {
                &["only", "except", "path", "pathNames", "constraints", "routes"]
            }
            EntryKind::Namespace(_) => &["module", "path", "routes"],
            EntryKind::Custom { .. } => &["actions", "on"],
        }
    }
}

fn malformed(reason: std::string::String) -> RoutingError {
    RoutingError::MalformedDeclaration {
        reason: String::from(reason),
    }
}

fn declare_all(entries: &[RouteEntry], m: &mut RoutingMapper<'_>) {
    for entry in entries {
        entry.declare(m);
    }
}

impl RouteEntry {
    /// Run this entry, and the entries nested in it, against `m`.
    ///
    /// A malformed entry is reported to the mapper and skipped.
    pub fn declare(&self, m: &mut RoutingMapper<'_>) {
        let kind = match self.kind() {
            Ok(kind) => kind,
            Err(error) => {
                m.report(error);
                return;
            }
        };

        match kind {
            EntryKind::Match { pattern, target } => {
                m.match_constrained(pattern, target, &self.constraints);
            }
            EntryKind::Root(target) => {
                m.root(target);
            }
            EntryKind::Resources(name) => {
                m.resources_nested(name, self.resource_options(), |m| {
                    declare_all(&self.routes, m)
                });
            }
            EntryKind::Resource(name) => {
                m.resource_nested(name, self.resource_options(), |m| {
                    declare_all(&self.routes, m)
                });
            }
            EntryKind::Namespace(name) => {
                m.namespace_with(name, self.namespace_options(), |m| {
                    declare_all(&self.routes, m)
                });
            }
            EntryKind::Custom { verb, actions } => {
                let options = CustomRouteOptions {
                    on: self.on.unwrap_or_default(),
                };
                m.custom(verb, actions.clone(), options);
            }
        }
    }

    fn kind(&self) -> Result<EntryKind<'_>, RoutingError> {
        let declared: Vec<&str> = [
            ("match", self.pattern.is_some()),
            ("root", self.root.is_some()),
            ("resources", self.resources.is_some()),
            ("resource", self.resource.is_some()),
            ("namespace", self.namespace.is_some()),
            ("verb", self.verb.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, set)| set.then_some(key))
        .collect();
        if declared.len() > 1 {
            return Err(malformed(format!(
                "entry mixes {}",
                declared.join(", ")
            )));
        }

        let kind = if let Some(pattern) = &self.pattern {
            let target = self
                .to
                .as_deref()
                .ok_or_else(|| malformed(format!("match '{}' has no 'to' target", pattern)))?;
            EntryKind::Match { pattern, target }
        } else if let Some(target) = &self.root {
            EntryKind::Root(target)
        } else if let Some(name) = &self.resources {
            EntryKind::Resources(name)
        } else if let Some(name) = &self.resource {
            EntryKind::Resource(name)
        } else if let Some(name) = &self.namespace {
            EntryKind::Namespace(name)
        } else if let Some(verb) = self.verb {
            let actions = self
                .actions
                .as_ref()
                .ok_or_else(|| malformed(format!("{} route has no 'actions'", verb)))?;
            EntryKind::Custom { verb, actions }
        } else {
            return Err(malformed(std::string::String::from(
                "entry declares none of match, root, resources, resource, namespace, verb",
            )));
        };

        let present = [
            ("to", self.to.is_some()),
            ("actions", self.actions.is_some()),
            ("on", self.on.is_some()),
            ("only", self.only.is_some()),
            ("except", self.except.is_some()),
            ("path", self.path.is_some()),
            ("pathNames", self.path_names.is_some()),
            ("module", self.module.is_some()),
            ("constraints", !self.constraints.is_empty()),
            ("routes", !self.routes.is_empty()),
        ];
        let allowed = kind.allowed_keys();
        match present
            .iter()
            .find(|(key, set)| *set && !allowed.contains(key))
        {
            Some((key, _)) => Err(malformed(format!(
                "'{}' is not valid in a {} entry",
                key,
                kind.name()
            ))),
            None => Ok(kind),
        }
    }

    fn resource_options(&self) -> ResourceOptions {
        ResourceOptions {
            only: self.only.clone(),
            except: self.except.clone(),
            path: self.path.clone(),
            path_names: self.path_names.clone().unwrap_or_default(),
            constraints: self.constraints.clone(),
        }
    }

    fn namespace_options(&self) -> NamespaceOptions {
        NamespaceOptions {
            module: self.module.clone(),
            path: self.path.clone(),
        }
    }
}

/// Path of the routes file in `dir` (or the current directory if None).
pub fn routes_path(dir: Option<&Path>) -> PathBuf {
    let base = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    base.join(ROUTES_FILE_NAME)
}

/// Read and parse the routes file at `path`.
pub fn load_routes(path: &Path) -> Result<RoutesFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = RoutesFile::parse(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = file.routes.len(), "routes file loaded");
    Ok(file)
}

/// Read the routes file at `path` and compile it.
pub fn load_table(path: &Path) -> Result<RouteTable, ConfigError> {
    load_routes(path)?
        .table()
        .map_err(|source| ConfigError::Routing {
            path: path.to_path_buf(),
            source,
        })
}
