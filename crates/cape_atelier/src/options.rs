//! Declaration options.
//!
//! Every option struct deserializes from the camelCase keys used in route
//! files, so `{ "only": "show", "pathNames": { "new": "add" } }` maps
//! directly onto [`ResourceOptions`].

use cape_carton::{SmallVec, String};
use cape_relief::Constraints;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// One action name or a list of them.
///
/// `"show"` and `["show"]` are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList(SmallVec<[String; 4]>);

impl NameList {
    /// The empty list (`only: []`).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|n| n.as_str())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for NameList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(name) => Self(SmallVec::from_elem(name, 1)),
            OneOrMany::Many(names) => Self(SmallVec::from_vec(names)),
        })
    }
}

impl From<&str> for NameList {
    fn from(name: &str) -> Self {
        Self(SmallVec::from_elem(String::from(name), 1))
    }
}

impl<const N: usize> From<[&str; N]> for NameList {
    fn from(names: [&str; N]) -> Self {
        Self(names.into_iter().map(String::from).collect())
    }
}

impl From<Vec<&str>> for NameList {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(String::from).collect())
    }
}

/// Literal sub-segments used for the `new` and `edit` paths
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathNames {
    pub new: String,
    pub edit: String,
}

impl Default for PathNames {
    fn default() -> Self {
        Self {
            new: String::from("new"),
            edit: String::from("edit"),
        }
    }
}

/// Options for `resources` and `resource`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceOptions {
    /// Emit only these actions (wins over `except`)
    pub only: Option<NameList>,
    /// Emit every action but these
    pub except: Option<NameList>,
    /// Literal path segment (default: the resource name)
    pub path: Option<String>,
    /// Sub-segments for `new` and `edit`
    pub path_names: PathNames,
    /// Constraint fragments for member captures, keyed by capture name
    pub constraints: Constraints,
}

impl ResourceOptions {
    pub fn only(mut self, names: impl Into<NameList>) -> Self {
        self.only = Some(names.into());
        self
    }

    pub fn except(mut self, names: impl Into<NameList>) -> Self {
        self.except = Some(names.into());
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(String::from(path));
        self
    }

    pub fn path_names(mut self, new: &str, edit: &str) -> Self {
        self.path_names = PathNames {
            new: String::from(new),
            edit: String::from(edit),
        };
        self
    }

    pub fn constraint(mut self, key: &str, fragment: &str) -> Self {
        self.constraints.insert(key, fragment);
        self
    }

    /// Whether `action` survives the `only`/`except` filter.
    pub(crate) fn includes(&self, action: &str) -> bool {
        match (&self.only, &self.except) {
            (Some(only), _) => only.contains(action),
            (None, Some(except)) => !except.contains(action),
            (None, None) => true,
        }
    }

    /// Names given in `only`/`except`, for validation.
    pub(crate) fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.only
            .iter()
            .chain(self.except.iter())
            .flat_map(|names| names.iter())
    }
}

/// Options for `namespace`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamespaceOptions {
    /// Identity prefix (default: the namespace name)
    pub module: Option<String>,
    /// Literal path segment (default: the namespace name)
    pub path: Option<String>,
}

impl NamespaceOptions {
    pub fn module(mut self, module: &str) -> Self {
        self.module = Some(String::from(module));
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(String::from(path));
        self
    }
}

/// Where a custom route is rooted inside a resource block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum On {
    /// `<resource>/:id/<action>` (`<resource>/<action>` for a singular resource)
    #[default]
    Member,
    /// `<resource>/<action>`
    Collection,
}

/// Options for `get`/`post`/`put`/`patch`/`delete`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomRouteOptions {
    pub on: On,
}

impl From<On> for CustomRouteOptions {
    fn from(on: On) -> Self {
        Self { on }
    }
}
