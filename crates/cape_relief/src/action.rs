//! Action names and the (cosmetic) request verbs attached to custom routes.

use std::fmt;

use cape_carton::String;
use serde::{Deserialize, Serialize};

/// Action label carried by every route as its `action` parameter.
///
/// The seven standard names are the ones `resources`/`resource` know how to
/// expand; anything else declared through a custom route is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Index,
    New,
    Create,
    Show,
    Edit,
    Update,
    Destroy,
    Custom(String),
}

impl Action {
    /// Default action set of a plural resource, in declaration order.
    pub const STANDARD: [Action; 7] = [
        Action::Index,
        Action::New,
        Action::Create,
        Action::Show,
        Action::Edit,
        Action::Update,
        Action::Destroy,
    ];

    /// Parse an action name. Unknown names become [`Action::Custom`].
    pub fn parse(name: &str) -> Self {
        Self::standard(name).unwrap_or_else(|| Action::Custom(String::from(name)))
    }

    /// Parse one of the seven standard action names.
    pub fn standard(name: &str) -> Option<Self> {
        match name {
            "index" => Some(Action::Index),
            "new" => Some(Action::New),
            "create" => Some(Action::Create),
            "show" => Some(Action::Show),
            "edit" => Some(Action::Edit),
            "update" => Some(Action::Update),
            "destroy" => Some(Action::Destroy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Index => "index",
            Action::New => "new",
            Action::Create => "create",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Destroy => "destroy",
            Action::Custom(name) => name.as_str(),
        }
    }

    #[inline]
    pub fn is_standard(&self) -> bool {
        !matches!(self, Action::Custom(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request verb named by a custom route declaration.
///
/// Navigation never dispatches on it; it is recorded so route listings read
/// the way they were declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
