//! Route declaration and generation errors.

use std::fmt;

use cape_carton::String;

/// Errors raised while declaring, compiling, or generating routes.
///
/// Declaration errors are programming errors in the route table, so each
/// variant names the offending pattern, key, or target verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route target '{target}': expected 'collection#action'")]
    InvalidTarget { target: String },

    #[error("empty capture key in pattern '{pattern}'")]
    EmptyKey { pattern: String },

    #[error("capture key '{key}' appears more than once in pattern '{pattern}'")]
    DuplicateKey { key: String, pattern: String },

    #[error("invalid constraint for '{key}' ({constraint}): {message}")]
    InvalidConstraint {
        key: String,
        constraint: String,
        message: String,
    },

    #[error("constraint given for '{key}', which is not a capture key of '{pattern}'")]
    UnknownConstraintKey { key: String, pattern: String },

    #[error("unknown action '{name}' (expected one of index, new, create, show, edit, update, destroy)")]
    UnknownAction { name: String },

    #[error("custom route '{action}' must be declared inside a resource block")]
    CustomRouteOutsideResource { action: String },

    #[error("singular resource '{resource}' has no collection; cannot declare '{action}' on collection")]
    CollectionRouteOnSingular { resource: String, action: String },

    #[error("malformed route declaration: {reason}")]
    MalformedDeclaration { reason: String },

    #[error("missing value for '{key}' while generating '{pattern}'")]
    MissingParam { key: String, pattern: String },

    #[error("value '{value}' for '{key}' does not satisfy its constraint")]
    ConstraintViolation { key: String, value: String },
}

/// All errors collected while running one declaration block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutingErrors(Vec<RoutingError>);

impl RoutingErrors {
    pub fn new(errors: Vec<RoutingError>) -> Self {
        Self(errors)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&RoutingError> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoutingError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<RoutingError> {
        self.0
    }
}

impl fmt::Display for RoutingErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "no routing errors"),
            [only] => write!(f, "{}", only),
            [first, rest @ ..] => write!(f, "{} (and {} more)", first, rest.len()),
        }
    }
}

impl std::error::Error for RoutingErrors {}

impl From<RoutingError> for RoutingErrors {
    fn from(error: RoutingError) -> Self {
        Self(vec![error])
    }
}
