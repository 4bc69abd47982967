//! Structured route patterns.
//!
//! A declared path such as `members/:id/edit` is kept as a sequence of
//! [`Segment`]s rather than one opaque regular expression. Capture keys are
//! read straight off the segments, and each constraint is checked against
//! exactly one fragment segment.

use std::fmt;

use cape_carton::{format_compact, FxHashMap, String};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::RoutingError;

/// Compiled constraint fragment for a single capture.
///
/// The fragment is anchored on both ends, so `\d+` accepts `123` but not
/// `123abc`.
#[derive(Debug, Clone)]
pub struct Constraint {
    source: String,
    regex: Regex,
}

impl Constraint {
    /// Compile `source` as the constraint of capture `key`.
    pub fn new(key: &str, source: &str) -> Result<Self, RoutingError> {
        let anchored = format!("^(?:{})$", source);
        match Regex::new(&anchored) {
            Ok(regex) => Ok(Self {
                source: String::from(source),
                regex,
            }),
            Err(err) => Err(RoutingError::InvalidConstraint {
                key: String::from(key),
                constraint: String::from(source),
                message: format_compact!("{}", err),
            }),
        }
    }

    /// The fragment as declared (without anchors).
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Constraint {}

/// One slash-delimited piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the fragment segment exactly.
    Literal(String),
    /// Binds the fragment segment to `key`.
    Capture {
        key: String,
        constraint: Option<Constraint>,
    },
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn capture(key: impl Into<String>) -> Self {
        Segment::Capture {
            key: key.into(),
            constraint: None,
        }
    }

    /// Capture key, if this segment binds one.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Capture { key, .. } => Some(key.as_str()),
            Segment::Literal(_) => None,
        }
    }

    /// Whether a single fragment segment satisfies this pattern segment.
    ///
    /// Unconstrained captures accept any non-empty segment.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Segment::Literal(text) => text.as_str() == value,
            Segment::Capture { constraint, .. } => {
                !value.is_empty() && constraint.as_ref().map_or(true, |c| c.is_match(value))
            }
        }
    }
}

/// Per-key constraint fragments as declared (`{ "id": "\\d+" }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraints(FxHashMap<String, String>);

impl Constraints {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, fragment: impl Into<String>) {
        self.0.insert(key.into(), fragment.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Entries of `other` override entries of `self`.
    pub fn merged(&self, other: &Constraints) -> Constraints {
        let mut merged = self.clone();
        for (key, fragment) in &other.0 {
            merged.0.insert(key.clone(), fragment.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Constraints {
    fn from(entries: [(K, V); N]) -> Self {
        let mut constraints = Constraints::default();
        for (key, fragment) in entries {
            constraints.insert(key, fragment);
        }
        constraints
    }
}

/// Ordered literal/capture segments of one route.
///
/// The empty pattern (no segments) is the root route and matches only the
/// empty fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Capture keys in left-to-right order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::key)
    }

    /// Constraint attached to `key`, if any.
    pub fn constraint(&self, key: &str) -> Option<&Constraint> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Capture {
                key: k,
                constraint: Some(c),
            } if k.as_str() == key => Some(c),
            _ => None,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Capture { key, .. } => write!(f, ":{}", key)?,
            }
        }
        Ok(())
    }
}
