//! Compile declared paths into [`RoutePattern`]s.

use cape_carton::{FxHashSet, String};
use cape_relief::{Constraint, Constraints, RoutePattern, RoutingError, Segment};

use crate::tokenizer::{tokenize, Token};

/// Compile `path`, attaching `constraints` to the captures they name.
///
/// Every constraint key must name a capture of `path`.
///
/// # Examples
/// ```
/// use cape_armature::compile;
/// use cape_relief::Constraints;
///
/// let pattern = compile("members/:id/edit", &Constraints::from([("id", r"\d+")])).unwrap();
/// assert_eq!(pattern.to_string(), "members/:id/edit");
/// assert!(compile("members/:id", &Constraints::from([("name", "[a-z]+")])).is_err());
/// ```
pub fn compile(path: &str, constraints: &Constraints) -> Result<RoutePattern, RoutingError> {
    let pattern = compile_with(path, |key| constraints.get(key))?;
    for key in constraints.keys() {
        if !pattern.keys().any(|k| k == key) {
            return Err(RoutingError::UnknownConstraintKey {
                key: String::from(key),
                pattern: String::from(path),
            });
        }
    }
    Ok(pattern)
}

/// Compile `path`, asking `lookup` for the constraint of each capture.
///
/// Used for inherited constraints, where the table may hold keys the current
/// path does not capture.
pub fn compile_with<'c>(
    path: &str,
    lookup: impl Fn(&str) -> Option<&'c str>,
) -> Result<RoutePattern, RoutingError> {
    let tokens = tokenize(path);
    let mut seen = FxHashSet::default();
    let mut segments = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Literal(text) => segments.push(Segment::literal(text)),
            Token::Capture("") => {
                return Err(RoutingError::EmptyKey {
                    pattern: String::from(path),
                })
            }
            Token::Capture(key) => {
                if !seen.insert(key) {
                    return Err(RoutingError::DuplicateKey {
                        key: String::from(key),
                        pattern: String::from(path),
                    });
                }
                let constraint = lookup(key)
                    .map(|fragment| Constraint::new(key, fragment))
                    .transpose()?;
                segments.push(Segment::Capture {
                    key: String::from(key),
                    constraint,
                });
            }
        }
    }

    Ok(RoutePattern::new(segments))
}
