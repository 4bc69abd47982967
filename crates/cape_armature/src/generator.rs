//! Reverse routing: build fragments from parameter sets.

use cape_carton::String;
use cape_relief::{Params, RoutePattern, RouteTable, RoutingError, Segment};

/// Rebuild the fragment `pattern` would match with `params` as captures.
///
/// Every capture key must be present and satisfy its constraint. Values
/// containing `/` are rejected since they would span segments.
///
/// # Examples
/// ```
/// use cape_armature::{compile, generate};
/// use cape_relief::{Constraints, Params};
///
/// let pattern = compile("members/:id/edit", &Constraints::none()).unwrap();
/// let fragment = generate(&pattern, &Params::from([("id", "42")])).unwrap();
/// assert_eq!(fragment, "members/42/edit");
/// ```
pub fn generate(pattern: &RoutePattern, params: &Params) -> Result<String, RoutingError> {
    let mut fragment = String::default();

    for (i, segment) in pattern.segments().iter().enumerate() {
        if i > 0 {
            fragment.push('/');
        }
        match segment {
            Segment::Literal(text) => fragment.push_str(text),
            Segment::Capture { key, .. } => {
                let value = params
                    .get(key)
                    .ok_or_else(|| RoutingError::MissingParam {
                        key: key.clone(),
                        pattern: String::from(pattern.to_string()),
                    })?;
                if value.contains('/') || !segment.accepts(value) {
                    return Err(RoutingError::ConstraintViolation {
                        key: key.clone(),
                        value: String::from(value),
                    });
                }
                fragment.push_str(value);
            }
        }
    }

    Ok(fragment)
}

/// Generate a fragment for the first route declared for
/// `collection#action`.
///
/// Returns `Ok(None)` when no such route exists.
pub fn path_for(
    table: &RouteTable,
    collection: &str,
    action: &str,
    params: &Params,
) -> Result<Option<String>, RoutingError> {
    table
        .iter()
        .find(|route| route.collection() == collection && route.action() == action)
        .map(|route| generate(route.pattern(), params))
        .transpose()
}
