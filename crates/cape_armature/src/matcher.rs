//! Fragment matching.
//!
//! A fragment matches a pattern only when both have the same number of
//! segments and every segment is accepted. The empty fragment has zero
//! segments and therefore matches only the root pattern.

use cape_carton::SmallVec;
use cape_relief::{Params, Route, RoutePattern, RouteTable, Segment};

/// Captured `(key, value)` pairs in pattern order.
pub type Captures<'p, 'f> = SmallVec<[(&'p str, &'f str); 4]>;

/// Result of a successful table lookup.
#[derive(Debug, Clone)]
pub struct Recognized<'t> {
    pub route: &'t Route,
    /// Position of `route` in its table.
    pub index: usize,
    /// Static parameters of the route plus every capture.
    pub params: Params,
}

#[inline]
fn fragment_segments(fragment: &str) -> impl Iterator<Item = &str> {
    // "".split('/') yields one empty segment; the root has none.
    let mut segments = fragment.split('/');
    if fragment.is_empty() {
        segments.next();
    }
    segments
}

/// Match `fragment` against a single pattern.
pub fn match_pattern<'p, 'f>(
    pattern: &'p RoutePattern,
    fragment: &'f str,
) -> Option<Captures<'p, 'f>> {
    let mut captures = Captures::new();
    let mut expected = pattern.segments().iter();

    for value in fragment_segments(fragment) {
        let segment = expected.next()?;
        if !segment.accepts(value) {
            return None;
        }
        if let Segment::Capture { key, .. } = segment {
            captures.push((key.as_str(), value));
        }
    }

    if expected.next().is_some() {
        return None;
    }
    Some(captures)
}

/// Find the first route in `table` that accepts `fragment`.
pub fn recognize<'t>(table: &'t RouteTable, fragment: &str) -> Option<Recognized<'t>> {
    table.iter().enumerate().find_map(|(index, route)| {
        let captures = match_pattern(route.pattern(), fragment)?;

        let mut params = Params::new();
        for (key, value) in captures {
            params.insert(key, value);
        }
        // Reserved keys always reflect the route.
        for (key, value) in route.static_params().iter() {
            params.insert(key, value);
        }

        tracing::trace!(fragment, index, pattern = %route.pattern(), "route matched");
        Some(Recognized {
            route,
            index,
            params,
        })
    })
}
