//! Relief - The route data model for Cape.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture raised from a flat surface. This crate holds
//! the shapes every other Cape crate works against: compiled patterns,
//! parameter sets, and the ordered route table that the router consults.
//!
//! ## Overview
//!
//! - [`RoutePattern`] is a structured sequence of literal and capture
//!   [`Segment`]s, so capture keys and constraints stay inspectable.
//! - [`Route`] pairs a pattern with its static parameters and the
//!   [`ComponentIdentity`] resolved at declaration time.
//! - [`RouteTable`] is append-only; declaration order is matching priority.

pub mod action;
pub mod errors;
pub mod params;
pub mod pattern;
pub mod route;

pub use action::{Action, Verb};
pub use errors::{RoutingError, RoutingErrors};
pub use params::{Params, ACTION_KEY, COLLECTION_KEY, MODULE_KEY};
pub use pattern::{Constraint, Constraints, RoutePattern, Segment};
pub use route::{ComponentIdentity, Route, RouteTable, RouteTarget};
