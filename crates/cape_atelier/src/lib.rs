//! Atelier - The route declaration workshop for Cape.
//!
//! ## Name Origin
//!
//! An **atelier** is the workshop where a piece is laid out before it is
//! shown. Route tables are composed here: resourceful declarations expand
//! into ordered, compiled [`Route`](cape_relief::Route)s.
//!
//! ## Expansion
//!
//! | Declaration | Routes (in order) |
//! |-------------|-------------------|
//! | `resources("members")` | `members`, `members/new`, `members/:id`, `members/:id/edit` |
//! | `resource("account")` | `account`, `account/new`, `account/edit` |
//! | `namespace("admin", ..)` | `admin/...`, identity prefix `Admin` |
//! | `get("info", On::Member)` | `<resource>/:id/info` |
//!
//! Routes declared inside a plural resource are scoped under
//! `<resource>/:<singular>_id`, so nested keys come parent first.

pub mod mapper;
pub mod options;

pub use mapper::{draw, RoutingMapper};
pub use options::{CustomRouteOptions, NameList, NamespaceOptions, On, PathNames, ResourceOptions};
