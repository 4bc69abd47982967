//! Carton - The toolbox for Cape.
//!
//! This crate provides the foundational utilities shared by every Cape crate,
//! much like a carton (artist's portfolio case) holds the essential tools an
//! artist carries from one workshop to the next.
//!
//! # Modules
//!
//! - **naming**: case conversion used to derive component identities
//! - **inflection**: English pluralization for resource names
//!
//! # Example
//!
//! ```
//! use cape_carton::{camelize, pluralize, singularize};
//!
//! assert_eq!(camelize("admin/members"), "AdminMembers");
//! assert_eq!(pluralize("account"), "accounts");
//! assert_eq!(singularize("addresses"), "address");
//! ```

pub mod inflection;
pub mod naming;

// Re-export compact_str::CompactString for convenience
pub use compact_str::format_compact;
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use inflection::{pluralize, singularize};
pub use naming::{camelize, capitalize, is_segment_separator};
