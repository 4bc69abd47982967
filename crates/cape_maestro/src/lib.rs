//! # cape_maestro
//!
//! Maestro - The navigation runtime for Cape.
//!
//! ## Name Origin
//!
//! A **maestro** conducts the orchestra, cueing each section in turn. The
//! router does the same for components: it matches the current fragment,
//! cues the outgoing component to unmount, runs the before-hooks, and brings
//! the next component in.
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                      cape_maestro (Router)                     |
//! +--------------------------------------------------------------+
//! |                                                                |
//! |  +------------------+        +---------------------------+    |
//! |  |  Location        |------->|  Navigation cycle         |    |
//! |  |  (fragment)      |        |  recognize -> unmount ->  |    |
//! |  +------------------+        |  hooks -> mount -> notify |    |
//! |           ^                  +---------------------------+    |
//! |           |                        |              |           |
//! |  +------------------+        +-----------+  +-------------+   |
//! |  |  Navigator       |        | Component |  | Subscribers |   |
//! |  |  (queued         |        | Registry  |  | (refresh)   |   |
//! |  |   redirects)     |        +-----------+  +-------------+   |
//! |  +------------------+                                          |
//! |                                                                |
//! |  Route table: cape_atelier (declare) + cape_armature (match)   |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - At most one component is mounted; the previous one is unmounted before
//!   the next is constructed.
//! - Before-hooks run after that unmount and before the next mount.
//! - Navigating to the current fragment does nothing.
//! - Navigations requested during a cycle are queued, never nested.

pub mod component;
pub mod error;
pub mod location;
pub mod navigator;
pub mod router;

pub use component::{Component, ComponentFactory, ComponentRegistry, Subscriber};
pub use error::RouterError;
pub use location::{Location, MemoryLocation};
pub use navigator::{Navigator, MAX_QUEUED_NAVIGATIONS};
pub use router::{BeforeHook, Navigation, Phase, Router};
