//! Armature - The route pattern compiler for Cape.
//!
//! ## Name Origin
//!
//! An **armature** is the internal framework a sculptor builds before adding
//! clay. Here it is the structure under every route: declared paths are
//! tokenized and compiled into [`RoutePattern`]s, and fragments are matched
//! against them segment by segment.
//!
//! ## Pipeline
//!
//! ```text
//! "members/:id/edit" --tokenize--> [Literal, Capture, Literal]
//!                    --compile---> RoutePattern (constraints attached)
//! "members/42/edit"  --recognize-> Route + { id: "42", ... }
//! ```
//!
//! [`generate`] runs the other direction and rebuilds a fragment from a
//! parameter set.
//!
//! [`RoutePattern`]: cape_relief::RoutePattern

pub mod compiler;
pub mod generator;
pub mod matcher;
pub mod tokenizer;

pub use compiler::{compile, compile_with};
pub use generator::{generate, path_for};
pub use matcher::{match_pattern, recognize, Captures, Recognized};
pub use tokenizer::{tokenize, Token};
