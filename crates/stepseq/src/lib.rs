//! stepseq — a constraint-driven arithmetic-progression table engine for
//! relational query hosts.
//!
//! ## Crate layout
//! - `core`: arithmetic primitives, planner, resolver, cursor, table
//!   facade, and observability.
//!
//! The `prelude` module mirrors the surface a host integration uses.

pub use stepseq_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use stepseq_core::{
    error::Error,
    table::{Table, TableDefaults},
};

///
/// Prelude
///

pub mod prelude {
    pub use stepseq_core::prelude::*;
}
