//! Core engine for stepseq: overflow-safe 64-bit arithmetic, predicate
//! planning, range resolution, and lazy enumeration of constrained
//! arithmetic progressions.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod arith;
pub mod cursor;
pub mod direction;
pub mod error;
pub mod obs;
pub mod plan;
pub mod resolve;
pub mod table;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. Observability and the raw
/// arithmetic primitives are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        cursor::{Cursor, Row},
        direction::Direction,
        error::{Error, ErrorKind, Slot},
        plan::{Column, CompareOp, OrderRequest, Plan, PlanRequest, PredicateRequest},
        resolve::{Resolution, ResolvedRange, resolve},
        table::{Table, TableDefaults},
        value::Value,
    };
}
