//! Host seam: the progression engine as a table-like data source.
//!
//! A [`Table`] is consulted twice per query: once during preparation
//! ([`Table::plan`], potentially many times for the same shape) and once
//! per execution ([`Table::open`], resolving the argument values and
//! handing back a cursor).

use crate::{
    cursor::Cursor,
    error::Error,
    plan::{Plan, PlanRequest},
    resolve::resolve,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// TableDefaults
///
/// Progression parameters bound at table instantiation. A bound default
/// behaves exactly like an exact constraint supplied by the query: a
/// conflicting runtime constraint empties the result rather than
/// overriding it. Unbound parameters fall back to step 1, base 0.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableDefaults {
    pub step: Option<i64>,
    pub base: Option<i64>,
}

impl TableDefaults {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: None,
            base: None,
        }
    }

    #[must_use]
    pub const fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub const fn with_base(mut self, base: i64) -> Self {
        self.base = Some(base);
        self
    }
}

///
/// Table
///
/// One progression table instance. Stateless apart from its defaults;
/// every `open` produces an independent cursor owning its own state.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Table {
    defaults: TableDefaults,
}

impl Table {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            defaults: TableDefaults::new(),
        }
    }

    #[must_use]
    pub const fn with_defaults(defaults: TableDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub const fn defaults(&self) -> &TableDefaults {
        &self.defaults
    }

    /// Plan one query shape. Idempotent and value-free.
    #[must_use]
    pub fn plan(&self, request: &PlanRequest) -> Plan {
        Plan::build(request)
    }

    /// Resolve one execution's argument values and open a cursor over the
    /// result. Infeasible constraint sets yield an exhausted cursor.
    pub fn open(&self, plan: &Plan, args: &[Value]) -> Result<Cursor, Error> {
        let resolution = resolve(plan, args, &self.defaults)?;
        Ok(Cursor::new(resolution))
    }
}

///
/// TESTS
///
