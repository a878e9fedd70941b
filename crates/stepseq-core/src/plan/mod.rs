//! Predicate planning: decide which host-offered constraints the engine
//! consumes, in which argument order, and what the scan is likely to cost.
//!
//! Planning is pure per query shape and carries no argument values; the
//! resolver replays the emitted token sequence against the runtime
//! arguments.

mod constraint;

pub use constraint::{Column, CompareOp, PredicateRequest, SlotToken, TokenSeq};

use crate::{
    direction::Direction,
    obs::{self, MetricsEvent, PlanKind},
};
use serde::{Deserialize, Serialize};

/// Advisory cost of a fully unconstrained scan: the whole 64-bit domain.
const UNBOUNDED_COST: f64 = 18_446_744_073_709_551_616.0;

/// Advisory cost of a point lookup.
const POINT_COST: f64 = 1.0;

///
/// OrderRequest
///
/// A requested sort key and direction on one column.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderRequest {
    pub column: Column,
    pub direction: Direction,
}

impl OrderRequest {
    #[must_use]
    pub const fn asc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    #[must_use]
    pub const fn desc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

///
/// PlanRequest
///
/// The host-offered query shape: predicates in offer order plus an
/// optional requested order.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlanRequest {
    pub predicates: Vec<PredicateRequest>,
    pub order: Option<OrderRequest>,
}

impl PlanRequest {
    #[must_use]
    pub const fn new(predicates: Vec<PredicateRequest>) -> Self {
        Self {
            predicates,
            order: None,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: OrderRequest) -> Self {
        self.order = Some(order);
        self
    }
}

///
/// Plan
///
/// Immutable planning artifact for one query shape: the consumption
/// token sequence, the traversal direction, whether the requested order is
/// satisfied without post-sorting, and an advisory cost estimate.
/// Carries no argument values.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Plan {
    tokens: TokenSeq,
    direction: Direction,
    order_satisfied: bool,
    cost: f64,
}

impl Plan {
    /// Derive a plan from the host-offered query shape.
    ///
    /// Idempotent and value-free; a shape with zero usable predicates is a
    /// valid full-scan plan. Consumed predicates are fully handled by the
    /// engine and need not be re-checked by the host.
    #[must_use]
    pub fn build(request: &PlanRequest) -> Self {
        let mut tokens = TokenSeq::default();
        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_point = false;

        for predicate in &request.predicates {
            let Some(token) = consume(predicate) else {
                continue;
            };

            has_upper |= token.is_upper_bound();
            has_lower |= token.is_lower_bound();
            has_point |= token == SlotToken::ValueEq;
            tokens.push(token);
        }

        // A requested order is satisfiable exactly when its sort key is the
        // value column; the sequence is emitted in value order either way.
        let (direction, order_satisfied) = match request.order {
            Some(order) if order.column == Column::Value => (order.direction, true),
            _ => (Direction::Asc, false),
        };

        let mut cost = UNBOUNDED_COST;
        if has_upper {
            cost *= 0.5;
        }
        if has_lower {
            cost *= 0.5;
        }
        if has_point {
            cost = POINT_COST;
        }

        obs::record(MetricsEvent::Plan {
            kind: plan_kind(has_point, has_lower, has_upper),
        });

        Self {
            tokens,
            direction,
            order_satisfied,
            cost,
        }
    }

    /// Consumption sequence: position N names the slot fed by the Nth
    /// runtime argument.
    #[must_use]
    pub const fn tokens(&self) -> &TokenSeq {
        &self.tokens
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// True when the requested order needs no post-sorting by the host.
    #[must_use]
    pub const fn order_satisfied(&self) -> bool {
        self.order_satisfied
    }

    /// Advisory cost estimate; monotonically reflects selectivity only.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }
}

/// Which slot a host predicate feeds, if the engine consumes it at all.
const fn consume(predicate: &PredicateRequest) -> Option<SlotToken> {
    if !predicate.is_usable() {
        return None;
    }

    match predicate {
        PredicateRequest::Offset { .. } => Some(SlotToken::Offset),
        PredicateRequest::Limit { .. } => Some(SlotToken::Limit),
        PredicateRequest::Compare { column, op, .. } => match (column, op) {
            (Column::Value, CompareOp::Eq | CompareOp::Is) => Some(SlotToken::ValueEq),
            (Column::Value, CompareOp::Lt) => Some(SlotToken::ValueLt),
            (Column::Value, CompareOp::Le) => Some(SlotToken::ValueLe),
            (Column::Value, CompareOp::Ge) => Some(SlotToken::ValueGe),
            (Column::Value, CompareOp::Gt) => Some(SlotToken::ValueGt),
            (Column::Step, CompareOp::Eq | CompareOp::Is) => Some(SlotToken::Step),
            (Column::Base, CompareOp::Eq | CompareOp::Is) => Some(SlotToken::Base),
            _ => None,
        },
    }
}

const fn plan_kind(has_point: bool, has_lower: bool, has_upper: bool) -> PlanKind {
    match (has_point, has_lower, has_upper) {
        (true, ..) => PlanKind::Point,
        (false, true, true) => PlanKind::BoundedBoth,
        (false, true, false) => PlanKind::BoundedBelow,
        (false, false, true) => PlanKind::BoundedAbove,
        (false, false, false) => PlanKind::Unbounded,
    }
}

///
/// TESTS
///
