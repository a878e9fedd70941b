use crate::error::Slot;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Column
///
/// Logical columns of the progression table. `Value` is the emitted
/// sequence value; `Step` and `Base` are the progression parameters,
/// queryable as ordinary columns.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Column {
    Value,
    Step,
    Base,
}

///
/// CompareOp
///
/// Order-comparison operators the engine understands. `Is` follows the
/// host's null-tolerant equality and is treated as `Eq` here because the
/// progression columns are never null.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Is,
    Lt,
    Le,
    Ge,
    Gt,
}

///
/// PredicateRequest
///
/// One predicate the host offers for consumption. `Limit` and `Offset`
/// arrive as column-less pagination constraints. `usable` mirrors the
/// host's own judgement of whether the argument will be available at
/// execution time; unusable predicates are never consumed.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PredicateRequest {
    Compare {
        column: Column,
        op: CompareOp,
        usable: bool,
    },
    Limit {
        usable: bool,
    },
    Offset {
        usable: bool,
    },
}

impl PredicateRequest {
    /// A usable comparison predicate on `column`.
    #[must_use]
    pub const fn compare(column: Column, op: CompareOp) -> Self {
        Self::Compare {
            column,
            op,
            usable: true,
        }
    }

    /// A usable row-limit pagination constraint.
    #[must_use]
    pub const fn limit() -> Self {
        Self::Limit { usable: true }
    }

    /// A usable row-offset pagination constraint.
    #[must_use]
    pub const fn offset() -> Self {
        Self::Offset { usable: true }
    }

    /// The same predicate, marked unusable by the host.
    #[must_use]
    pub const fn unusable(self) -> Self {
        match self {
            Self::Compare { column, op, .. } => Self::Compare {
                column,
                op,
                usable: false,
            },
            Self::Limit { .. } => Self::Limit { usable: false },
            Self::Offset { .. } => Self::Offset { usable: false },
        }
    }

    #[must_use]
    pub const fn is_usable(&self) -> bool {
        match self {
            Self::Compare { usable, .. } | Self::Limit { usable } | Self::Offset { usable } => {
                *usable
            }
        }
    }
}

///
/// SlotToken
///
/// One entry of a plan's consumption sequence: which slot the Nth runtime
/// argument feeds. The planner emits tokens in argument order; the
/// resolver replays them against the argument slice.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SlotToken {
    Offset,
    Limit,
    Step,
    Base,
    ValueEq,
    ValueLt,
    ValueLe,
    ValueGe,
    ValueGt,
}

impl SlotToken {
    /// Diagnostic slot this token feeds.
    #[must_use]
    pub const fn slot(self) -> Slot {
        match self {
            Self::Offset => Slot::Offset,
            Self::Limit => Slot::Limit,
            Self::Step => Slot::Step,
            Self::Base => Slot::Base,
            Self::ValueEq | Self::ValueLt | Self::ValueLe | Self::ValueGe | Self::ValueGt => {
                Slot::Value
            }
        }
    }

    pub(crate) const fn is_upper_bound(self) -> bool {
        matches!(self, Self::ValueLt | Self::ValueLe)
    }

    pub(crate) const fn is_lower_bound(self) -> bool {
        matches!(self, Self::ValueGe | Self::ValueGt)
    }
}

///
/// TokenSeq
///
/// Ordered consumption sequence of a plan. Position N names the slot fed
/// by the Nth supplied argument.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
pub struct TokenSeq(#[into_iterator(owned, ref)] Vec<SlotToken>);

impl TokenSeq {
    pub(crate) fn push(&mut self, token: SlotToken) {
        self.0.push(token);
    }
}
