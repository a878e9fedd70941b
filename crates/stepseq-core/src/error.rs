use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Slot
///
/// Logical parameter slot named by error diagnostics. Every fatal error
/// points at the slot whose argument triggered it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Slot {
    Value,
    Step,
    Base,
    Offset,
    Limit,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Value => "value",
            Self::Step => "step",
            Self::Base => "base",
            Self::Offset => "offset",
            Self::Limit => "limit",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorKind
///
/// Stable classification of fatal resolution failures. Infeasible
/// constraint sets are never errors; they resolve to an empty range.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    TypeMismatch,
    StepOutOfRange,
    InvariantViolation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TypeMismatch => "type_mismatch",
            Self::StepOutOfRange => "step_out_of_range",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// Error
///
/// Fatal configuration errors surfaced to the host. These abort the
/// execution entirely; no partial rows are produced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// A non-integral or non-numeric value was supplied where an exact
    /// integer parameter is required.
    #[error("{slot} parameter has wrong type")]
    TypeMismatch { slot: Slot },

    /// Step magnitude of zero, or a magnitude that cannot be represented
    /// as a positive signed 64-bit value.
    #[error("step parameter out of range")]
    StepOutOfRange,

    /// The host supplied an argument list that does not match the plan's
    /// token sequence. A host-contract violation, not a query outcome.
    #[error("plan invariant violated: expected {expected} arguments, found {found}")]
    PlanShape { expected: usize, found: usize },
}

impl Error {
    pub(crate) const fn type_mismatch(slot: Slot) -> Self {
        Self::TypeMismatch { slot }
    }

    pub(crate) const fn plan_shape(expected: usize, found: usize) -> Self {
        Self::PlanShape { expected, found }
    }

    /// Classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::StepOutOfRange => ErrorKind::StepOutOfRange,
            Self::PlanShape { .. } => ErrorKind::InvariantViolation,
        }
    }

    /// The parameter slot that triggered this error, if one did.
    #[must_use]
    pub const fn slot(&self) -> Option<Slot> {
        match self {
            Self::TypeMismatch { slot } => Some(*slot),
            Self::StepOutOfRange => Some(Slot::Step),
            Self::PlanShape { .. } => None,
        }
    }

    #[must_use]
    pub fn display_with_kind(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, Slot};

    #[test]
    fn type_mismatch_names_the_offending_slot() {
        let err = Error::type_mismatch(Slot::Step);
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.slot(), Some(Slot::Step));
        assert_eq!(err.to_string(), "step parameter has wrong type");
    }

    #[test]
    fn step_out_of_range_points_at_the_step_slot() {
        let err = Error::StepOutOfRange;
        assert_eq!(err.kind(), ErrorKind::StepOutOfRange);
        assert_eq!(err.slot(), Some(Slot::Step));
        assert_eq!(err.to_string(), "step parameter out of range");
    }

    #[test]
    fn plan_shape_is_an_invariant_violation_without_a_slot() {
        let err = Error::plan_shape(3, 1);
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.slot(), None);
        assert_eq!(
            err.display_with_kind(),
            "invariant_violation: plan invariant violated: expected 3 arguments, found 1"
        );
    }
}
