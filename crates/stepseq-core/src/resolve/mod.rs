//! Range resolution: replay a plan's consumption sequence against the
//! runtime arguments and produce the exact `(start, stop, signed step)`
//! triple, or decide the result set is empty.
//!
//! Resolution is all-or-nothing per execution: infeasible constraint sets
//! resolve to [`Resolution::Empty`], never to an error; only a malformed
//! step or a wrongly typed exact parameter aborts with [`Error`].

mod bounds;

#[cfg(test)]
mod tests;

use crate::{
    arith::{add_magnitude, sub_magnitude, unsigned_difference},
    error::Error,
    obs::{self, MetricsEvent, ResolveOutcome},
    plan::{Plan, SlotToken},
    table::TableDefaults,
    value::Value,
};
use bounds::{BoundConversion, Interval};
use serde::{Deserialize, Serialize};

/// Progression parameters when the query constrains neither.
const DEFAULT_STEP: i64 = 1;
const DEFAULT_BASE: i64 = 0;

///
/// Resolution
///
/// Outcome of one successful resolution: a concrete range to enumerate,
/// or the empty result set.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Resolution {
    Range(ResolvedRange),
    Empty,
}

impl Resolution {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn as_range(&self) -> Option<&ResolvedRange> {
        match self {
            Self::Range(range) => Some(range),
            Self::Empty => None,
        }
    }
}

///
/// ResolvedRange
///
/// Fully determines one enumeration: `start` is the first emitted value,
/// `stop` the last (inclusive), `signed_step` the per-advance increment
/// carrying the walk direction. `step` and `base` are the effective
/// progression parameters as supplied, exposed as row columns.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResolvedRange {
    pub start: i64,
    pub stop: i64,
    pub signed_step: i64,
    pub step: i64,
    pub base: i64,
}

///
/// ExactSlots
///
/// Exact-match parameter slots collected during the token walk, seeded
/// from the table defaults. `None` means "not constrained"; the effective
/// accessors apply the documented defaults and sentinel tolerance.
///

#[derive(Clone, Copy, Debug)]
struct ExactSlots {
    offset: Option<i64>,
    limit: Option<i64>,
    step: Option<i64>,
    base: Option<i64>,
}

impl ExactSlots {
    const fn seeded(defaults: &TableDefaults) -> Self {
        Self {
            offset: None,
            limit: None,
            step: defaults.step,
            base: defaults.base,
        }
    }

    const fn effective_step(&self) -> i64 {
        match self.step {
            Some(v) => v,
            None => DEFAULT_STEP,
        }
    }

    const fn effective_base(&self) -> i64 {
        match self.base {
            Some(v) => v,
            None => DEFAULT_BASE,
        }
    }

    /// Rows to skip. Negative host values are tolerated and mean "none".
    fn effective_offset(&self) -> u64 {
        self.offset.map_or(0, |v| u64::try_from(v).unwrap_or(0))
    }

    /// Row cap. Negative host values are tolerated and mean "unlimited".
    fn effective_limit(&self) -> Option<u64> {
        self.limit.and_then(|v| u64::try_from(v).ok())
    }
}

/// Resolve one execution's constraint values into a range.
///
/// `args` must match the plan's token sequence position for position;
/// anything else is a host-contract violation.
pub fn resolve(
    plan: &Plan,
    args: &[Value],
    defaults: &TableDefaults,
) -> Result<Resolution, Error> {
    let result = resolve_range(plan, args, defaults);

    let outcome = match &result {
        Ok(Resolution::Range(_)) => ResolveOutcome::Range,
        Ok(Resolution::Empty) => ResolveOutcome::Empty,
        Err(_) => ResolveOutcome::Error,
    };
    obs::record(MetricsEvent::Resolve { outcome });

    result
}

fn resolve_range(
    plan: &Plan,
    args: &[Value],
    defaults: &TableDefaults,
) -> Result<Resolution, Error> {
    let tokens = plan.tokens();
    if tokens.len() != args.len() {
        return Err(Error::plan_shape(tokens.len(), args.len()));
    }

    let mut exact = ExactSlots::seeded(defaults);
    let mut interval = Interval::FULL;

    for (token, arg) in tokens.iter().zip(args) {
        match token {
            SlotToken::Offset | SlotToken::Limit | SlotToken::Step | SlotToken::Base => {
                let Some(value) = arg.as_lossless_int() else {
                    return Err(Error::type_mismatch(token.slot()));
                };
                let slot = match token {
                    SlotToken::Offset => &mut exact.offset,
                    SlotToken::Limit => &mut exact.limit,
                    SlotToken::Step => &mut exact.step,
                    _ => &mut exact.base,
                };
                if !assign_exact(slot, value) {
                    return Ok(Resolution::Empty);
                }
            }

            SlotToken::ValueEq => {
                // A non-integral equality probe can never match a sequence
                // member: empty, not an error.
                let Some(value) = arg.as_lossless_int() else {
                    return Ok(Resolution::Empty);
                };
                if !interval.collapse_to(value) {
                    return Ok(Resolution::Empty);
                }
            }

            SlotToken::ValueLt | SlotToken::ValueLe => {
                match bounds::upper_bound(arg, *token == SlotToken::ValueLt) {
                    BoundConversion::Bound(value) => {
                        if !interval.apply_upper(value) {
                            return Ok(Resolution::Empty);
                        }
                    }
                    BoundConversion::Slack => {}
                    BoundConversion::Infeasible => return Ok(Resolution::Empty),
                }
            }

            SlotToken::ValueGe | SlotToken::ValueGt => {
                match bounds::lower_bound(arg, *token == SlotToken::ValueGt) {
                    BoundConversion::Bound(value) => {
                        if !interval.apply_lower(value) {
                            return Ok(Resolution::Empty);
                        }
                    }
                    BoundConversion::Slack => {}
                    BoundConversion::Infeasible => return Ok(Resolution::Empty),
                }
            }
        }
    }

    let step = exact.effective_step();
    if step == 0 || step == i64::MIN {
        return Err(Error::StepOutOfRange);
    }
    let magnitude = step.unsigned_abs();
    let base = exact.effective_base();

    if magnitude > 1 && !align_to_lattice(&mut interval, base, magnitude) {
        return Ok(Resolution::Empty);
    }

    // Number of whole steps spanned by the aligned interval (zero-based).
    let mut length = unsigned_difference(interval.upper, interval.lower) / magnitude;

    let offset = exact.effective_offset();
    if offset > length {
        return Ok(Resolution::Empty);
    }

    let limit = exact.effective_limit();
    if limit == Some(0) {
        return Ok(Resolution::Empty);
    }

    // The step check above caps the magnitude at i64::MAX.
    let signed = magnitude as i64;

    let range = if plan.direction().is_descending() {
        let mut start = interval.upper;
        let mut stop = interval.lower;
        if offset > 0 {
            start = sub_magnitude(start, offset * magnitude);
            length -= offset;
        }
        if let Some(limit) = limit
            && limit <= length
        {
            stop = sub_magnitude(start, (limit - 1) * magnitude);
        }
        ResolvedRange {
            start,
            stop,
            signed_step: -signed,
            step,
            base,
        }
    } else {
        let mut start = interval.lower;
        let mut stop = interval.upper;
        if offset > 0 {
            start = add_magnitude(start, offset * magnitude);
            length -= offset;
        }
        if let Some(limit) = limit
            && limit <= length
        {
            stop = add_magnitude(start, (limit - 1) * magnitude);
        }
        ResolvedRange {
            start,
            stop,
            signed_step: signed,
            step,
            base,
        }
    };

    Ok(Resolution::Range(range))
}

/// Record one exact-slot value; `false` means a conflicting duplicate.
const fn assign_exact(slot: &mut Option<i64>, value: i64) -> bool {
    match *slot {
        Some(existing) => existing == value,
        None => {
            *slot = Some(value);
            true
        }
    }
}

/// Shrink the interval onto the congruence lattice `{base + k * |step|}`
/// intersected with the signed 64-bit domain. Returns `false` when no
/// lattice member lies inside the interval.
fn align_to_lattice(interval: &mut Interval, base: i64, magnitude: u64) -> bool {
    // Smallest lattice member representable in the domain; the aligned
    // upper bound steps down onto the lattice relative to it.
    let lowest = sub_magnitude(
        base,
        unsigned_difference(base, i64::MIN) / magnitude * magnitude,
    );
    if interval.upper < lowest {
        return false;
    }
    interval.upper = add_magnitude(
        lowest,
        unsigned_difference(interval.upper, lowest) / magnitude * magnitude,
    );

    // Largest lattice member representable in the domain; the aligned
    // lower bound steps up onto the lattice relative to it.
    let highest = add_magnitude(
        base,
        unsigned_difference(i64::MAX, base) / magnitude * magnitude,
    );
    if interval.lower > highest {
        return false;
    }
    interval.lower = sub_magnitude(
        highest,
        unsigned_difference(highest, interval.lower) / magnitude * magnitude,
    );

    interval.lower <= interval.upper
}
