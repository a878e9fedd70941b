use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
///
/// Ephemeral, in-memory counters for planning, resolution, and
/// enumeration activity on this thread.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub plans: PlanCounters,
    pub resolutions: ResolutionCounters,
    pub enumerations: u64,
    pub rows_emitted: u64,
}

///
/// PlanCounters
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlanCounters {
    pub unbounded: u64,
    pub bounded_below: u64,
    pub bounded_above: u64,
    pub bounded_both: u64,
    pub point: u64,
}

///
/// ResolutionCounters
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResolutionCounters {
    pub ranges: u64,
    pub empties: u64,
    pub errors: u64,
}

thread_local! {
    static STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Point-in-time copy of this thread's counters.
#[must_use]
pub fn metrics_snapshot() -> EventState {
    STATE.with(|state| state.borrow().clone())
}

/// Reset this thread's counters to zero.
pub fn metrics_reset() {
    STATE.with(|state| *state.borrow_mut() = EventState::default());
}
