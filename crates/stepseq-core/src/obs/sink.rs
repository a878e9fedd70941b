//! Metrics sink boundary.
//!
//! Engine logic MUST NOT depend on `obs::metrics` directly. All
//! instrumentation flows through [`MetricsEvent`] and [`MetricsSink`];
//! this module is the only bridge to the thread-local counter state.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// PlanKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlanKind {
    Unbounded,
    BoundedBelow,
    BoundedAbove,
    BoundedBoth,
    Point,
}

///
/// ResolveOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolveOutcome {
    Range,
    Empty,
    Error,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Plan { kind: PlanKind },
    Resolve { outcome: ResolveOutcome },
    EnumerationFinished { rows: u64 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
///
/// Default sink writing into the thread-local counter state. Active
/// whenever no scoped override is installed.
///

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|state| match event {
            MetricsEvent::Plan { kind } => {
                let counter = match kind {
                    PlanKind::Unbounded => &mut state.plans.unbounded,
                    PlanKind::BoundedBelow => &mut state.plans.bounded_below,
                    PlanKind::BoundedAbove => &mut state.plans.bounded_above,
                    PlanKind::BoundedBoth => &mut state.plans.bounded_both,
                    PlanKind::Point => &mut state.plans.point,
                };
                *counter += 1;
            }
            MetricsEvent::Resolve { outcome } => {
                let counter = match outcome {
                    ResolveOutcome::Range => &mut state.resolutions.ranges,
                    ResolveOutcome::Empty => &mut state.resolutions.empties,
                    ResolveOutcome::Error => &mut state.resolutions.errors,
                };
                *counter += 1;
            }
            MetricsEvent::EnumerationFinished { rows } => {
                state.enumerations += 1;
                state.rows_emitted += rows;
            }
        });
    }
}

/// Route one event through the active sink.
pub(crate) fn record(event: MetricsEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match override_sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Run `f` with `sink` installed as this thread's metrics sink.
///
/// The previous sink is restored when `f` returns or unwinds.
pub fn with_sink<R>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Rc<dyn MetricsSink>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = previous);
        }
    }

    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _restore = Restore(previous);
    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{MetricsEvent, MetricsSink, PlanKind, record, with_sink};
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct CaptureSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CaptureSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn scoped_sink_captures_events_and_restores() {
        let capture = Rc::new(CaptureSink::default());

        let inner = Rc::clone(&capture);
        with_sink(inner, || {
            record(MetricsEvent::Plan {
                kind: PlanKind::Point,
            });
            record(MetricsEvent::EnumerationFinished { rows: 3 });
        });

        assert_eq!(
            *capture.events.borrow(),
            vec![
                MetricsEvent::Plan {
                    kind: PlanKind::Point
                },
                MetricsEvent::EnumerationFinished { rows: 3 },
            ]
        );

        // Outside the scope the global sink is back in charge; this must
        // not land in the capture buffer.
        record(MetricsEvent::EnumerationFinished { rows: 1 });
        assert_eq!(capture.events.borrow().len(), 2);
    }
}
