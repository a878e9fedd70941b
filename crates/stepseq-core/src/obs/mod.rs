//! Observability: process-local counters behind a sink boundary.
//!
//! Engine logic never writes counter state directly; every event flows
//! through [`MetricsSink`]. The default sink accumulates into
//! thread-local state; tests install a scoped override to capture events.

pub(crate) mod metrics;
pub(crate) mod sink;

pub use metrics::{EventState, PlanCounters, ResolutionCounters, metrics_reset, metrics_snapshot};
pub use sink::{MetricsEvent, MetricsSink, PlanKind, ResolveOutcome, with_sink};

pub(crate) use sink::record;
