mod property;

use crate::{
    error::Error,
    plan::{Plan, PlanRequest, PredicateRequest},
    resolve::{Resolution, resolve},
    table::TableDefaults,
    value::Value,
};

/// Plan a shape and resolve it against `args` with no table defaults.
fn run(request: &PlanRequest, args: &[Value]) -> Result<Resolution, Error> {
    let plan = Plan::build(request);
    resolve(&plan, args, &TableDefaults::new())
}

/// Shorthand for a shape with no requested order.
fn shape(predicates: Vec<PredicateRequest>) -> PlanRequest {
    PlanRequest::new(predicates)
}
