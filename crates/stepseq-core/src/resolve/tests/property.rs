use super::{run, shape};
use crate::{
    arith::unsigned_difference,
    cursor::Cursor,
    plan::{Column, CompareOp, OrderRequest, PlanRequest, PredicateRequest},
    value::Value,
};
use proptest::prelude::*;

fn bounded_shape() -> PlanRequest {
    shape(vec![
        PredicateRequest::compare(Column::Step, CompareOp::Eq),
        PredicateRequest::compare(Column::Base, CompareOp::Eq),
        PredicateRequest::compare(Column::Value, CompareOp::Ge),
        PredicateRequest::compare(Column::Value, CompareOp::Le),
    ])
}

fn enumerate(request: &PlanRequest, args: &[Value]) -> Vec<i64> {
    let resolution = run(request, args).unwrap();
    Cursor::new(resolution).map(|row| row.value).collect()
}

/// Reference model: the congruence-class members inside `[lo, hi]`, in
/// ascending order.
fn model(step: i64, base: i64, lo: i64, hi: i64) -> Vec<i64> {
    let magnitude = step.abs();
    (lo..=hi)
        .filter(|v| (v - base).rem_euclid(magnitude) == 0)
        .collect()
}

fn arb_step() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..=50, -50i64..=-1]
}

proptest! {
    #[test]
    fn emitted_values_match_the_congruence_model(
        step in arb_step(),
        base in -300i64..=300,
        lo in -200i64..=200,
        width in 0i64..=200,
    ) {
        let hi = lo + width;
        let emitted = enumerate(
            &bounded_shape(),
            &[Value::Int(step), Value::Int(base), Value::Int(lo), Value::Int(hi)],
        );

        prop_assert_eq!(emitted, model(step, base, lo, hi));
    }

    #[test]
    fn descending_enumeration_reverses_ascending(
        step in arb_step(),
        base in -300i64..=300,
        lo in -200i64..=200,
        width in 0i64..=200,
    ) {
        let hi = lo + width;
        let args = [Value::Int(step), Value::Int(base), Value::Int(lo), Value::Int(hi)];

        let ascending = enumerate(&bounded_shape(), &args);
        let mut descending = enumerate(
            &bounded_shape().with_order(OrderRequest::desc(Column::Value)),
            &args,
        );
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn pagination_equals_skip_and_take(
        step in 1i64..=20,
        base in -100i64..=100,
        lo in -150i64..=150,
        width in 0i64..=150,
        offset in 0i64..=40,
        limit in 0i64..=40,
    ) {
        let hi = lo + width;
        let unpaged = enumerate(
            &bounded_shape(),
            &[Value::Int(step), Value::Int(base), Value::Int(lo), Value::Int(hi)],
        );

        let paged_shape = shape(vec![
            PredicateRequest::compare(Column::Step, CompareOp::Eq),
            PredicateRequest::compare(Column::Base, CompareOp::Eq),
            PredicateRequest::compare(Column::Value, CompareOp::Ge),
            PredicateRequest::compare(Column::Value, CompareOp::Le),
            PredicateRequest::offset(),
            PredicateRequest::limit(),
        ]);
        let paged = enumerate(
            &paged_shape,
            &[
                Value::Int(step),
                Value::Int(base),
                Value::Int(lo),
                Value::Int(hi),
                Value::Int(offset),
                Value::Int(limit),
            ],
        );

        let expected: Vec<i64> = unpaged
            .into_iter()
            .skip(usize::try_from(offset).unwrap())
            .take(usize::try_from(limit).unwrap())
            .collect();
        prop_assert_eq!(paged, expected);
    }

    #[test]
    fn redundant_looser_bounds_do_not_change_the_resolution(
        lo in -200i64..=200,
        width in 0i64..=200,
        lower_slack in 0i64..=500,
        upper_slack in 0i64..=500,
    ) {
        let hi = lo + width;
        let tight = shape(vec![
            PredicateRequest::compare(Column::Value, CompareOp::Ge),
            PredicateRequest::compare(Column::Value, CompareOp::Le),
        ]);
        let loose = shape(vec![
            PredicateRequest::compare(Column::Value, CompareOp::Ge),
            PredicateRequest::compare(Column::Value, CompareOp::Le),
            PredicateRequest::compare(Column::Value, CompareOp::Ge),
            PredicateRequest::compare(Column::Value, CompareOp::Le),
        ]);

        let tight_result = run(&tight, &[Value::Int(lo), Value::Int(hi)]);
        let loose_result = run(
            &loose,
            &[
                Value::Int(lo),
                Value::Int(hi),
                Value::Int(lo - lower_slack),
                Value::Int(hi + upper_slack),
            ],
        );

        prop_assert_eq!(tight_result, loose_result);
    }

    #[test]
    fn unsigned_difference_matches_the_wide_model(a in any::<i64>(), b in any::<i64>()) {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let wide = i128::from(high) - i128::from(low);

        prop_assert_eq!(u128::from(unsigned_difference(high, low)), wide.unsigned_abs());
    }
}
