// End-to-end scenarios against a real solver backend.

#![cfg(any(feature = "highs", feature = "coin-cbc"))]

use bevopt::{optimize, OptimizeError, ResolveError, ResourceArgs};

#[test]
fn stocked_pantry_yields_fifty_drinks() {
    let total = optimize(ResourceArgs::positional([100.0, 50.0, 30.0, 40.0])).unwrap();
    assert_eq!(total, 50);
}

#[test]
fn empty_pantry_yields_nothing() {
    let total = optimize(ResourceArgs::positional([0.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn one_positional_and_three_named_yield_fifty_drinks() {
    let total = optimize(
        ResourceArgs::positional([100.0])
            .with_sugar(50.0)
            .with_fruit_puree(40.0)
            .with_lemon_juice(30.0),
    )
    .unwrap();
    assert_eq!(total, 50);
}

#[test]
fn named_override_throttles_the_positional_quantity() {
    let total = optimize(
        ResourceArgs::positional([100.0, 50.0, 30.0, 40.0]).with_water(10.0),
    )
    .unwrap();
    assert!(total < 50);
}

#[test]
fn tightening_any_single_resource_never_increases_the_yield() {
    let full = [100.0, 50.0, 30.0, 40.0];
    let best = optimize(ResourceArgs::positional(full)).unwrap();

    for tightened in 0..full.len() {
        let mut quantities = full;
        quantities[tightened] = 5.0;
        let total = optimize(ResourceArgs::positional(quantities)).unwrap();
        assert!(
            total < best,
            "tightening slot {} gave {} which is not below {}",
            tightened,
            total,
            best
        );
    }
}

#[test]
fn yield_is_monotone_in_water() {
    let mut previous = 0;
    for water in [0.0, 5.0, 10.0, 25.0, 50.0, 100.0, 200.0] {
        let total = optimize(ResourceArgs::positional([water, 50.0, 30.0, 40.0])).unwrap();
        assert!(
            total >= previous,
            "water={} gave {} after {}",
            water,
            total,
            previous
        );
        previous = total;
    }
}

#[test]
fn yield_is_monotone_in_fruit_puree() {
    let mut previous = 0;
    for puree in [0.0, 1.0, 2.0, 10.0, 40.0, 400.0] {
        let total = optimize(ResourceArgs::positional([100.0, 50.0, 30.0, puree])).unwrap();
        assert!(
            total >= previous,
            "fruit_puree={} gave {} after {}",
            puree,
            total,
            previous
        );
        previous = total;
    }
}

#[test]
fn two_resources_fail_with_the_exact_message() {
    let err = optimize(ResourceArgs::positional([100.0, 50.0])).unwrap_err();
    assert_eq!(err.to_string(), "Expected 4 arguments, received 2.");
}

#[test]
fn negative_quantity_is_a_validation_error() {
    let err = optimize(ResourceArgs::positional([100.0, 50.0, 30.0, -1.0])).unwrap_err();
    assert!(matches!(
        err,
        OptimizeError::Resolve(ResolveError::NegativeQuantity { .. })
    ));
}

#[test]
fn fractional_quantities_yield_whole_drinks() {
    // 2J <= 3.5 caps juice at 1; lemonade is capped by lemon juice at 2.
    let total = optimize(ResourceArgs::positional([100.0, 50.0, 2.0, 3.5])).unwrap();
    assert_eq!(total, 3);
}
