//! Unit tests for the validation accumulator and the field adapter.

use std::cell::Cell;

use rstest::rstest;

use super::{Validation, Validator, check, field_validator, try_check, validate};
use crate::Outcome;

fn equals(expected: i32) -> impl Validator<i32, String, String> {
    check(move |value: &i32| (*value != expected).then(|| format!("expected {expected}")))
}

fn passes() -> impl Validator<i32, String, String> {
    check(|_: &i32| None)
}

fn faulting(message: &'static str) -> impl Validator<i32, String, String> {
    try_check(move |_: &i32| Err(message.to_owned()))
}

#[test]
fn a_clean_run_returns_the_value_on_the_happy_arm() {
    let outcome: Validation<i32, String, String> = validate(7, [&passes(), &passes()]);
    assert_eq!(outcome, Outcome::Happy(7));
}

#[test]
fn no_validators_at_all_is_a_clean_run() {
    let rules: [&dyn Validator<i32, String, String>; 0] = [];
    let outcome = validate(7, rules);
    assert_eq!(outcome, Outcome::Happy(7));
}

#[test]
fn failures_accumulate_in_validator_order() {
    let first = equals(1);
    let second = passes();
    let third = equals(2);
    let rules: [&dyn Validator<i32, String, String>; 3] = [&first, &second, &third];

    let outcome = validate(7, rules);
    assert_eq!(
        outcome,
        Outcome::Sad(vec!["expected 1".to_owned(), "expected 2".to_owned()]),
    );
}

#[test]
fn a_faulting_validator_aborts_with_no_partial_list() {
    let prior_failure = equals(1);
    let broken = faulting("db down");
    let never_reached = check(|_: &i32| -> Option<String> { panic!("must not run") });
    let rules: [&dyn Validator<i32, String, String>; 3] =
        [&prior_failure, &broken, &never_reached];

    let outcome = validate(7, rules);
    assert_eq!(outcome, Outcome::Fault("db down".to_owned()));
}

#[rstest]
#[case::happy(Outcome::Happy(7), true)]
#[case::sad(Outcome::Sad(vec!["earlier".to_owned()]), false)]
#[case::fault(Outcome::Fault("broken".to_owned()), false)]
fn a_chained_round_runs_only_after_a_fully_clean_first_round(
    #[case] first_round: Validation<i32, String, String>,
    #[case] expect_second_round: bool,
) {
    let ran = Cell::new(false);
    let witness = check(|_: &i32| {
        ran.set(true);
        None::<String>
    });

    let expected = first_round.clone();
    let outcome = first_round.validate([&witness]);
    assert_eq!(outcome, expected);
    assert_eq!(ran.get(), expect_second_round);
}

#[test]
fn a_second_round_accumulates_from_the_validated_value() {
    let outcome: Validation<i32, String, String> = validate(7, [&passes()]).validate([&equals(1)]);
    assert_eq!(outcome, Outcome::Sad(vec!["expected 1".to_owned()]));
}

#[derive(Clone)]
struct Record {
    name: String,
    age: i32,
}

#[test]
fn field_validator_surfaces_the_aggregated_field_failures() {
    let not_blank = check(|name: &String| {
        name.trim()
            .is_empty()
            .then(|| "name must not be blank".to_owned())
    });
    let name_rules = field_validator(|record: &Record| record.name.clone(), [not_blank]);

    let record = Record {
        name: String::new(),
        age: 40,
    };
    let outcome: Validation<Record, String, String> = validate(record, [&name_rules]);
    assert_eq!(
        outcome.into_sad(),
        Some(vec!["name must not be blank".to_owned()]),
    );
}

#[test]
fn field_validator_passes_a_valid_field_through() {
    let name_rules = field_validator(
        |record: &Record| record.name.clone(),
        [check(|name: &String| {
            name.trim()
                .is_empty()
                .then(|| "name must not be blank".to_owned())
        })],
    );
    let age_rules = field_validator(
        |record: &Record| record.age,
        [check(|age: &i32| (*age < 0).then(|| "age must not be negative".to_owned()))],
    );
    let rules: [&dyn Validator<Record, String, String>; 2] = [&name_rules, &age_rules];

    let record = Record {
        name: "Grace".to_owned(),
        age: -1,
    };
    let outcome = validate(record, rules);
    assert_eq!(
        outcome.into_sad(),
        Some(vec!["age must not be negative".to_owned()]),
    );
}

#[test]
fn a_faulting_field_validator_aborts_the_whole_object_run() {
    let name_rules = field_validator(
        |record: &Record| record.name.clone(),
        [try_check(|_: &String| -> Result<Option<String>, String> {
            Err("db down".to_owned())
        })],
    );
    let rules: [&dyn Validator<Record, String, String>; 1] = [&name_rules];

    let record = Record {
        name: "Grace".to_owned(),
        age: 40,
    };
    let outcome = validate(record, rules);
    assert_eq!(outcome.into_fault(), Some("db down".to_owned()));
}
