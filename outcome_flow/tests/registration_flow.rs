//! End-to-end validation of a registration form, composed from per-field
//! validators built out of a shared naming convention.

use anyhow::anyhow;
use outcome_flow::{Validation, Validator, check, field_validator, try_check, validate};

#[derive(Debug, Clone)]
struct RegistrationForm {
    first_name: String,
    last_name: String,
    age: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidationError(String);

fn form() -> RegistrationForm {
    RegistrationForm {
        first_name: "first".to_owned(),
        last_name: String::new(),
        age: "25".to_owned(),
    }
}

/// "X must not be blank", reused across every named field.
fn not_blank(
    field: &'static str,
    extract: impl Fn(&RegistrationForm) -> String,
) -> impl Validator<RegistrationForm, ValidationError, anyhow::Error> {
    field_validator(
        extract,
        [check(move |value: &String| {
            value
                .trim()
                .is_empty()
                .then(|| ValidationError(format!("{field} must not be blank")))
        })],
    )
}

#[test]
fn only_the_blank_field_fails() {
    let age = not_blank("age", |form: &RegistrationForm| form.age.clone());
    let last_name = not_blank("last name", |form: &RegistrationForm| {
        form.last_name.clone()
    });
    let first_name = not_blank("first name", |form: &RegistrationForm| {
        form.first_name.clone()
    });
    let rules: [&dyn Validator<RegistrationForm, ValidationError, anyhow::Error>; 3] =
        [&age, &last_name, &first_name];

    let outcome = validate(form(), rules);
    assert_eq!(
        outcome.into_sad(),
        Some(vec![ValidationError(
            "last name must not be blank".to_owned()
        )]),
    );
}

#[test]
fn a_validator_hitting_the_database_faults_the_whole_run() {
    let age = not_blank("age", |form: &RegistrationForm| form.age.clone());
    let unique_email = try_check(
        |_: &RegistrationForm| -> Result<Option<ValidationError>, anyhow::Error> {
            Err(anyhow!("db down"))
        },
    );
    let never_reached = check(|_: &RegistrationForm| -> Option<ValidationError> {
        panic!("validators after a fault must not run")
    });
    let rules: [&dyn Validator<RegistrationForm, ValidationError, anyhow::Error>; 3] =
        [&age, &unique_email, &never_reached];

    let outcome = validate(form(), rules);
    let fault = outcome.into_fault().expect("expected a technical failure");
    assert_eq!(fault.to_string(), "db down");
}

#[test]
fn expensive_validators_run_only_after_the_cheap_round_is_clean() {
    let age = not_blank("age", |form: &RegistrationForm| form.age.clone());
    let last_name = not_blank("last name", |form: &RegistrationForm| {
        form.last_name.clone()
    });
    let expensive = try_check(
        |_: &RegistrationForm| -> Result<Option<ValidationError>, anyhow::Error> {
            panic!("expensive round must not run after a failed cheap round")
        },
    );

    let cheap: [&dyn Validator<RegistrationForm, ValidationError, anyhow::Error>; 2] =
        [&age, &last_name];
    let outcome = validate(form(), cheap).validate([&expensive]);
    assert_eq!(
        outcome.into_sad(),
        Some(vec![ValidationError(
            "last name must not be blank".to_owned()
        )]),
    );
}

#[test]
fn the_flow_renders_one_page_per_arm() {
    fn render(outcome: Validation<RegistrationForm, ValidationError, anyhow::Error>) -> String {
        outcome.join(
            |_| "You joined!".to_owned(),
            |errors| {
                let messages: Vec<&str> = errors.iter().map(|error| error.0.as_str()).collect();
                format!("Please fix the errors: {}", messages.join(", "))
            },
            |_| "There was a technical failure. Please try again.".to_owned(),
        )
    }

    let age = not_blank("age", |form: &RegistrationForm| form.age.clone());
    let last_name = not_blank("last name", |form: &RegistrationForm| {
        form.last_name.clone()
    });
    let rules: [&dyn Validator<RegistrationForm, ValidationError, anyhow::Error>; 2] =
        [&age, &last_name];

    assert_eq!(
        render(validate(form(), rules)),
        "Please fix the errors: last name must not be blank",
    );

    let valid = RegistrationForm {
        last_name: "last".to_owned(),
        ..form()
    };
    assert_eq!(render(validate(valid, rules)), "You joined!");
}
