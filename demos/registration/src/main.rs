//! Validates a registration form supplied on the command line and renders
//! one page per outcome arm.
//!
//! ```text
//! cargo run -p registration -- --first-name Ada --last-name Lovelace --age 36
//! ```

use clap::Parser;
use outcome_flow::{Validation, Validator, check, field_validator, validate};

#[derive(Debug, Clone, Parser)]
struct RegistrationForm {
    /// Given name of the registrant.
    #[arg(long, default_value = "")]
    first_name: String,

    /// Family name of the registrant.
    #[arg(long, default_value = "")]
    last_name: String,

    /// Age of the registrant, in years.
    #[arg(long, default_value = "")]
    age: String,
}

/// "X must not be blank", reused across every named field.
fn not_blank(
    field: &'static str,
    extract: impl Fn(&RegistrationForm) -> String,
) -> impl Validator<RegistrationForm, String, anyhow::Error> {
    field_validator(
        extract,
        [check(move |value: &String| {
            value
                .trim()
                .is_empty()
                .then(|| format!("{field} must not be blank"))
        })],
    )
}

fn validate_form(form: RegistrationForm) -> Validation<RegistrationForm, String, anyhow::Error> {
    let first_name = not_blank("first name", |form: &RegistrationForm| {
        form.first_name.clone()
    });
    let last_name = not_blank("last name", |form: &RegistrationForm| {
        form.last_name.clone()
    });
    let age = not_blank("age", |form: &RegistrationForm| form.age.clone());
    let rules: [&dyn Validator<RegistrationForm, String, anyhow::Error>; 3] =
        [&first_name, &last_name, &age];
    validate(form, rules)
}

#[expect(clippy::print_stdout, reason = "demo writes its page to stdout")]
fn main() {
    let form = RegistrationForm::parse();
    let page = validate_form(form).join(
        |form| format!("Welcome, {} {}!", form.first_name, form.last_name),
        |errors| format!("Please fix the errors: {}", errors.join(", ")),
        |fault| format!("There was a technical failure, please try again ({fault})"),
    );
    println!("{page}");
}
