//! A small algebra for representing the outcome of a business operation as
//! exactly one of three mutually exclusive cases: a successful result, an
//! expected business-rule failure, or an unexpected technical failure.
//!
//! The [`Outcome`] value is the core: a tri-state sum type whose combinators
//! (`then`, `map`, `peek`, …) chain the happy path while sad and fault
//! outcomes short-circuit past every step untouched. Fallible steps use the
//! `try_` combinator forms, whose closures return `Result` and whose
//! failures are captured as faults at that step instead of propagating.
//! [Biased projections](projection) re-interpret the same value so the sad
//! or fault arm can be transformed, logged, or recovered from, and the
//! [validation accumulator](validation) runs many independent checks against
//! a value and collects every business failure rather than stopping at the
//! first.
//!
//! # Examples
//!
//! A flow chains steps, recovers where the caller decides to, and terminates
//! with a total three-way fold:
//!
//! ```
//! use outcome_flow::Outcome;
//!
//! fn lookup_discount(code: &str) -> Result<u32, String> {
//!     match code {
//!         "WELCOME" => Ok(10),
//!         _ => Err(format!("pricing service rejected {code}")),
//!     }
//! }
//!
//! let rendered = Outcome::attempt(|| lookup_discount("WELCOME"))
//!     .ensure(|discount| {
//!         if *discount > 50 {
//!             Ok(Some("discount too generous".to_owned()))
//!         } else {
//!             Ok(None)
//!         }
//!     })
//!     .map(|discount| format!("{discount}% off"))
//!     .join(
//!         |offer| offer,
//!         |sad| format!("not applied: {sad}"),
//!         |_fault| "technical difficulties, try again".to_owned(),
//!     );
//! assert_eq!(rendered, "10% off");
//! ```
//!
//! Validation accumulates every business failure in rule order:
//!
//! ```
//! use outcome_flow::{Validator, check, validate};
//!
//! struct Form {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! fn not_blank(
//!     field: &'static str,
//!     extract: impl Fn(&Form) -> &String,
//! ) -> impl Validator<Form, String, String> {
//!     check(move |form: &Form| {
//!         extract(form)
//!             .trim()
//!             .is_empty()
//!             .then(|| format!("{field} must not be blank"))
//!     })
//! }
//!
//! let first = not_blank("first name", |form: &Form| &form.first_name);
//! let last = not_blank("last name", |form: &Form| &form.last_name);
//! let rules: [&dyn Validator<Form, String, String>; 2] = [&first, &last];
//!
//! let form = Form {
//!     first_name: "Ada".into(),
//!     last_name: String::new(),
//! };
//! let outcome = validate(form, rules);
//! assert_eq!(
//!     outcome.into_sad(),
//!     Some(vec!["last name must not be blank".to_owned()]),
//! );
//! ```

mod error;
mod outcome;
pub mod projection;
mod result_ext;
pub mod validation;

pub use error::NotHappy;
pub use outcome::Outcome;
pub use projection::{FaultProjection, SadProjection};
pub use result_ext::ResultOutcomeExt;
pub use validation::{
    Check, FieldValidator, TryCheck, Validation, Validator, check, field_validator, try_check,
    validate,
};
