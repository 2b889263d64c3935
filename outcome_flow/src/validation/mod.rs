//! The validation accumulator.
//!
//! Where [`Outcome::then`] short-circuits on the first failure, [`validate`]
//! runs every check against the value and collects all business-rule
//! failures into one ordered list. Only a technical failure aborts the run:
//! a faulting validator returns `Fault` immediately and no partial failure
//! list is retained.
//!
//! Checks implement [`Validator`]. Plain closures are lifted with [`check`]
//! (infallible) or [`try_check`] (fallible), and heterogeneous rule sets are
//! expressed as `Vec<Box<dyn Validator<..>>>`. Validation of a sub-field of
//! a larger structure composes through [`FieldValidator`].

mod field;

pub use field::{FieldValidator, field_validator};

use crate::Outcome;

/// An outcome whose sad arm is the ordered list of validation failures.
///
/// The list is never empty: a clean validation run is represented by the
/// happy arm instead.
pub type Validation<H, S, F> = Outcome<H, Vec<S>, F>;

/// A single validation rule run against a borrowed value.
///
/// A validator yields zero or more business failures, or aborts with a
/// technical failure. Single-check rules produce at most one failure;
/// composed rules such as [`FieldValidator`] may produce several.
pub trait Validator<H, S, F> {
    /// Runs the rule against `value`.
    ///
    /// # Errors
    ///
    /// Returns the technical failure raised while evaluating the rule.
    fn run(&self, value: &H) -> Result<Vec<S>, F>;
}

impl<H, S, F, V> Validator<H, S, F> for &V
where
    V: Validator<H, S, F> + ?Sized,
{
    fn run(&self, value: &H) -> Result<Vec<S>, F> {
        (**self).run(value)
    }
}

impl<H, S, F, V> Validator<H, S, F> for Box<V>
where
    V: Validator<H, S, F> + ?Sized,
{
    fn run(&self, value: &H) -> Result<Vec<S>, F> {
        (**self).run(value)
    }
}

/// A [`Validator`] built from an infallible closure by [`check`].
#[derive(Debug, Clone)]
pub struct Check<T>(T);

impl<H, S, F, T> Validator<H, S, F> for Check<T>
where
    T: Fn(&H) -> Option<S>,
{
    fn run(&self, value: &H) -> Result<Vec<S>, F> {
        Ok((self.0)(value).into_iter().collect())
    }
}

/// Lifts a closure returning an optional failure into a [`Validator`].
///
/// # Examples
///
/// ```
/// use outcome_flow::{Outcome, check, validate};
///
/// let not_blank = check(|name: &String| {
///     name.trim().is_empty().then(|| "name must not be blank".to_owned())
/// });
///
/// let outcome: Outcome<String, Vec<String>, String> =
///     validate(String::from("  "), [&not_blank]);
/// assert_eq!(outcome, Outcome::Sad(vec!["name must not be blank".into()]));
/// ```
pub const fn check<T>(rule: T) -> Check<T> {
    Check(rule)
}

/// A [`Validator`] built from a fallible closure by [`try_check`].
#[derive(Debug, Clone)]
pub struct TryCheck<T>(T);

impl<H, S, F, T> Validator<H, S, F> for TryCheck<T>
where
    T: Fn(&H) -> Result<Option<S>, F>,
{
    fn run(&self, value: &H) -> Result<Vec<S>, F> {
        Ok((self.0)(value)?.into_iter().collect())
    }
}

/// Lifts a fallible closure into a [`Validator`].
///
/// An `Err` from the closure aborts the surrounding validation run with a
/// fault.
pub const fn try_check<T>(rule: T) -> TryCheck<T> {
    TryCheck(rule)
}

/// Runs every validator against `value`, accumulating business failures.
///
/// Validators run in order. Each recorded failure is appended to the list in
/// execution order; a faulting validator aborts immediately and no partial
/// list is observable. If no validator fails, the value itself is returned
/// on the happy arm.
///
/// # Examples
///
/// ```
/// use outcome_flow::{Outcome, Validator, check, validate};
///
/// let positive = check(|n: &i32| (*n <= 0).then(|| "must be positive"));
/// let even = check(|n: &i32| (*n % 2 != 0).then(|| "must be even"));
/// let rules: [&dyn Validator<i32, &str, String>; 2] = [&positive, &even];
///
/// assert_eq!(
///     validate(-3, rules),
///     Outcome::Sad(vec!["must be positive", "must be even"]),
/// );
/// assert_eq!(validate(4, rules), Outcome::Happy(4));
/// ```
pub fn validate<H, S, F, I>(value: H, validators: I) -> Validation<H, S, F>
where
    I: IntoIterator,
    I::Item: Validator<H, S, F>,
{
    let mut failures = Vec::new();
    for validator in validators {
        match validator.run(&value) {
            Ok(mut sads) => failures.append(&mut sads),
            Err(fault) => {
                tracing::debug!("validator raised a technical failure, aborting validation");
                return Outcome::Fault(fault);
            }
        }
    }
    if failures.is_empty() {
        Outcome::Happy(value)
    } else {
        tracing::trace!(failures = failures.len(), "validation recorded failures");
        Outcome::Sad(failures)
    }
}

impl<H, S, F> Outcome<H, Vec<S>, F> {
    /// Runs a further round of validators if the previous round was fully
    /// clean.
    ///
    /// A sad or fault outcome from an earlier round passes through
    /// untouched; the accumulator's output is an ordinary outcome fed
    /// through [`Outcome::then`].
    pub fn validate<I>(self, validators: I) -> Self
    where
        I: IntoIterator,
        I::Item: Validator<H, S, F>,
    {
        self.then(|happy| validate(happy, validators))
    }
}

#[cfg(test)]
mod tests;
