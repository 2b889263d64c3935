//! Validation of a sub-field of a larger structure.

use crate::Outcome;
use crate::validation::{Validator, validate};

/// A [`Validator`] for one field of a larger value.
///
/// Composes a field extractor with the validators for that field: the field
/// is extracted, the accumulator runs over the field's validators, and the
/// aggregated failures surface as this validator's output. Whole-object
/// validation built from per-field validators therefore yields one flat,
/// ordered failure list.
///
/// Built with [`field_validator`].
#[derive(Debug, Clone)]
pub struct FieldValidator<X, V> {
    extract: X,
    validators: Vec<V>,
}

/// Builds a [`FieldValidator`] from a field extractor and the validators to
/// run against the extracted field.
///
/// The extractor returns the field by value; clone the field when it is not
/// cheaply produced.
///
/// # Examples
///
/// ```
/// use outcome_flow::{Outcome, check, field_validator, validate};
///
/// struct Form {
///     last_name: String,
/// }
///
/// let not_blank = check(|s: &String| {
///     s.trim().is_empty().then(|| "last name must not be blank".to_owned())
/// });
/// let last_name_rules = field_validator(|form: &Form| form.last_name.clone(), [not_blank]);
///
/// let form = Form { last_name: String::new() };
/// let outcome: Outcome<Form, Vec<String>, String> = validate(form, [&last_name_rules]);
/// assert_eq!(
///     outcome.into_sad(),
///     Some(vec!["last name must not be blank".to_owned()]),
/// );
/// ```
pub fn field_validator<X, V>(
    extract: X,
    validators: impl IntoIterator<Item = V>,
) -> FieldValidator<X, V> {
    FieldValidator {
        extract,
        validators: validators.into_iter().collect(),
    }
}

impl<H, T, S, F, X, V> Validator<H, S, F> for FieldValidator<X, V>
where
    X: Fn(&H) -> T,
    V: Validator<T, S, F>,
{
    fn run(&self, value: &H) -> Result<Vec<S>, F> {
        let field = (self.extract)(value);
        match validate(field, &self.validators) {
            Outcome::Happy(_) => Ok(Vec::new()),
            Outcome::Sad(failures) => Ok(failures),
            Outcome::Fault(fault) => Err(fault),
        }
    }
}
