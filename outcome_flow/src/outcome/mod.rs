//! The core tri-state outcome value.
//!
//! An [`Outcome`] holds exactly one of three mutually exclusive results of a
//! business operation: a successful value (`Happy`), an expected
//! business-rule failure (`Sad`), or an unexpected technical failure
//! (`Fault`). Combinators consume the outcome and produce a new one, so a
//! flow reads as a chain of steps with no error-handling boilerplate in
//! between.
//!
//! Where the step itself can fail unexpectedly, use the `try_` form of a
//! combinator: its closure returns a [`Result`], and an `Err` is captured as
//! a `Fault` at that step instead of propagating.

use std::fmt;

use crate::NotHappy;
use crate::projection::{FaultProjection, SadProjection};

/// The outcome of a business operation: exactly one of happy, sad, or fault.
///
/// `Happy` carries the success value, `Sad` an expected business-rule
/// failure, and `Fault` an unexpected technical failure. The three variants
/// are the only constructors, so a value with zero or two populated arms is
/// unrepresentable.
///
/// # Examples
///
/// ```
/// use outcome_flow::Outcome;
///
/// fn parse_age(raw: &str) -> Outcome<u8, String, std::num::ParseIntError> {
///     Outcome::attempt(|| raw.parse()).ensure(|age| {
///         if *age < 18 {
///             Ok(Some(format!("{age} is under age")))
///         } else {
///             Ok(None)
///         }
///     })
/// }
///
/// assert_eq!(parse_age("25"), Outcome::Happy(25));
/// assert_eq!(parse_age("12"), Outcome::Sad("12 is under age".into()));
/// assert!(parse_age("not a number").is_fault());
/// ```
#[must_use = "an Outcome carries a failure arm that should be folded or inspected"]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<H, S, F> {
    /// The operation succeeded with this value.
    Happy(H),
    /// The operation hit an expected business-rule failure.
    Sad(S),
    /// The operation hit an unexpected technical failure.
    Fault(F),
}

impl<H, S, F> Outcome<H, S, F> {
    /// Runs a fallible producer, capturing its failure as a `Fault`.
    ///
    /// This is the entry point that absorbs an ordinary `Result`-returning
    /// operation into the flow.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// let outcome: Outcome<i32, String, std::num::ParseIntError> =
    ///     Outcome::attempt(|| "42".parse());
    /// assert_eq!(outcome, Outcome::Happy(42));
    /// ```
    pub fn attempt(attempt: impl FnOnce() -> Result<H, F>) -> Self {
        match attempt() {
            Ok(happy) => Self::Happy(happy),
            Err(fault) => {
                tracing::trace!("attempt captured a technical failure");
                Self::Fault(fault)
            }
        }
    }

    /// Runs a fallible producer, mapping its failure into a `Sad`.
    ///
    /// The mapping itself may fail; its failure is captured as a `Fault`.
    pub fn attempt_or_sad(
        attempt: impl FnOnce() -> Result<H, F>,
        to_sad: impl FnOnce(F) -> Result<S, F>,
    ) -> Self {
        match attempt() {
            Ok(happy) => Self::Happy(happy),
            Err(fault) => match to_sad(fault) {
                Ok(sad) => Self::Sad(sad),
                Err(mapping_fault) => {
                    tracing::trace!("failure mapping captured a technical failure");
                    Self::Fault(mapping_fault)
                }
            },
        }
    }

    /// Chains the next step of the flow if this outcome is happy.
    ///
    /// A sad or fault outcome passes through untouched and `next` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// let doubled: Outcome<i32, String, String> =
    ///     Outcome::Happy(21).then(|n| Outcome::Happy(n * 2));
    /// assert_eq!(doubled, Outcome::Happy(42));
    ///
    /// let sad: Outcome<i32, String, String> = Outcome::Sad("no".into());
    /// assert_eq!(sad.then(|n| Outcome::Happy(n * 2)), Outcome::Sad("no".into()));
    /// ```
    pub fn then<H2>(self, next: impl FnOnce(H) -> Outcome<H2, S, F>) -> Outcome<H2, S, F> {
        match self {
            Self::Happy(happy) => next(happy),
            Self::Sad(sad) => Outcome::Sad(sad),
            Self::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Chains a step that may itself fail, capturing its failure as a
    /// `Fault`.
    pub fn try_then<H2>(
        self,
        next: impl FnOnce(H) -> Result<Outcome<H2, S, F>, F>,
    ) -> Outcome<H2, S, F> {
        self.then(|happy| match next(happy) {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::trace!("step failure captured as a fault");
                Outcome::Fault(fault)
            }
        })
    }

    /// Transforms the happy value, leaving sad and fault outcomes untouched.
    pub fn map<H2>(self, mapping: impl FnOnce(H) -> H2) -> Outcome<H2, S, F> {
        self.then(|happy| Outcome::Happy(mapping(happy)))
    }

    /// Transforms the happy value with a fallible mapping.
    pub fn try_map<H2>(self, mapping: impl FnOnce(H) -> Result<H2, F>) -> Outcome<H2, S, F> {
        self.try_then(|happy| Ok(Outcome::Happy(mapping(happy)?)))
    }

    /// Takes a look at the happy value, if there is one.
    pub fn peek(self, peek: impl FnOnce(&H)) -> Self {
        self.map(|happy| {
            peek(&happy);
            happy
        })
    }

    /// Takes a look at the happy value with a side effect that may fail.
    ///
    /// Side effects are not exempt from the safety net: a failing `peek`
    /// turns the outcome into a `Fault`.
    pub fn try_peek(self, peek: impl FnOnce(&H) -> Result<(), F>) -> Self {
        self.try_then(|happy| {
            peek(&happy)?;
            Ok(Self::Happy(happy))
        })
    }

    /// Runs a single business-rule check against the happy value.
    ///
    /// `Ok(None)` keeps the outcome happy, `Ok(Some(sad))` demotes it to
    /// sad, and `Err` becomes a fault.
    pub fn ensure(self, check: impl FnOnce(&H) -> Result<Option<S>, F>) -> Self {
        self.try_then(|happy| {
            Ok(match check(&happy)? {
                Some(sad) => Self::Sad(sad),
                None => Self::Happy(happy),
            })
        })
    }

    /// Folds the outcome into a single result.
    ///
    /// Exactly one of the three functions is invoked; the fold is total by
    /// construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// let outcome: Outcome<i32, String, String> = Outcome::Sad("blocked".into());
    /// let page = outcome.join(
    ///     |n| format!("result: {n}"),
    ///     |sad| format!("please fix: {sad}"),
    ///     |_fault| "try again later".to_owned(),
    /// );
    /// assert_eq!(page, "please fix: blocked");
    /// ```
    pub fn join<R>(
        self,
        on_happy: impl FnOnce(H) -> R,
        on_sad: impl FnOnce(S) -> R,
        on_fault: impl FnOnce(F) -> R,
    ) -> R {
        match self {
            Self::Happy(happy) => on_happy(happy),
            Self::Sad(sad) => on_sad(sad),
            Self::Fault(fault) => on_fault(fault),
        }
    }

    /// Reinterprets this outcome with operations biased toward the sad arm.
    pub fn if_sad(self) -> SadProjection<H, S, F> {
        SadProjection::new(self)
    }

    /// Reinterprets this outcome with operations biased toward the fault
    /// arm.
    pub fn if_fault(self) -> FaultProjection<H, S, F> {
        FaultProjection::new(self)
    }

    /// Returns `true` if the outcome is happy.
    #[must_use]
    pub const fn is_happy(&self) -> bool {
        matches!(self, Self::Happy(_))
    }

    /// Returns `true` if the outcome is sad.
    #[must_use]
    pub const fn is_sad(&self) -> bool {
        matches!(self, Self::Sad(_))
    }

    /// Returns `true` if the outcome is a technical failure.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Borrows the happy value, if there is one.
    #[must_use]
    pub const fn as_happy(&self) -> Option<&H> {
        match self {
            Self::Happy(happy) => Some(happy),
            _ => None,
        }
    }

    /// Borrows the sad value, if there is one.
    #[must_use]
    pub const fn as_sad(&self) -> Option<&S> {
        match self {
            Self::Sad(sad) => Some(sad),
            _ => None,
        }
    }

    /// Borrows the fault, if there is one.
    #[must_use]
    pub const fn as_fault(&self) -> Option<&F> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the happy value if there is one.
    #[must_use]
    pub fn into_happy(self) -> Option<H> {
        match self {
            Self::Happy(happy) => Some(happy),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the sad value if there is one.
    #[must_use]
    pub fn into_sad(self) -> Option<S> {
        match self {
            Self::Sad(sad) => Some(sad),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the fault if there is one.
    #[must_use]
    pub fn into_fault(self) -> Option<F> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Converts into a `Result`, folding the two failure arms into
    /// [`NotHappy`].
    ///
    /// # Errors
    ///
    /// Returns [`NotHappy::Sad`] or [`NotHappy::Fault`] when the outcome is
    /// not happy.
    pub fn into_result(self) -> Result<H, NotHappy<S, F>> {
        match self {
            Self::Happy(happy) => Ok(happy),
            Self::Sad(sad) => Err(NotHappy::Sad(sad)),
            Self::Fault(fault) => Err(NotHappy::Fault(fault)),
        }
    }

    /// Returns the happy value, panicking on either failure arm.
    ///
    /// Intended for chain-termination boundaries and tests where a happy
    /// result has already been guaranteed; production chains should prefer
    /// [`Outcome::join`] or [`Outcome::into_result`].
    ///
    /// # Panics
    ///
    /// Panics, naming the populated arm, if the outcome is sad or a fault.
    #[track_caller]
    pub fn unwrap_happy(self) -> H
    where
        S: fmt::Debug,
        F: fmt::Debug,
    {
        match self {
            Self::Happy(happy) => happy,
            Self::Sad(sad) => panic!("happy value not present, outcome was sad: {sad:?}"),
            Self::Fault(fault) => {
                panic!("happy value not present, outcome was a technical failure: {fault:?}")
            }
        }
    }
}

impl<H, S, F> From<Result<H, F>> for Outcome<H, S, F> {
    /// Wraps `Ok` as `Happy` and `Err` as `Fault`, matching
    /// [`Outcome::attempt`].
    fn from(result: Result<H, F>) -> Self {
        match result {
            Ok(happy) => Self::Happy(happy),
            Err(fault) => Self::Fault(fault),
        }
    }
}

impl<H, S, F> fmt::Display for Outcome<H, S, F>
where
    H: fmt::Display,
    S: fmt::Display,
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Happy(happy) => write!(f, "Happy: {happy}"),
            Self::Sad(sad) => write!(f, "Sad: {sad}"),
            Self::Fault(fault) => write!(f, "Technical failure: {fault}"),
        }
    }
}
