//! Extensions for lifting `Result` values into an [`Outcome`] concisely.
//!
//! These helpers reduce repetitive `match`/`map_err` glue when a flow is
//! entered from ordinary fallible code. Whether an `Err` is an expected
//! business failure or a technical one is the caller's call to make, so both
//! directions are provided.

use crate::Outcome;

/// Extension for converting a `Result<T, E>` into an [`Outcome`].
pub trait ResultOutcomeExt<T, E> {
    /// Lifts `Ok` to `Happy` and `Err` to `Fault`.
    ///
    /// Use when the error represents an unexpected technical failure, e.g.
    /// an I/O or parsing error from an infrastructure call.
    fn outcome_or_fault<S>(self) -> Outcome<T, S, E>;

    /// Lifts `Ok` to `Happy` and `Err` to `Sad`.
    ///
    /// Use when the error represents an expected, modeled business-rule
    /// failure.
    fn outcome_or_sad<F>(self) -> Outcome<T, E, F>;
}

impl<T, E> ResultOutcomeExt<T, E> for Result<T, E> {
    fn outcome_or_fault<S>(self) -> Outcome<T, S, E> {
        match self {
            Ok(happy) => Outcome::Happy(happy),
            Err(fault) => Outcome::Fault(fault),
        }
    }

    fn outcome_or_sad<F>(self) -> Outcome<T, E, F> {
        match self {
            Ok(happy) => Outcome::Happy(happy),
            Err(sad) => Outcome::Sad(sad),
        }
    }
}
