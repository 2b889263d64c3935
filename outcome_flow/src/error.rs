//! Error type surfaced when a flow terminates without a happy value.

use thiserror::Error;

/// The two failure arms of an [`Outcome`](crate::Outcome), folded into one
/// error.
///
/// Returned by [`Outcome::into_result`](crate::Outcome::into_result) so a
/// flow can terminate into ordinary `Result`-based code with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotHappy<S, F> {
    /// The flow ended on an expected business-rule failure.
    #[error("business rule failure: {0}")]
    Sad(S),
    /// The flow ended on an unexpected technical failure.
    #[error("technical failure: {0}")]
    Fault(F),
}

impl<S, F> NotHappy<S, F> {
    /// Returns `true` if the flow ended on the sad arm.
    #[must_use]
    pub const fn is_sad(&self) -> bool {
        matches!(self, Self::Sad(_))
    }

    /// Returns `true` if the flow ended on the fault arm.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}
