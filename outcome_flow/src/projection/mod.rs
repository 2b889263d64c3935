//! Biased views over an [`Outcome`](crate::Outcome).
//!
//! A projection wraps an outcome and re-interprets "the happy path" as a
//! chosen arm: [`SadProjection`] biases combinators toward the sad arm and
//! [`FaultProjection`] toward the fault arm. The happy-biased view is the
//! [`Outcome`](crate::Outcome) itself. Projections carry no state beyond the
//! wrapped outcome, and converting between views never loses information.

mod fault;
mod sad;

pub use fault::FaultProjection;
pub use sad::SadProjection;
