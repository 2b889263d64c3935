//! The sad-biased view over an outcome.

use crate::Outcome;
use crate::projection::FaultProjection;

/// A view over an [`Outcome`] whose combinators operate on the sad arm.
///
/// Happy and fault outcomes pass through every sad-biased combinator
/// untouched. Obtain one with [`Outcome::if_sad`] and return to the
/// happy-biased view with [`SadProjection::if_happy`].
///
/// # Examples
///
/// ```
/// use outcome_flow::Outcome;
///
/// let recovered: Outcome<&str, &str, String> = Outcome::Sad("out of stock")
///     .if_sad()
///     .recover(|_| "substitute item");
/// assert_eq!(recovered, Outcome::Happy("substitute item"));
/// ```
#[must_use = "a projection carries a failure arm that should be folded or inspected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SadProjection<H, S, F> {
    inner: Outcome<H, S, F>,
}

impl<H, S, F> SadProjection<H, S, F> {
    pub(crate) const fn new(inner: Outcome<H, S, F>) -> Self {
        Self { inner }
    }

    /// Chains the next step of the flow if the underlying outcome is sad.
    pub fn then<S2>(self, next: impl FnOnce(S) -> Outcome<H, S2, F>) -> SadProjection<H, S2, F> {
        SadProjection::new(match self.inner {
            Outcome::Happy(happy) => Outcome::Happy(happy),
            Outcome::Sad(sad) => next(sad),
            Outcome::Fault(fault) => Outcome::Fault(fault),
        })
    }

    /// Chains a sad-biased step that may itself fail, capturing its failure
    /// as a fault.
    pub fn try_then<S2>(
        self,
        next: impl FnOnce(S) -> Result<Outcome<H, S2, F>, F>,
    ) -> SadProjection<H, S2, F> {
        self.then(|sad| match next(sad) {
            Ok(outcome) => outcome,
            Err(fault) => {
                tracing::trace!("sad-biased step failure captured as a fault");
                Outcome::Fault(fault)
            }
        })
    }

    /// Transforms the sad value, leaving the other arms untouched.
    pub fn map<S2>(self, mapping: impl FnOnce(S) -> S2) -> SadProjection<H, S2, F> {
        self.then(|sad| Outcome::Sad(mapping(sad)))
    }

    /// Transforms the sad value with a fallible mapping.
    pub fn try_map<S2>(self, mapping: impl FnOnce(S) -> Result<S2, F>) -> SadProjection<H, S2, F> {
        self.try_then(|sad| Ok(Outcome::Sad(mapping(sad)?)))
    }

    /// Takes a look at the sad value, if there is one.
    pub fn peek(self, peek: impl FnOnce(&S)) -> Self {
        self.map(|sad| {
            peek(&sad);
            sad
        })
    }

    /// Takes a look at the sad value with a side effect that may fail.
    pub fn try_peek(self, peek: impl FnOnce(&S) -> Result<(), F>) -> Self {
        self.try_then(|sad| {
            peek(&sad)?;
            Ok(Outcome::Sad(sad))
        })
    }

    /// Recovers from a business failure, converting the sad arm into happy.
    pub fn recover(self, recovery: impl FnOnce(S) -> H) -> Outcome<H, S, F> {
        self.then(|sad| Outcome::Happy(recovery(sad))).into_outcome()
    }

    /// Recovers from a business failure with a recovery that may itself
    /// fail; its failure is captured as a fault.
    pub fn try_recover(self, recovery: impl FnOnce(S) -> Result<H, F>) -> Outcome<H, S, F> {
        self.try_then(|sad| Ok(Outcome::Happy(recovery(sad)?)))
            .into_outcome()
    }

    /// Escalates a business failure the caller deems unrecoverable into a
    /// technical failure.
    pub fn to_fault(self, escalation: impl FnOnce(S) -> F) -> Outcome<H, S, F> {
        self.then(|sad| Outcome::Fault(escalation(sad)))
            .into_outcome()
    }

    /// Folds the underlying outcome into a single result.
    pub fn join<R>(
        self,
        on_happy: impl FnOnce(H) -> R,
        on_sad: impl FnOnce(S) -> R,
        on_fault: impl FnOnce(F) -> R,
    ) -> R {
        self.inner.join(on_happy, on_sad, on_fault)
    }

    /// Returns to the happy-biased view.
    pub fn if_happy(self) -> Outcome<H, S, F> {
        self.inner
    }

    /// Switches to the fault-biased view over the same outcome.
    pub fn if_fault(self) -> FaultProjection<H, S, F> {
        FaultProjection::new(self.inner)
    }

    /// Unwraps the projection, returning the underlying outcome.
    pub fn into_outcome(self) -> Outcome<H, S, F> {
        self.inner
    }

    /// Borrows the underlying outcome.
    #[must_use]
    pub const fn as_outcome(&self) -> &Outcome<H, S, F> {
        &self.inner
    }
}

impl<H, S, F> From<SadProjection<H, S, F>> for Outcome<H, S, F> {
    fn from(projection: SadProjection<H, S, F>) -> Self {
        projection.into_outcome()
    }
}
