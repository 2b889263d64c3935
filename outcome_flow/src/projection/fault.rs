//! The fault-biased view over an outcome.

use crate::Outcome;
use crate::projection::SadProjection;

/// A view over an [`Outcome`] whose combinators operate on the fault arm.
///
/// Happy and sad outcomes pass through every fault-biased combinator
/// untouched. Obtain one with [`Outcome::if_fault`] and return to the
/// happy-biased view with [`FaultProjection::if_happy`].
///
/// # Examples
///
/// ```
/// use outcome_flow::Outcome;
///
/// let downgraded: Outcome<u32, String, &str> = Outcome::Fault("socket reset")
///     .if_fault()
///     .to_sad(|fault| format!("please retry: {fault}"));
/// assert_eq!(downgraded, Outcome::Sad("please retry: socket reset".into()));
/// ```
#[must_use = "a projection carries a failure arm that should be folded or inspected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultProjection<H, S, F> {
    inner: Outcome<H, S, F>,
}

impl<H, S, F> FaultProjection<H, S, F> {
    pub(crate) const fn new(inner: Outcome<H, S, F>) -> Self {
        Self { inner }
    }

    /// Chains the next step of the flow if the underlying outcome is a
    /// fault.
    pub fn then<F2>(self, next: impl FnOnce(F) -> Outcome<H, S, F2>) -> FaultProjection<H, S, F2> {
        FaultProjection::new(match self.inner {
            Outcome::Happy(happy) => Outcome::Happy(happy),
            Outcome::Sad(sad) => Outcome::Sad(sad),
            Outcome::Fault(fault) => next(fault),
        })
    }

    /// Chains a fault-biased step that may itself fail; its failure becomes
    /// the new fault.
    pub fn try_then<F2>(
        self,
        next: impl FnOnce(F) -> Result<Outcome<H, S, F2>, F2>,
    ) -> FaultProjection<H, S, F2> {
        self.then(|fault| match next(fault) {
            Ok(outcome) => outcome,
            Err(new_fault) => {
                tracing::trace!("fault-biased step failure captured as a fault");
                Outcome::Fault(new_fault)
            }
        })
    }

    /// Transforms the fault, leaving the other arms untouched.
    pub fn map<F2>(self, mapping: impl FnOnce(F) -> F2) -> FaultProjection<H, S, F2> {
        self.then(|fault| Outcome::Fault(mapping(fault)))
    }

    /// Transforms the fault with a fallible mapping; the mapping's own
    /// failure becomes the new fault.
    pub fn try_map<F2>(
        self,
        mapping: impl FnOnce(F) -> Result<F2, F2>,
    ) -> FaultProjection<H, S, F2> {
        self.try_then(|fault| Ok(Outcome::Fault(mapping(fault)?)))
    }

    /// Takes a look at the fault, if there is one.
    pub fn peek(self, peek: impl FnOnce(&F)) -> Self {
        self.map(|fault| {
            peek(&fault);
            fault
        })
    }

    /// Takes a look at the fault with a side effect that may fail; its
    /// failure replaces the original fault.
    pub fn try_peek(self, peek: impl FnOnce(&F) -> Result<(), F>) -> Self {
        self.try_then(|fault| {
            peek(&fault)?;
            Ok(Outcome::Fault(fault))
        })
    }

    /// Recovers from a technical failure, converting the fault arm into
    /// happy.
    pub fn recover(self, recovery: impl FnOnce(F) -> H) -> Outcome<H, S, F> {
        self.then(|fault| Outcome::Happy(recovery(fault)))
            .into_outcome()
    }

    /// Recovers from a technical failure with a recovery that may itself
    /// fail; its failure becomes the fault.
    pub fn try_recover(self, recovery: impl FnOnce(F) -> Result<H, F>) -> Outcome<H, S, F> {
        self.try_then(|fault| Ok(Outcome::Happy(recovery(fault)?)))
            .into_outcome()
    }

    /// Downgrades an unexpected fault into a modeled business failure.
    pub fn to_sad(self, downgrade: impl FnOnce(F) -> S) -> Outcome<H, S, F> {
        self.then(|fault| Outcome::Sad(downgrade(fault)))
            .into_outcome()
    }

    /// Downgrades a fault into a business failure with a conversion that may
    /// itself fail; its failure becomes the fault.
    pub fn try_to_sad(self, downgrade: impl FnOnce(F) -> Result<S, F>) -> Outcome<H, S, F> {
        self.try_then(|fault| Ok(Outcome::Sad(downgrade(fault)?)))
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

    /// Switches to the sad-biased view over the same outcome.
    pub fn if_sad(self) -> SadProjection<H, S, F> {
        SadProjection::new(self.inner)
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

impl<H, S, F> From<FaultProjection<H, S, F>> for Outcome<H, S, F> {
    fn from(projection: FaultProjection<H, S, F>) -> Self {
        projection.into_outcome()
    }
}
