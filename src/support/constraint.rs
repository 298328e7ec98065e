//! Numeric invariants checked once, at construction time.
//!
//! Heat transfer inputs are full of quantities that only make sense on one
//! side of zero: layer thicknesses, conductivities, velocities, diameters.
//! Wrapping them in [`Constrained<T, C>`] moves the check to the boundary so
//! the formulas downstream can divide and take logarithms without guarding.
//!
//! The one constraint needed so far is [`StrictlyPositive`], which works with
//! plain numbers and with any [`uom`] quantity.

mod strictly_positive;

use std::{marker::PhantomData, ops::Deref};

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced by [`Constrained::new`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The ways a value can violate a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_heat::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let thickness = Length::new::<millimeter>(5.0);
/// let checked = Constrained::<_, StrictlyPositive>::new(thickness).unwrap();
/// assert_eq!(checked.into_inner(), thickness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, C: Constraint<T>> Deref for Constrained<T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
