//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own (looking up
//! water properties or evaluating Churchill-Bernstein does not need a model),
//! but their APIs are not stable.

pub mod constraint;
pub mod correlation;
pub mod dimensionless;
pub mod properties;
pub mod units;
