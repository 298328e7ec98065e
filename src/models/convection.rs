//! Forced-convection models.
//!
//! External flow ([`flat_plate`], [`cylinder`]) evaluates properties at the
//! film temperature of an [`ExternalFlow`]. Internal flow
//! ([`internal_flow`]) evaluates them at the bulk mean temperature of the
//! stream.

pub mod cylinder;
pub mod flat_plate;
pub mod internal_flow;

mod external;

pub use external::ExternalFlow;
