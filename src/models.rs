//! Public heat transfer models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized by mechanism: [`conduction`] through solid walls and
//! [`convection`] between a surface and a moving fluid.
//!
//! # Model structure
//!
//! Each model exposes a [`twine_core::Model`] implementation that is a thin
//! adapter over plain functions. Larger models keep their computation in an
//! internal `core` submodule that is not part of the public API.

pub mod conduction;
pub mod convection;
