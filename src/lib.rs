//! # Twine Heat
//!
//! Steady heat transfer calculations built on
//! [Twine](https://github.com/isentropic-dev/twine): conduction through
//! multilayer walls and forced convection over plates, across cylinders,
//! and inside tubes.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Units, thermophysical properties, dimensionless groups, and
//!   Nusselt correlations used by the models.
//! - [`case`]: TOML case files that drive the `heat-calc` binary.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it. Model-specific utility
//! code remains private.

pub mod case;
pub mod models;
pub mod support;
