//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. Rotor aerodynamics lives under [`aero`].
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule
//! holding the computation. The [`twine_core::Model`] implementation is a thin
//! adapter over that core, and the core's public types are re-exported from
//! the model module.

pub mod aero;
