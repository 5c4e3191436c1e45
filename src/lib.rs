//! # Twine BEM
//!
//! Blade element momentum (BEM) rotor models and airfoil polar tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations, currently the
//!   [`Rotor`](models::aero::rotor::Rotor) model and its per-station solver.
//! - [`support`]: Airfoil tables, interpolation, constrained values and unit
//!   helpers used by the models.
//!
//! ## Features
//!
//! - `parallel`: solve blade stations on the rayon thread pool. Results are
//!   identical with and without it.
//!
//! ## Logging
//!
//! Solver diagnostics go through the [`log`] facade: `debug` for converged
//! stations, `warn` for stalled or degenerate ones. No logger is installed.
//!
//! Modules in [`support`] are public because they are useful on their own,
//! but their APIs are not stable.

pub mod models;
pub mod support;
