//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, angles, speeds,
//! forces). Blade element results are loads per unit span, which [`uom`]
//! doesn't name, so the quantities are defined here.
//!
//! ```
//! use twine_bem::support::units::{ForcePerLength, force_per_length};
//! use uom::si::{f64::{Force, Length}, force::newton, length::meter};
//!
//! let dt_dr: ForcePerLength = force_per_length(120.0);
//! let thrust: Force = dt_dr * Length::new::<meter>(2.0);
//! assert_eq!(thrust.get::<newton>(), 240.0);
//! ```

mod quantities;

pub use quantities::{ForcePerLength, TorquePerLength, force_per_length, torque_per_length};
