//! Aerodynamic models.

pub mod rotor;
