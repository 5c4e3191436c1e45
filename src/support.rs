//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own (an airfoil
//! polar can be interpolated without ever building a rotor), but their APIs
//! are not yet stable.

pub mod airfoil;
pub mod constraint;
pub mod interp;
pub mod units;
