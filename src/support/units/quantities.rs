use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length},
        force::newton,
        length::meter,
    },
    typenum::{N2, P1, Z0},
};

/// Force per unit length, N/m in SI.
pub type ForcePerLength = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Torque per unit length, N·m/m in SI.
///
/// Dimensionally a force; kept as a separate name so spanwise torque
/// distributions read as what they are.
pub type TorquePerLength = Quantity<ISQ<P1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ForcePerLength`] from a value in N/m.
#[must_use]
pub fn force_per_length(newtons_per_meter: f64) -> ForcePerLength {
    Force::new::<newton>(newtons_per_meter) / Length::new::<meter>(1.0)
}

/// Creates a [`TorquePerLength`] from a value in N·m/m.
#[must_use]
pub fn torque_per_length(newton_meters_per_meter: f64) -> TorquePerLength {
    Force::new::<newton>(newton_meters_per_meter)
}
