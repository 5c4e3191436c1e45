//! Rotor-level results and the unconverged-station policy.

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{Force, Length, Power, Ratio, Torque},
    force::newton,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    ratio::ratio,
    torque::newton_meter,
    velocity::meter_per_second,
};

use super::{FlowConditions, StationResult, StationStatus};

/// Station results and integrated rotor loads for one operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorResults {
    /// Station results, root to tip.
    pub stations: Vec<StationResult>,

    /// Total rotor thrust.
    pub thrust: Force,

    /// Total aerodynamic torque.
    pub torque: Torque,

    /// Shaft power, torque times rotor speed.
    pub power: Power,

    /// `T / (½ ρ V² π R²)`, or `None` in still air.
    pub thrust_coefficient: Option<Ratio>,

    /// `P / (½ ρ V³ π R²)`, or `None` in still air.
    pub power_coefficient: Option<Ratio>,

    /// `Ω R / V`, or `None` in still air.
    pub tip_speed_ratio: Option<Ratio>,
}

impl RotorResults {
    /// Integrates station loads over the blade span.
    ///
    /// Loads are integrated with the trapezoidal rule between station radii
    /// only; nothing is extrapolated to the hub or tip. A single station
    /// spans no length and integrates to zero.
    pub(super) fn new(stations: Vec<StationResult>, flow: &FlowConditions) -> Self {
        let thrust = trapezoid(&stations, |station| station.thrust_per_length.value);
        let torque = trapezoid(&stations, |station| station.torque_per_length.value);
        let power = torque * flow.rotor_speed().get::<radian_per_second>();

        let wind_speed = flow.wind_speed().get::<meter_per_second>();
        let tip_radius = flow.tip_radius().get::<meter>();
        let disc_pressure_force = 0.5
            * flow.density().get::<kilogram_per_cubic_meter>()
            * wind_speed
            * wind_speed
            * PI
            * tip_radius
            * tip_radius;
        let moving_air = wind_speed > 0.0;

        Self {
            stations,
            thrust: Force::new::<newton>(thrust),
            torque: Torque::new::<newton_meter>(torque),
            power: Power::new::<watt>(power),
            thrust_coefficient: moving_air
                .then(|| Ratio::new::<ratio>(thrust / disc_pressure_force)),
            power_coefficient: moving_air
                .then(|| Ratio::new::<ratio>(power / (disc_pressure_force * wind_speed))),
            tip_speed_ratio: flow.tip_speed_ratio(),
        }
    }

    /// Returns `true` if every station converged.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.stations.iter().all(StationResult::is_converged)
    }

    /// Lists stations that did not converge, root to tip.
    #[must_use]
    pub fn unconverged(&self) -> Vec<UnconvergedStation> {
        self.stations
            .iter()
            .enumerate()
            .filter(|(_, station)| !station.is_converged())
            .map(|(index, station)| UnconvergedStation {
                index,
                radius: station.radius,
                status: station.status,
            })
            .collect()
    }

    /// Returns these results only if every station converged.
    ///
    /// # Errors
    ///
    /// Returns [`UnconvergedStations`] listing every station that did not.
    pub fn require_converged(&self) -> Result<&Self, UnconvergedStations> {
        let unconverged = self.unconverged();
        if unconverged.is_empty() {
            Ok(self)
        } else {
            Err(UnconvergedStations(unconverged))
        }
    }
}

/// A station whose solve ended without converging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnconvergedStation {
    /// Position of the station in the blade, root first.
    pub index: usize,
    pub radius: Length,
    pub status: StationStatus,
}

/// One or more stations did not converge.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} of the blade stations did not converge", .0.len())]
pub struct UnconvergedStations(pub Vec<UnconvergedStation>);

fn trapezoid(stations: &[StationResult], load: impl Fn(&StationResult) -> f64) -> f64 {
    stations
        .windows(2)
        .map(|pair| {
            let span = (pair[1].radius - pair[0].radius).get::<meter>();
            0.5 * (load(&pair[0]) + load(&pair[1])) * span
        })
        .sum()
}
