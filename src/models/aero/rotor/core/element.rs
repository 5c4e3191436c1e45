//! Blade element kinematics and aerodynamics at one station.
//!
//! Everything is precomputed to SI `f64` once per station so the iteration
//! loop never touches unit conversions.

use std::f64::consts::PI;

use crate::support::{
    airfoil::{AirfoilInterpolator, Coefficients},
    units::{force_per_length, torque_per_length},
};
use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    dynamic_viscosity::pascal_second,
    f64::{Angle, Length, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use super::{
    BemConfig, BladeStation, FlowConditions, HighInduction, Induction, SolveMethod, StationResult,
    StationStatus, TipLoss, induction, loss::LossGeometry,
};

/// Denominator floor for `1 - a` in the inflow-angle residual.
const SINGULAR: f64 = 1e-12;

/// A blade station paired with its flow conditions.
pub(super) struct Element<'a> {
    airfoil: &'a AirfoilInterpolator,
    radius: f64,
    chord: f64,
    solidity: f64,
    /// Twist plus pitch, radians.
    setting_angle: f64,
    wind_speed: f64,
    /// Blade section speed `Ω r`.
    blade_speed: f64,
    density: f64,
    viscosity: f64,
    blades: f64,
    loss: LossGeometry,
    tip_loss: TipLoss,
    high_induction: HighInduction,
}

/// Flow state at a blade element for a given induction.
#[derive(Debug, Clone, Copy)]
pub(super) struct Evaluation {
    pub induction: Induction,
    pub phi: f64,
    pub relative_speed: f64,
    pub alpha: f64,
    pub reynolds: f64,
    pub coefficients: Coefficients,
    pub normal: f64,
    pub tangential: f64,
    pub loss: f64,
}

impl Evaluation {
    pub(super) fn is_finite(&self) -> bool {
        self.induction.is_finite()
            && [
                self.phi,
                self.relative_speed,
                self.alpha,
                self.reynolds,
                self.coefficients.lift,
                self.coefficients.drag,
                self.normal,
                self.tangential,
                self.loss,
            ]
            .iter()
            .all(|value| value.is_finite())
    }
}

/// Induction implied by a prescribed inflow angle.
#[derive(Debug, Clone, Copy)]
pub(super) struct AngleBalance {
    pub induction: Induction,
    pub residual: f64,
}

impl<'a> Element<'a> {
    pub(super) fn new(
        station: &'a BladeStation,
        flow: &FlowConditions,
        config: &BemConfig,
    ) -> Self {
        let radius = station.radius().get::<meter>();
        let chord = station.chord().get::<meter>();
        #[allow(clippy::cast_precision_loss)]
        let blades = flow.blades() as f64;

        Self {
            airfoil: station.airfoil(),
            radius,
            chord,
            solidity: blades * chord / (2.0 * PI * radius),
            setting_angle: (station.twist() + flow.pitch()).get::<radian>(),
            wind_speed: flow.wind_speed().get::<meter_per_second>(),
            blade_speed: flow.rotor_speed().get::<radian_per_second>() * radius,
            density: flow.density().get::<kilogram_per_cubic_meter>(),
            viscosity: flow.viscosity().get::<pascal_second>(),
            blades,
            loss: LossGeometry {
                blades,
                radius,
                tip_radius: flow.tip_radius().get::<meter>(),
                hub_radius: flow.hub_radius().get::<meter>(),
            },
            tip_loss: config.tip_loss,
            high_induction: config.high_induction,
        }
    }

    /// Station radius, meters.
    pub(super) fn radius(&self) -> f64 {
        self.radius
    }

    pub(super) fn has_axial_flow(&self) -> bool {
        self.wind_speed > 0.0
    }

    pub(super) fn is_rotating(&self) -> bool {
        self.blade_speed > 0.0
    }

    /// Velocity triangle, airfoil coefficients and loss factor at `induction`.
    pub(super) fn evaluate(&self, induction: Induction) -> Evaluation {
        let axial = (1.0 - induction.axial) * self.wind_speed;
        let tangential = (1.0 + induction.tangential) * self.blade_speed;
        self.evaluate_at(induction, axial.atan2(tangential), axial.hypot(tangential))
    }

    fn evaluate_at(&self, induction: Induction, phi: f64, relative_speed: f64) -> Evaluation {
        let alpha = phi - self.setting_angle;
        let reynolds = self.density * relative_speed * self.chord / self.viscosity;
        let coefficients = self
            .airfoil
            .query(Angle::new::<radian>(alpha), Some(reynolds));

        let (sin_phi, cos_phi) = phi.sin_cos();
        Evaluation {
            induction,
            phi,
            relative_speed,
            alpha,
            reynolds,
            coefficients,
            normal: coefficients.lift * cos_phi + coefficients.drag * sin_phi,
            tangential: coefficients.lift * sin_phi - coefficients.drag * cos_phi,
            loss: self.loss.factor(self.tip_loss, sin_phi),
        }
    }

    /// Induction that balances blade element and momentum loads at `eval`.
    ///
    /// Returns `None` when either balance is singular.
    pub(super) fn balance(&self, eval: &Evaluation) -> Option<Induction> {
        let (sin_phi, cos_phi) = eval.phi.sin_cos();
        let axial = induction::axial(
            self.solidity,
            eval.normal,
            eval.loss,
            sin_phi,
            self.high_induction,
        )?;
        let tangential =
            induction::tangential(self.solidity, eval.tangential, eval.loss, sin_phi, cos_phi)?;
        Some(Induction::new(axial, tangential))
    }

    /// Momentum balance with the inflow angle prescribed.
    ///
    /// The residual is zero where the velocity triangle built from the
    /// balanced induction reproduces `phi`. The Reynolds number uses the
    /// undisturbed relative speed, since the induction is not known yet.
    pub(super) fn balance_at(&self, phi: f64) -> Option<AngleBalance> {
        let relative_speed = self.wind_speed.hypot(self.blade_speed);
        let eval = self.evaluate_at(Induction::ZERO, phi, relative_speed);
        let induction = self.balance(&eval)?;

        let (sin_phi, cos_phi) = phi.sin_cos();
        let axial_deficit = 1.0 - induction.axial;
        if axial_deficit.abs() < SINGULAR || self.blade_speed <= 0.0 {
            return None;
        }

        let swirl = self.solidity * eval.tangential / (4.0 * eval.loss * sin_phi);
        let residual =
            sin_phi / axial_deficit - (self.wind_speed / self.blade_speed) * (cos_phi - swirl);

        residual.is_finite().then_some(AngleBalance {
            induction,
            residual,
        })
    }

    /// Packages an evaluation with its spanwise loads.
    pub(super) fn result(
        &self,
        eval: &Evaluation,
        status: StationStatus,
        method: SolveMethod,
    ) -> StationResult {
        let dynamic_load =
            0.5 * self.density * eval.relative_speed * eval.relative_speed * self.chord;

        StationResult {
            radius: Length::new::<meter>(self.radius),
            induction: eval.induction,
            inflow_angle: Angle::new::<radian>(eval.phi),
            angle_of_attack: Angle::new::<radian>(eval.alpha),
            reynolds: eval.reynolds,
            relative_velocity: Velocity::new::<meter_per_second>(eval.relative_speed),
            coefficients: eval.coefficients,
            normal_coefficient: eval.normal,
            tangential_coefficient: eval.tangential,
            loss_factor: eval.loss,
            thrust_per_length: force_per_length(self.blades * dynamic_load * eval.normal),
            torque_per_length: torque_per_length(
                self.blades * dynamic_load * eval.tangential * self.radius,
            ),
            status,
            method,
        }
    }
}
