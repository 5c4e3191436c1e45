use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, Finite, NonNegative, StrictlyPositive,
};
use uom::{
    ConstZero,
    si::{
        angular_velocity::radian_per_second,
        dynamic_viscosity::pascal_second,
        f64::{Angle, AngularVelocity, DynamicViscosity, Length, MassDensity, Ratio, Velocity},
        ratio::ratio,
        velocity::meter_per_second,
    },
};

/// Operating conditions shared by every station of one rotor solve.
///
/// Guarantees:
///
/// - every quantity is finite,
/// - wind speed and rotor speed are non-negative,
/// - density, viscosity, blade count and tip radius are strictly positive,
/// - hub radius is non-negative and below the tip radius,
/// - pitch is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConditions {
    wind_speed: Velocity,
    rotor_speed: AngularVelocity,
    density: MassDensity,
    viscosity: DynamicViscosity,
    blades: usize,
    tip_radius: Length,
    hub_radius: Length,
    pitch: Angle,
}

impl FlowConditions {
    /// Dynamic viscosity of air near 15 °C, Pa·s.
    pub const AIR_VISCOSITY: f64 = 1.81e-5;

    /// Constructs validated flow conditions with zero pitch, no hub and the
    /// viscosity of air.
    ///
    /// # Errors
    ///
    /// Returns an error if any value violates its constraint.
    pub fn new(
        wind_speed: Velocity,
        rotor_speed: AngularVelocity,
        density: MassDensity,
        blades: usize,
        tip_radius: Length,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            Constrained::new_finite(wind_speed)?,
            Constrained::new_finite(rotor_speed)?,
            Constrained::new_finite(density)?,
            StrictlyPositive::new(blades)?,
            Constrained::new_finite(tip_radius)?,
        ))
    }

    /// Constructs flow conditions from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        wind_speed: Constrained<Velocity, NonNegative>,
        rotor_speed: Constrained<AngularVelocity, NonNegative>,
        density: Constrained<MassDensity, StrictlyPositive>,
        blades: Constrained<usize, StrictlyPositive>,
        tip_radius: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            wind_speed: wind_speed.into_inner(),
            rotor_speed: rotor_speed.into_inner(),
            density: density.into_inner(),
            viscosity: DynamicViscosity::new::<pascal_second>(Self::AIR_VISCOSITY),
            blades: blades.into_inner(),
            tip_radius: tip_radius.into_inner(),
            hub_radius: Length::ZERO,
            pitch: Angle::ZERO,
        }
    }

    /// Returns these conditions with a different wind speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the speed is negative or not finite.
    pub fn with_wind_speed(self, wind_speed: Velocity) -> ConstraintResult<Self> {
        let wind_speed = Constrained::<_, NonNegative>::new_finite(wind_speed)?;
        Ok(Self {
            wind_speed: wind_speed.into_inner(),
            ..self
        })
    }

    /// Returns these conditions with a different rotor speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the speed is negative or not finite.
    pub fn with_rotor_speed(self, rotor_speed: AngularVelocity) -> ConstraintResult<Self> {
        let rotor_speed = Constrained::<_, NonNegative>::new_finite(rotor_speed)?;
        Ok(Self {
            rotor_speed: rotor_speed.into_inner(),
            ..self
        })
    }

    /// Returns these conditions with a blade pitch angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the pitch is not finite.
    pub fn with_pitch(self, pitch: Angle) -> ConstraintResult<Self> {
        Ok(Self {
            pitch: Finite::new(pitch)?.into_inner(),
            ..self
        })
    }

    /// Returns these conditions with a hub radius, enabling hub loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the hub radius is negative, infinite, or not below
    /// the tip radius.
    pub fn with_hub_radius(self, hub_radius: Length) -> ConstraintResult<Self> {
        let hub_radius = Constrained::<_, NonNegative>::new_finite(hub_radius)?;
        if *hub_radius.as_ref() >= self.tip_radius {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self {
            hub_radius: hub_radius.into_inner(),
            ..self
        })
    }

    /// Returns these conditions with a different fluid viscosity.
    ///
    /// # Errors
    ///
    /// Returns an error if the viscosity is not strictly positive and finite.
    pub fn with_viscosity(self, viscosity: DynamicViscosity) -> ConstraintResult<Self> {
        let viscosity = Constrained::<_, StrictlyPositive>::new_finite(viscosity)?;
        Ok(Self {
            viscosity: viscosity.into_inner(),
            ..self
        })
    }

    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed
    }

    #[must_use]
    pub fn rotor_speed(&self) -> AngularVelocity {
        self.rotor_speed
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    #[must_use]
    pub fn blades(&self) -> usize {
        self.blades
    }

    #[must_use]
    pub fn tip_radius(&self) -> Length {
        self.tip_radius
    }

    #[must_use]
    pub fn hub_radius(&self) -> Length {
        self.hub_radius
    }

    #[must_use]
    pub fn pitch(&self) -> Angle {
        self.pitch
    }

    /// Tip speed ratio `Ω R / V`, or `None` in still air.
    #[must_use]
    pub fn tip_speed_ratio(&self) -> Option<Ratio> {
        let v = self.wind_speed.get::<meter_per_second>();
        if v == 0.0 {
            return None;
        }
        let tip_speed = self.rotor_speed.get::<radian_per_second>() * self.tip_radius.value;
        Some(Ratio::new::<ratio>(tip_speed / v))
    }
}
