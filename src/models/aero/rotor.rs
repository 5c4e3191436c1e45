//! Horizontal-axis rotor model.
//!
//! [`Rotor`] implements [`twine_core::Model`], mapping an [`OperatingPoint`]
//! to [`RotorResults`]. The per-station computational core is in the
//! internal [`core`] module and its public types are re-exported here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use twine_bem::models::aero::rotor::{
//!     BemConfig, Blade, FlowConditions, OperatingPoint, Rotor,
//! };
//! use twine_bem::support::airfoil::{AirfoilInterpolator, Polar, PolarSample};
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree,
//!     angular_velocity::radian_per_second,
//!     f64::{Angle, AngularVelocity, Length, MassDensity, Velocity},
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     velocity::meter_per_second,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let airfoil = Arc::new(AirfoilInterpolator::new(Polar::new([
//!     PolarSample::degrees(-10.0, -0.6, 0.03),
//!     PolarSample::degrees(0.0, 0.4, 0.008),
//!     PolarSample::degrees(8.0, 1.2, 0.012),
//!     PolarSample::degrees(12.0, 1.4, 0.03),
//! ])?));
//!
//! let blade = Blade::from_sections(
//!     [(2.0, 1.1, 12.0), (5.0, 0.9, 6.0), (8.0, 0.7, 2.0), (9.5, 0.5, 0.5)]
//!         .map(|(r, c, twist)| {
//!             (Length::new::<meter>(r), Length::new::<meter>(c), Angle::new::<degree>(twist))
//!         }),
//!     &airfoil,
//! )?;
//!
//! let flow = FlowConditions::new(
//!     Velocity::new::<meter_per_second>(8.0),
//!     AngularVelocity::new::<radian_per_second>(5.6),
//!     MassDensity::new::<kilogram_per_cubic_meter>(1.225),
//!     3,
//!     Length::new::<meter>(10.0),
//! )?;
//!
//! let rotor = Rotor::new(blade, BemConfig::default());
//! let results = rotor.call(&OperatingPoint::new(flow))?;
//!
//! assert_eq!(results.stations.len(), 4);
//! assert!(results.power.value.is_finite());
//! # Ok(())
//! # }
//! ```

pub(crate) mod core;
mod error;
mod operating_point;
mod results;

pub use self::core::{
    BemConfig, BemSolver, Blade, BladeStation, BracketConfig, BracketError, CriticalInduction,
    DegenerateReason, FlowConditions, GeometryError, HighInduction, Induction, SolveMethod,
    StationResult, StationStatus, TipLoss,
};
pub use error::RotorError;
pub use operating_point::OperatingPoint;
pub use results::{RotorResults, UnconvergedStation, UnconvergedStations};

use std::sync::Arc;

use twine_core::Model;
use uom::si::f64::{Angle, Length};

use crate::support::airfoil::AirfoilInterpolator;

/// A bladed rotor solved with blade element momentum theory.
#[derive(Debug, Clone)]
pub struct Rotor {
    blade: Blade,
    solver: BemSolver,
}

impl Rotor {
    #[must_use]
    pub fn new(blade: Blade, config: BemConfig) -> Self {
        Self {
            blade,
            solver: BemSolver::new(config),
        }
    }

    /// Builds a rotor from `(radius, chord, twist)` triples sharing one airfoil.
    ///
    /// # Errors
    ///
    /// Returns [`RotorError::Geometry`] if the sections do not form a valid
    /// blade.
    pub fn from_sections(
        sections: impl IntoIterator<Item = (Length, Length, Angle)>,
        airfoil: &Arc<AirfoilInterpolator>,
        config: BemConfig,
    ) -> Result<Self, RotorError> {
        Ok(Self::new(Blade::from_sections(sections, airfoil)?, config))
    }

    #[must_use]
    pub fn blade(&self) -> &Blade {
        &self.blade
    }

    #[must_use]
    pub fn solver(&self) -> &BemSolver {
        &self.solver
    }

    /// Checks that every station lies in `(hub_radius, tip_radius]`.
    fn check_annulus(&self, flow: &FlowConditions) -> Result<(), RotorError> {
        let hub = flow.hub_radius();
        let tip = flow.tip_radius();

        match self
            .blade
            .stations()
            .iter()
            .position(|station| station.radius() <= hub || station.radius() > tip)
        {
            Some(index) => Err(RotorError::StationOutsideRotor {
                index,
                radius: self.blade.stations()[index].radius(),
            }),
            None => Ok(()),
        }
    }
}

impl Model for Rotor {
    type Input = OperatingPoint;
    type Output = RotorResults;
    type Error = RotorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let flow = &input.flow;
        self.check_annulus(flow)?;

        if let Some(seeds) = &input.warm_start {
            if seeds.len() != self.blade.len() {
                return Err(RotorError::WarmStartLength {
                    expected: self.blade.len(),
                    found: seeds.len(),
                });
            }
        }

        let stations =
            self.solver
                .solve_stations(self.blade.stations(), flow, input.warm_start.as_deref());
        let results = RotorResults::new(stations, flow);

        let unconverged = results.unconverged().len();
        if unconverged > 0 {
            log::warn!(
                "{unconverged} of {} stations did not converge",
                results.stations.len()
            );
        }

        Ok(results)
    }
}
