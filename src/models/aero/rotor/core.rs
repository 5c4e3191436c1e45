//! Blade element momentum solver for individual blade stations.
//!
//! Each station is an annulus of the rotor disc solved independently: the
//! axial and tangential induction factors are iterated until the loads from
//! blade element theory (airfoil lift and drag in the local velocity
//! triangle) match the loads from momentum theory across the annulus.
//!
//! The iteration is a relaxed fixed point on `(a, a')`, with optional
//! Prandtl tip and hub losses and a Glauert high-induction correction. When
//! it stalls, an optional bracketed solve in the inflow angle takes over.
//!
//! Station solves never fail. Unconverged or degenerate stations are reported
//! through [`StationStatus`] alongside finite, best-effort values.

mod bracketed;
mod config;
mod element;
mod induction;
mod input;
mod loss;
mod results;
mod station;

#[cfg(test)]
pub(crate) mod test_support;

pub use bracketed::{BracketConfig, BracketError};
pub use config::{BemConfig, CriticalInduction, HighInduction, TipLoss};
pub use induction::Induction;
pub use input::{Blade, BladeStation, FlowConditions, GeometryError};
pub use results::{DegenerateReason, SolveMethod, StationResult, StationStatus};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use element::Element;

/// Entry point for solving blade stations.
///
/// Holds only configuration, so one solver can be shared freely across
/// threads and operating points.
#[derive(Debug, Clone, Copy, Default)]
pub struct BemSolver {
    config: BemConfig,
}

impl BemSolver {
    #[must_use]
    pub fn new(config: BemConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BemConfig {
        &self.config
    }

    /// Solves the induction state and loads at one station.
    ///
    /// `seed` warm-starts the iteration; `None` starts from zero induction.
    /// Non-finite seeds are ignored.
    #[must_use]
    pub fn solve_station(
        &self,
        station: &BladeStation,
        flow: &FlowConditions,
        seed: Option<Induction>,
    ) -> StationResult {
        let element = Element::new(station, flow, &self.config);
        station::solve(&element, &self.config, seed.unwrap_or_default())
    }

    /// Solves every station independently, preserving order.
    ///
    /// Seeds are matched to stations by index; missing seeds start from zero.
    /// With the `parallel` feature the stations are spread over the rayon
    /// thread pool. Results do not depend on the feature.
    #[must_use]
    pub fn solve_stations(
        &self,
        stations: &[BladeStation],
        flow: &FlowConditions,
        seeds: Option<&[Induction]>,
    ) -> Vec<StationResult> {
        let seed = |index: usize| seeds.and_then(|seeds| seeds.get(index).copied());

        #[cfg(feature = "parallel")]
        let results = stations
            .par_iter()
            .enumerate()
            .map(|(index, station)| self.solve_station(station, flow, seed(index)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results = stations
            .iter()
            .enumerate()
            .map(|(index, station)| self.solve_station(station, flow, seed(index)))
            .collect();

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::{degree, radian},
        angular_velocity::radian_per_second,
        dynamic_viscosity::pascal_second,
        f64::{Angle, AngularVelocity, DynamicViscosity, Length, Velocity},
        length::meter,
        velocity::meter_per_second,
    };

    use crate::support::airfoil::{AirfoilInterpolator, Polar, PolarSample};

    use super::test_support::{rotor_blade, rotor_flow, scenario_flow, scenario_station};

    fn uncorrected() -> BemSolver {
        BemSolver::new(BemConfig::default().uncorrected())
    }

    fn assert_all_finite(result: &StationResult) {
        let values = [
            result.induction.axial,
            result.induction.tangential,
            result.inflow_angle.value,
            result.angle_of_attack.value,
            result.reynolds,
            result.relative_velocity.value,
            result.coefficients.lift,
            result.coefficients.drag,
            result.normal_coefficient,
            result.tangential_coefficient,
            result.loss_factor,
            result.thrust_per_length.value,
            result.torque_per_length.value,
        ];
        assert!(values.iter().all(|v| v.is_finite()), "{result:?}");
    }

    #[test]
    fn single_station_scenario_converges() {
        let result = uncorrected().solve_station(&scenario_station(), &scenario_flow(), None);

        assert!(result.is_converged());
        assert_eq!(result.method, SolveMethod::FixedPoint);
        assert_all_finite(&result);

        assert_relative_eq!(result.induction.axial, 0.058_598, epsilon = 1e-4);
        assert_relative_eq!(result.induction.tangential, 0.011_889, epsilon = 1e-4);
        assert_relative_eq!(
            result.inflow_angle.get::<radian>(),
            0.435_40,
            epsilon = 1e-4
        );

        // Angle of attack is past the last sample, so coefficients are clamped.
        assert_relative_eq!(result.coefficients.lift, 1.0);
        assert_relative_eq!(result.coefficients.drag, 0.05);
        assert!(result.thrust_per_length.value > 0.0);
        assert!(result.torque_per_length.value > 0.0);
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let solver = BemSolver::default();
        let first = solver.solve_station(&scenario_station(), &scenario_flow(), None);
        let second = solver.solve_station(&scenario_station(), &scenario_flow(), None);
        assert_eq!(first, second);
        assert_eq!(
            first.induction.axial.to_bits(),
            second.induction.axial.to_bits()
        );
    }

    #[test]
    fn relaxation_does_not_move_the_fixed_point() {
        let relaxed = uncorrected().solve_station(&scenario_station(), &scenario_flow(), None);
        let direct = BemSolver::new(
            BemConfig::default()
                .uncorrected()
                .with_relaxation(1.0)
                .unwrap(),
        )
        .solve_station(&scenario_station(), &scenario_flow(), None);

        assert!(relaxed.is_converged() && direct.is_converged());
        assert_relative_eq!(
            relaxed.induction.axial,
            direct.induction.axial,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            relaxed.induction.tangential,
            direct.induction.tangential,
            epsilon = 1e-4
        );

        let StationStatus::Converged { iterations: slow } = relaxed.status else {
            unreachable!()
        };
        let StationStatus::Converged { iterations: fast } = direct.status else {
            unreachable!()
        };
        assert!(fast < slow);
    }

    #[test]
    fn corrections_change_the_solution() {
        let plain = uncorrected().solve_station(&scenario_station(), &scenario_flow(), None);
        let corrected =
            BemSolver::default().solve_station(&scenario_station(), &scenario_flow(), None);

        assert!(corrected.is_converged());
        assert!(corrected.loss_factor < 1.0);
        assert!(corrected.induction.axial > plain.induction.axial);
    }

    #[test]
    fn zero_wind_is_degenerate_but_finite() {
        let flow = scenario_flow()
            .with_wind_speed(Velocity::new::<meter_per_second>(0.0))
            .unwrap();
        let result = BemSolver::default().solve_station(&scenario_station(), &flow, None);

        assert_eq!(
            result.status,
            StationStatus::Degenerate {
                reason: DegenerateReason::NoAxialFlow
            }
        );
        assert!(!result.is_converged());
        assert_eq!(result.induction, Induction::ZERO);
        assert_all_finite(&result);
    }

    #[test]
    fn parked_rotor_is_degenerate_but_finite() {
        let flow = scenario_flow()
            .with_rotor_speed(AngularVelocity::new::<radian_per_second>(0.0))
            .unwrap();
        let result = BemSolver::default().solve_station(&scenario_station(), &flow, None);

        assert_eq!(
            result.status,
            StationStatus::Degenerate {
                reason: DegenerateReason::NoRotation
            }
        );
        assert_relative_eq!(
            result.inflow_angle.get::<radian>(),
            std::f64::consts::FRAC_PI_2
        );
        assert_all_finite(&result);
    }

    #[test]
    fn still_air_and_parked_rotor_has_no_load() {
        let flow = scenario_flow()
            .with_wind_speed(Velocity::new::<meter_per_second>(0.0))
            .unwrap()
            .with_rotor_speed(AngularVelocity::new::<radian_per_second>(0.0))
            .unwrap();
        let result = BemSolver::default().solve_station(&scenario_station(), &flow, None);

        assert_eq!(result.status, StationStatus::Converged { iterations: 0 });
        assert_eq!(result.thrust_per_length.value, 0.0);
        assert_eq!(result.torque_per_length.value, 0.0);
        assert_all_finite(&result);
    }

    #[test]
    fn zero_iteration_budget_reports_seed() {
        let config = BemConfig {
            max_iterations: 0,
            ..BemConfig::default()
        };
        let seed = Induction::new(0.05, 0.01);
        let result =
            BemSolver::new(config).solve_station(&scenario_station(), &scenario_flow(), Some(seed));

        let StationStatus::MaxIterReached {
            iterations,
            residual,
        } = result.status
        else {
            panic!("unexpected status {:?}", result.status);
        };
        assert_eq!(iterations, 0);
        assert!(residual.is_finite());
        assert_eq!(result.induction, seed);
    }

    #[test]
    fn warm_start_from_solution_converges_immediately() {
        let solver = BemSolver::default();
        let cold = solver.solve_station(&scenario_station(), &scenario_flow(), None);
        let warm =
            solver.solve_station(&scenario_station(), &scenario_flow(), Some(cold.induction));

        assert_eq!(warm.status, StationStatus::Converged { iterations: 1 });
        assert_eq!(warm.induction, cold.induction);
    }

    #[test]
    fn non_finite_seed_is_ignored() {
        let solver = BemSolver::default();
        let cold = solver.solve_station(&scenario_station(), &scenario_flow(), None);
        let seeded = solver.solve_station(
            &scenario_station(),
            &scenario_flow(),
            Some(Induction::new(f64::NAN, 0.0)),
        );
        assert_eq!(cold, seeded);
    }

    #[test]
    fn every_rotor_station_converges() {
        let blade = rotor_blade(1.0, 0.0);
        let results = BemSolver::default().solve_stations(blade.stations(), &rotor_flow(), None);

        assert_eq!(results.len(), blade.len());
        for result in &results {
            assert!(result.is_converged(), "{result:?}");
            assert_all_finite(result);
        }
        assert_relative_eq!(results[0].induction.axial, 0.4258, epsilon = 1e-3);
    }

    #[test]
    fn solve_stations_matches_individual_solves() {
        let blade = rotor_blade(1.0, 0.0);
        let flow = rotor_flow();
        let solver = BemSolver::default();

        let batch = solver.solve_stations(blade.stations(), &flow, None);
        let single: Vec<_> = blade
            .stations()
            .iter()
            .map(|station| solver.solve_station(station, &flow, None))
            .collect();
        assert_eq!(batch, single);
    }

    #[test]
    fn fallback_rescues_stalled_station() {
        let blade = rotor_blade(3.0, -6.0);
        let flow = rotor_flow()
            .with_rotor_speed(AngularVelocity::new::<radian_per_second>(5.6 * 1.6))
            .unwrap();
        let station = &blade.stations()[3];

        let stalled = BemSolver::default().solve_station(station, &flow, None);
        assert!(matches!(
            stalled.status,
            StationStatus::MaxIterReached { .. }
        ));
        assert_all_finite(&stalled);

        let config = BemConfig {
            fallback: Some(BracketConfig::default()),
            ..BemConfig::default()
        };
        let rescued = BemSolver::new(config).solve_station(station, &flow, None);
        assert!(rescued.is_converged(), "{rescued:?}");
        assert_eq!(rescued.method, SolveMethod::Bracketed);
        assert_relative_eq!(rescued.induction.axial, 0.9704, epsilon = 1e-3);
        assert_all_finite(&rescued);
    }

    #[test]
    fn fallback_is_unused_when_fixed_point_converges() {
        let config = BemConfig {
            fallback: Some(BracketConfig::default()),
            ..BemConfig::default()
        };
        let with =
            BemSolver::new(config).solve_station(&scenario_station(), &scenario_flow(), None);
        let without =
            BemSolver::default().solve_station(&scenario_station(), &scenario_flow(), None);
        assert_eq!(with, without);
    }

    #[test]
    fn viscosity_selects_the_reynolds_table() {
        let table = |lift_at_10: f64, drag_at_10: f64| {
            Polar::new([
                PolarSample::degrees(0.0, 0.5, 0.02),
                PolarSample::degrees(10.0, lift_at_10, drag_at_10),
            ])
            .unwrap()
        };
        let airfoil = AirfoilInterpolator::with_reynolds(vec![
            (1.0e5, table(0.8, 0.08)),
            (1.0e6, table(1.0, 0.05)),
        ])
        .unwrap();
        let station = BladeStation::new(
            Length::new::<meter>(10.0),
            Length::new::<meter>(1.0),
            Angle::new::<degree>(2.0),
            Arc::new(airfoil),
        )
        .unwrap();

        let solver = uncorrected();
        let air = solver.solve_station(&station, &scenario_flow(), None);
        let viscous_flow = scenario_flow()
            .with_viscosity(DynamicViscosity::new::<pascal_second>(1.0e-3))
            .unwrap();
        let viscous = solver.solve_station(&station, &viscous_flow, None);

        assert!(air.is_converged());
        assert!(viscous.is_converged());

        // Both solutions sit past the last sampled angle, so each clamps to
        // the end of whichever table its Reynolds number selects.
        assert!(air.reynolds > 1.0e6, "{air:?}");
        assert_relative_eq!(air.coefficients.lift, 1.0);
        assert_relative_eq!(air.coefficients.drag, 0.05);

        assert!(viscous.reynolds < 1.0e5, "{viscous:?}");
        assert_relative_eq!(
            viscous.reynolds,
            1.225 * viscous.relative_velocity.value / 1.0e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(viscous.coefficients.lift, 0.8);
        assert_relative_eq!(viscous.coefficients.drag, 0.08);
        assert!(viscous.induction.axial < air.induction.axial);
    }
}
