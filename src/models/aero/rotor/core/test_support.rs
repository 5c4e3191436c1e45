use std::sync::Arc;

use crate::support::airfoil::{AirfoilInterpolator, Polar, PolarSample};
use uom::si::{
    angle::degree,
    angular_velocity::radian_per_second,
    f64::{Angle, AngularVelocity, Length, MassDensity, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use super::{Blade, BladeStation, FlowConditions};

/// Two-sample airfoil: 0° gives (0.5, 0.02), 10° gives (1.0, 0.05).
pub(crate) fn two_point_airfoil() -> Arc<AirfoilInterpolator> {
    let polar = Polar::new([
        PolarSample::degrees(0.0, 0.5, 0.02),
        PolarSample::degrees(10.0, 1.0, 0.05),
    ])
    .unwrap();
    Arc::new(AirfoilInterpolator::new(polar))
}

/// Station at r = 10 m with a 1 m chord and 2° twist.
pub(crate) fn scenario_station() -> BladeStation {
    BladeStation::new(
        Length::new::<meter>(10.0),
        Length::new::<meter>(1.0),
        Angle::new::<degree>(2.0),
        two_point_airfoil(),
    )
    .unwrap()
}

/// Three blades, 12 m tip radius, 10 m/s wind, 2 rad/s.
pub(crate) fn scenario_flow() -> FlowConditions {
    FlowConditions::new(
        Velocity::new::<meter_per_second>(10.0),
        AngularVelocity::new::<radian_per_second>(2.0),
        MassDensity::new::<kilogram_per_cubic_meter>(1.225),
        3,
        Length::new::<meter>(12.0),
    )
    .unwrap()
}

/// A cambered airfoil with stall past 12°.
pub(crate) fn cambered_airfoil() -> Arc<AirfoilInterpolator> {
    let polar = Polar::new([
        PolarSample::degrees(-10.0, -0.6, 0.03),
        PolarSample::degrees(0.0, 0.4, 0.008),
        PolarSample::degrees(8.0, 1.2, 0.012),
        PolarSample::degrees(12.0, 1.4, 0.03),
        PolarSample::degrees(20.0, 1.1, 0.2),
    ])
    .unwrap();
    Arc::new(AirfoilInterpolator::new(polar))
}

/// Eight stations from r = 1.5 m to the 10 m tip.
///
/// `chord_scale` and `twist_offset_deg` load the blade more heavily.
pub(crate) fn rotor_blade(chord_scale: f64, twist_offset_deg: f64) -> Blade {
    let airfoil = cambered_airfoil();
    let sections = (0..8).map(|i| {
        let i = f64::from(i);
        (
            Length::new::<meter>(1.5 + i * 8.5 / 7.0),
            Length::new::<meter>(chord_scale * (1.2 - 0.08 * i)),
            Angle::new::<degree>(14.0 - 1.9 * i + twist_offset_deg),
        )
    });
    Blade::from_sections(sections, &airfoil).unwrap()
}

/// Three blades, 10 m tip, 1 m hub, 8 m/s wind, tip speed ratio 7.
pub(crate) fn rotor_flow() -> FlowConditions {
    FlowConditions::new(
        Velocity::new::<meter_per_second>(8.0),
        AngularVelocity::new::<radian_per_second>(5.6),
        MassDensity::new::<kilogram_per_cubic_meter>(1.225),
        3,
        Length::new::<meter>(10.0),
    )
    .unwrap()
    .with_hub_radius(Length::new::<meter>(1.0))
    .unwrap()
}
