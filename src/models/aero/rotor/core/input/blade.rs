use std::sync::Arc;

use crate::support::{
    airfoil::AirfoilInterpolator,
    constraint::{Constrained, ConstraintResult, Finite, StrictlyPositive},
};
use uom::si::f64::{Angle, Length};

use super::GeometryError;

/// One radial position along a blade.
///
/// Radius and chord are guaranteed to be finite and strictly positive and
/// the twist to be finite. The airfoil is shared, so many stations (and many threads) can
/// point at the same polar data without copying it.
#[derive(Debug, Clone)]
pub struct BladeStation {
    radius: Length,
    chord: Length,
    twist: Angle,
    airfoil: Arc<AirfoilInterpolator>,
}

impl BladeStation {
    /// Constructs a validated blade station.
    ///
    /// # Errors
    ///
    /// Returns an error if radius or chord is not strictly positive and
    /// finite, or if the twist is not finite.
    pub fn new(
        radius: Length,
        chord: Length,
        twist: Angle,
        airfoil: Arc<AirfoilInterpolator>,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            Constrained::new_finite(radius)?,
            Constrained::new_finite(chord)?,
            Finite::new(twist)?,
            airfoil,
        ))
    }

    /// Constructs a station from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        radius: Constrained<Length, StrictlyPositive>,
        chord: Constrained<Length, StrictlyPositive>,
        twist: Constrained<Angle, Finite>,
        airfoil: Arc<AirfoilInterpolator>,
    ) -> Self {
        Self {
            radius: radius.into_inner(),
            chord: chord.into_inner(),
            twist: twist.into_inner(),
            airfoil,
        }
    }

    /// Radial position of the station.
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }

    /// Local chord length.
    #[must_use]
    pub fn chord(&self) -> Length {
        self.chord
    }

    /// Local twist, measured from the rotor plane.
    #[must_use]
    pub fn twist(&self) -> Angle {
        self.twist
    }

    /// Airfoil data used at this station.
    #[must_use]
    pub fn airfoil(&self) -> &AirfoilInterpolator {
        &self.airfoil
    }
}

/// An ordered set of blade stations, root to tip.
///
/// Guaranteed non-empty with strictly increasing station radius.
#[derive(Debug, Clone)]
pub struct Blade {
    stations: Vec<BladeStation>,
}

impl Blade {
    /// Constructs a blade from stations ordered root to tip.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoStations`] for an empty list and
    /// [`GeometryError::NonIncreasingRadius`] if any station is not outboard of
    /// its predecessor.
    pub fn new(stations: Vec<BladeStation>) -> Result<Self, GeometryError> {
        if stations.is_empty() {
            return Err(GeometryError::NoStations);
        }

        if let Some(index) = stations
            .windows(2)
            .position(|pair| pair[1].radius <= pair[0].radius)
        {
            return Err(GeometryError::NonIncreasingRadius { index: index + 1 });
        }

        Ok(Self { stations })
    }

    /// Builds a blade from `(radius, chord, twist)` triples sharing one airfoil.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Station`] if a triple is invalid, or any error
    /// from [`Blade::new`].
    pub fn from_sections(
        sections: impl IntoIterator<Item = (Length, Length, Angle)>,
        airfoil: &Arc<AirfoilInterpolator>,
    ) -> Result<Self, GeometryError> {
        let stations = sections
            .into_iter()
            .enumerate()
            .map(|(index, (radius, chord, twist))| {
                BladeStation::new(radius, chord, twist, Arc::clone(airfoil))
                    .map_err(|source| GeometryError::Station { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stations)
    }

    /// Stations ordered from root to tip.
    #[must_use]
    pub fn stations(&self) -> &[BladeStation] {
        &self.stations
    }

    /// Number of stations (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; a blade holds at least one station.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
