use thiserror::Error;
use uom::si::f64::Length;

use super::GeometryError;

/// Errors that can occur while solving a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RotorError {
    /// The blade geometry is invalid.
    #[error("invalid blade geometry")]
    Geometry(#[from] GeometryError),

    /// A station lies at or inside the hub, or beyond the tip.
    #[error("station {index} at r={radius:?} lies outside the rotor annulus")]
    StationOutsideRotor { index: usize, radius: Length },

    /// The warm start does not have one entry per station.
    #[error("warm start has {found} entries for {expected} stations")]
    WarmStartLength { expected: usize, found: usize },
}
