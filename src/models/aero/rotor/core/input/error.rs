use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while assembling blade geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A blade needs at least one station.
    #[error("blade has no stations")]
    NoStations,

    /// Station radii must be strictly increasing from root to tip.
    #[error("station {index} does not lie outboard of the previous station")]
    NonIncreasingRadius {
        /// Index of the first offending station.
        index: usize,
    },

    /// A station value violated its numeric constraint.
    #[error("station {index} is invalid: {source}")]
    Station {
        /// Index of the offending station.
        index: usize,
        #[source]
        source: ConstraintError,
    },
}
