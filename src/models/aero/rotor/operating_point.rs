use super::{FlowConditions, Induction, RotorResults};

/// Input to a [`Rotor`](super::Rotor) solve.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoint {
    pub flow: FlowConditions,

    /// Initial induction per station, root to tip.
    ///
    /// `None` starts every station from zero induction.
    pub warm_start: Option<Vec<Induction>>,
}

impl OperatingPoint {
    #[must_use]
    pub fn new(flow: FlowConditions) -> Self {
        Self {
            flow,
            warm_start: None,
        }
    }

    /// Seeds each station with its induction from a previous solve.
    ///
    /// Useful when sweeping wind or rotor speed in small steps.
    #[must_use]
    pub fn warm_started_from(self, previous: &RotorResults) -> Self {
        Self {
            warm_start: Some(
                previous
                    .stations
                    .iter()
                    .map(|station| station.induction)
                    .collect(),
            ),
            ..self
        }
    }
}

impl From<FlowConditions> for OperatingPoint {
    fn from(flow: FlowConditions) -> Self {
        Self::new(flow)
    }
}
