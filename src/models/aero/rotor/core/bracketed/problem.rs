//! Problem formulation for the bracketed inflow-angle solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{angle::radian, f64::Angle};

use crate::models::aero::rotor::core::{Induction, element::Element};

use super::error::SingularBalance;

/// Momentum balance at a prescribed inflow angle.
#[derive(Debug, Clone, Copy)]
pub(super) struct AngleSolution {
    pub phi: f64,
    pub induction: Induction,
    pub residual: f64,
}

/// Model adapter exposing the inflow angle as the sole input.
pub(super) struct AngleModel<'a, 'b> {
    element: &'a Element<'b>,
}

impl<'a, 'b> AngleModel<'a, 'b> {
    pub(super) fn new(element: &'a Element<'b>) -> Self {
        Self { element }
    }
}

impl Model for AngleModel<'_, '_> {
    type Input = Angle;
    type Output = AngleSolution;
    type Error = SingularBalance;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let phi = input.get::<radian>();
        self.element
            .balance_at(phi)
            .map(|balance| AngleSolution {
                phi,
                induction: balance.induction,
                residual: balance.residual,
            })
            .ok_or(SingularBalance {
                inflow_angle: *input,
            })
    }
}

/// Equation problem driving the angle residual to zero.
pub(super) struct AngleProblem;

impl EquationProblem<1> for AngleProblem {
    type Input = Angle;
    type Output = AngleSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Angle::new::<radian>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
