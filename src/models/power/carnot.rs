//! Carnot cycle in steady-state form.

use std::convert::Infallible;

use uom::{
    ConstZero,
    si::{
        f64::{Ratio, ThermodynamicTemperature},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::{
    models::power::{InvalidCycleError, PowerCycle},
    support::units::{SpecificEnthalpy, SpecificEntropy, TemperatureDifference},
};

/// The ideal two-temperature cycle: isothermal heat addition at `T_hot`,
/// isothermal rejection at `T_cold`, isentropic strokes in between.
///
/// `delta_s` is the specific entropy change of the isothermal legs in
/// J/(kg·K); the [`SpecificEntropy`] type fixes that convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotCycle {
    t_cold: ThermodynamicTemperature,
    t_hot: ThermodynamicTemperature,
    delta_s: SpecificEntropy,
}

/// Performance metrics of a [`CarnotCycle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarnotMetrics {
    /// Ratio of net specific work to input heat, from 0 to 1.
    pub thermal_efficiency: Ratio,

    /// Net specific work output, J/kg.
    pub specific_work: SpecificEnthalpy,

    /// Specific heat added at `T_hot`, J/kg.
    pub input_heat: SpecificEnthalpy,

    /// Specific heat rejected at `T_cold`, J/kg.
    pub output_heat: SpecificEnthalpy,
}

impl CarnotCycle {
    /// Creates a Carnot cycle between two reservoir temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCycleError`] if either temperature is negative,
    /// if `t_cold` exceeds `t_hot`, or if `delta_s` is negative.
    pub fn new(
        t_cold: ThermodynamicTemperature,
        t_hot: ThermodynamicTemperature,
        delta_s: SpecificEntropy,
    ) -> Result<Self, InvalidCycleError> {
        if t_cold.value < 0.0 || t_hot.value < 0.0 {
            return Err(InvalidCycleError::NegativeTemperature);
        }
        if t_cold > t_hot {
            return Err(InvalidCycleError::ColdAboveHot);
        }
        if delta_s.value < 0.0 {
            return Err(InvalidCycleError::NegativeEntropyVariation);
        }

        Ok(Self {
            t_cold,
            t_hot,
            delta_s,
        })
    }
}

impl PowerCycle for CarnotCycle {
    type Metrics = CarnotMetrics;
    type Error = Infallible;

    /// Evaluates the closed-form Carnot relations.
    ///
    /// When `t_cold == t_hot` the cycle degenerates: efficiency and
    /// specific work are exactly zero. The branch also keeps a
    /// zero-kelvin cycle from evaluating `0/0`.
    fn run(&self) -> Result<CarnotMetrics, Infallible> {
        let thermal_efficiency = if self.t_cold == self.t_hot {
            Ratio::ZERO
        } else {
            Ratio::new::<ratio>(1.0 - self.t_cold.get::<kelvin>() / self.t_hot.get::<kelvin>())
        };

        Ok(CarnotMetrics {
            thermal_efficiency,
            specific_work: self.delta_s * self.t_hot.minus(self.t_cold),
            input_heat: self.delta_s * self.t_hot.above_absolute_zero(),
            output_heat: self.delta_s * self.t_cold.above_absolute_zero(),
        })
    }
}
