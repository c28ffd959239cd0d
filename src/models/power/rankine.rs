//! Rankine vapor cycle models.
//!
//! Both Rankine variants are ideal: the pump and turbine are isentropic,
//! the heat exchangers are isobaric, and the pump work uses the
//! incompressible-liquid approximation `w = v·ΔP`. Every state is
//! evaluated through a fluid-property model; the property evaluations
//! form a strict data-dependency chain (each one consumes the previous
//! result), so `run` is a fixed sequence of lookups.

mod simple;
mod superheat;
mod sweep;

pub use simple::{SimpleRankineCycle, SimpleRankineMetrics};
pub use superheat::{SuperheatRankineCycle, SuperheatRankineMetrics};
pub use sweep::BoilerPressureSweep;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::{
    models::power::InvalidCycleError,
    support::{
        thermo::{Quality, capability::StateAt},
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

/// Required property-model capabilities for Rankine cycle evaluation.
///
/// Blanket-implemented for any model supporting the four lookups the
/// cycles perform: saturation states, the compressed-liquid point after
/// the pump, the isentropic turbine outlet, and the superheater outlet.
pub trait RankineFluidModel:
    StateAt<(Pressure, Quality)>
    + StateAt<(SpecificEnthalpy, SpecificEntropy)>
    + StateAt<(Pressure, SpecificEntropy)>
    + StateAt<(Pressure, ThermodynamicTemperature)>
{
}

impl<M> RankineFluidModel for M where
    M: StateAt<(Pressure, Quality)>
        + StateAt<(SpecificEnthalpy, SpecificEntropy)>
        + StateAt<(Pressure, SpecificEntropy)>
        + StateAt<(Pressure, ThermodynamicTemperature)>
{
}

/// Validates the shared condenser/boiler pressure preconditions.
fn validate_pressures(
    p_condenser: Pressure,
    p_boiler: Pressure,
) -> Result<(), InvalidCycleError> {
    if p_condenser.value < 0.0 || p_boiler.value < 0.0 {
        return Err(InvalidCycleError::NegativePressure);
    }
    if p_boiler < p_condenser {
        return Err(InvalidCycleError::CondenserAboveBoiler);
    }
    Ok(())
}
