use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::model::two_phase::{TwoPhaseFluid, TwoPhaseParameters},
    units::{SpecificEnthalpy, SpecificGasConstant},
};

/// Canonical identifier for ammonia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ammonia;

impl TwoPhaseFluid for Ammonia {
    fn parameters() -> TwoPhaseParameters {
        TwoPhaseParameters {
            liquid_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4700.0),
            liquid_density: MassDensity::new::<kilogram_per_cubic_meter>(682.0),
            vapor_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2175.0),
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(488.21),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(1.371e6),
            boiling_temperature: ThermodynamicTemperature::new::<kelvin>(239.82),
        }
    }
}
