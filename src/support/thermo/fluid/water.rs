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

/// Canonical identifier for water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl TwoPhaseFluid for Water {
    fn parameters() -> TwoPhaseParameters {
        TwoPhaseParameters {
            liquid_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4184.0),
            liquid_density: MassDensity::new::<kilogram_per_cubic_meter>(997.047),
            vapor_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1996.0),
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.52),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(2.2564e6),
            boiling_temperature: ThermodynamicTemperature::new::<kelvin>(373.124),
        }
    }
}
