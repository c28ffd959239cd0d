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

/// Canonical identifier for the refrigerant R-134a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct R134a;

impl TwoPhaseFluid for R134a {
    fn parameters() -> TwoPhaseParameters {
        TwoPhaseParameters {
            liquid_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1420.0),
            liquid_density: MassDensity::new::<kilogram_per_cubic_meter>(1295.0),
            vapor_cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(850.0),
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(81.49),
            latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(217.0e3),
            boiling_temperature: ThermodynamicTemperature::new::<kelvin>(247.08),
        }
    }
}
