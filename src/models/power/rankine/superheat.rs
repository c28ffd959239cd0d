use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::{
    models::power::{CycleError, InvalidCycleError, PowerCycle, rankine},
    support::{
        thermo::{PropertyError, Quality, capability::PropertyModel},
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

use super::RankineFluidModel;

/// Rankine cycle with a superheater between the boiler and the turbine.
///
/// States are indexed in flow order:
///
/// | index | location                              |
/// |-------|---------------------------------------|
/// | 0     | condenser outlet / pump inlet         |
/// | 1     | pump outlet / boiler inlet            |
/// | 2     | boiler outlet / superheater inlet     |
/// | 3     | superheater outlet / turbine inlet    |
/// | 4     | turbine outlet / condenser inlet      |
#[derive(Debug)]
pub struct SuperheatRankineCycle<'a, M: PropertyModel> {
    thermo: &'a M,
    fluid: M::Fluid,
    p_condenser: Pressure,
    p_boiler: Pressure,
    t_turbine_inlet: ThermodynamicTemperature,
}

/// Performance metrics of a [`SuperheatRankineCycle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperheatRankineMetrics {
    /// Ratio of net specific work to total heat input, from 0 to 1.
    pub thermal_efficiency: Ratio,

    /// Net specific work output (turbine minus pump), J/kg.
    pub specific_work: SpecificEnthalpy,

    /// Temperatures at states 0–4, K.
    pub temperatures: [ThermodynamicTemperature; 5],

    /// Specific entropies at states 0–4, J/(kg·K).
    pub entropies: [SpecificEntropy; 5],

    /// Specific heat added in the boiler, J/kg.
    pub boiler_heat: SpecificEnthalpy,

    /// Specific heat added in the superheater, J/kg.
    pub superheater_heat: SpecificEnthalpy,

    /// Specific heat rejected in the condenser, J/kg.
    pub condenser_heat: SpecificEnthalpy,

    /// Specific pump work, J/kg.
    pub pump_work: SpecificEnthalpy,

    /// Specific turbine work, J/kg.
    pub turbine_work: SpecificEnthalpy,
}

impl<'a, M: RankineFluidModel> SuperheatRankineCycle<'a, M> {
    /// Creates a superheated Rankine cycle.
    ///
    /// The turbine inlet temperature must be above the saturation
    /// temperature at the boiler pressure, so construction queries the
    /// property model.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] if a pressure is negative, the condenser
    /// pressure exceeds the boiler pressure, the turbine inlet is at or
    /// below saturation, or the saturation lookup itself fails.
    pub fn new(
        thermo: &'a M,
        fluid: M::Fluid,
        p_condenser: Pressure,
        p_boiler: Pressure,
        t_turbine_inlet: ThermodynamicTemperature,
    ) -> Result<Self, CycleError> {
        rankine::validate_pressures(p_condenser, p_boiler)?;

        let saturated_vapor = thermo.state_at(&fluid, (p_boiler, Quality::SATURATED_VAPOR))?;
        if t_turbine_inlet <= saturated_vapor.temperature {
            return Err(InvalidCycleError::TurbineInletBelowSaturation.into());
        }

        Ok(Self {
            thermo,
            fluid,
            p_condenser,
            p_boiler,
            t_turbine_inlet,
        })
    }
}

impl<M: RankineFluidModel> PowerCycle for SuperheatRankineCycle<'_, M> {
    type Metrics = SuperheatRankineMetrics;
    type Error = PropertyError;

    fn run(&self) -> Result<SuperheatRankineMetrics, PropertyError> {
        let condenser_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_condenser, Quality::SATURATED_LIQUID))?;

        let pump_work = condenser_outlet.specific_volume() * (self.p_boiler - self.p_condenser);
        let h_pump_outlet = condenser_outlet.enthalpy + pump_work;
        let pump_outlet = self
            .thermo
            .state_at(&self.fluid, (h_pump_outlet, condenser_outlet.entropy))?;

        let boiler_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_boiler, Quality::SATURATED_VAPOR))?;
        let boiler_heat = boiler_outlet.enthalpy - h_pump_outlet;

        // Superheating happens at the boiler pressure.
        let superheater_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_boiler, self.t_turbine_inlet))?;
        let superheater_heat = superheater_outlet.enthalpy - boiler_outlet.enthalpy;

        let turbine_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_condenser, superheater_outlet.entropy))?;
        let turbine_work = superheater_outlet.enthalpy - turbine_outlet.enthalpy;
        let condenser_heat = turbine_outlet.enthalpy - condenser_outlet.enthalpy;

        let specific_work = turbine_work - pump_work;
        let thermal_efficiency: Ratio = specific_work / (boiler_heat + superheater_heat);

        Ok(SuperheatRankineMetrics {
            thermal_efficiency,
            specific_work,
            temperatures: [
                condenser_outlet.temperature,
                pump_outlet.temperature,
                boiler_outlet.temperature,
                self.t_turbine_inlet,
                condenser_outlet.temperature,
            ],
            entropies: [
                condenser_outlet.entropy,
                condenser_outlet.entropy,
                boiler_outlet.entropy,
                superheater_outlet.entropy,
                superheater_outlet.entropy,
            ],
            boiler_heat,
            superheater_heat,
            condenser_heat,
            pump_work,
            turbine_work,
        })
    }
}
