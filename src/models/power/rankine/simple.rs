use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::{
    models::power::{InvalidCycleError, PowerCycle, rankine},
    support::{
        thermo::{PropertyError, Quality, capability::PropertyModel},
        units::{SpecificEnthalpy, SpecificEntropy},
    },
};

use super::RankineFluidModel;

/// Simple Rankine cycle (no superheat) in steady-state form.
///
/// The working fluid leaves the condenser as saturated liquid and the
/// boiler as saturated vapor. States are indexed in flow order:
///
/// | index | location                          |
/// |-------|-----------------------------------|
/// | 0     | condenser outlet / pump inlet     |
/// | 1     | pump outlet / boiler inlet        |
/// | 2     | boiler outlet / turbine inlet     |
/// | 3     | turbine outlet / condenser inlet  |
#[derive(Debug)]
pub struct SimpleRankineCycle<'a, M: PropertyModel> {
    thermo: &'a M,
    fluid: M::Fluid,
    p_condenser: Pressure,
    p_boiler: Pressure,
}

/// Performance metrics of a [`SimpleRankineCycle`].
///
/// The temperature and entropy arrays follow the state order documented
/// on the cycle type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleRankineMetrics {
    /// Ratio of net specific work to boiler heat, from 0 to 1.
    pub thermal_efficiency: Ratio,

    /// Net specific work output (turbine minus pump), J/kg.
    pub specific_work: SpecificEnthalpy,

    /// Temperatures at states 0–3, K.
    pub temperatures: [ThermodynamicTemperature; 4],

    /// Specific entropies at states 0–3, J/(kg·K).
    pub entropies: [SpecificEntropy; 4],

    /// Specific heat added in the boiler, J/kg.
    pub boiler_heat: SpecificEnthalpy,

    /// Specific heat rejected in the condenser, J/kg.
    pub condenser_heat: SpecificEnthalpy,

    /// Specific pump work, J/kg.
    pub pump_work: SpecificEnthalpy,

    /// Specific turbine work, J/kg.
    pub turbine_work: SpecificEnthalpy,
}

impl<'a, M: PropertyModel> SimpleRankineCycle<'a, M> {
    /// Creates a simple Rankine cycle between two pressures.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCycleError`] if either pressure is negative or
    /// the condenser pressure exceeds the boiler pressure.
    pub fn new(
        thermo: &'a M,
        fluid: M::Fluid,
        p_condenser: Pressure,
        p_boiler: Pressure,
    ) -> Result<Self, InvalidCycleError> {
        rankine::validate_pressures(p_condenser, p_boiler)?;
        Ok(Self {
            thermo,
            fluid,
            p_condenser,
            p_boiler,
        })
    }
}

impl<M: RankineFluidModel> PowerCycle for SimpleRankineCycle<'_, M> {
    type Metrics = SimpleRankineMetrics;
    type Error = PropertyError;

    /// Walks the four cycle states in flow order.
    ///
    /// Each property evaluation feeds the next: the condenser-outlet
    /// state fixes the pump work, the pump-outlet enthalpy fixes the
    /// boiler heat, and the boiler-outlet entropy fixes the turbine
    /// expansion.
    fn run(&self) -> Result<SimpleRankineMetrics, PropertyError> {
        let condenser_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_condenser, Quality::SATURATED_LIQUID))?;

        // First and second law across the isentropic pump, treating the
        // liquid as incompressible.
        let pump_work = condenser_outlet.specific_volume() * (self.p_boiler - self.p_condenser);
        let h_pump_outlet = condenser_outlet.enthalpy + pump_work;
        let pump_outlet = self
            .thermo
            .state_at(&self.fluid, (h_pump_outlet, condenser_outlet.entropy))?;

        let boiler_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_boiler, Quality::SATURATED_VAPOR))?;
        let boiler_heat = boiler_outlet.enthalpy - h_pump_outlet;

        // Isentropic expansion back down to the condenser pressure; the
        // condenser temperature is fixed by that pressure.
        let turbine_outlet = self
            .thermo
            .state_at(&self.fluid, (self.p_condenser, boiler_outlet.entropy))?;
        let turbine_work = boiler_outlet.enthalpy - turbine_outlet.enthalpy;
        let condenser_heat = turbine_outlet.enthalpy - condenser_outlet.enthalpy;

        let specific_work = turbine_work - pump_work;
        let thermal_efficiency: Ratio = specific_work / boiler_heat;

        Ok(SimpleRankineMetrics {
            thermal_efficiency,
            specific_work,
            temperatures: [
                condenser_outlet.temperature,
                pump_outlet.temperature,
                boiler_outlet.temperature,
                condenser_outlet.temperature,
            ],
            entropies: [
                condenser_outlet.entropy,
                condenser_outlet.entropy,
                boiler_outlet.entropy,
                boiler_outlet.entropy,
            ],
            boiler_heat,
            condenser_heat,
            pump_work,
            turbine_work,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{pressure::pascal, ratio::ratio, thermodynamic_temperature::kelvin};

    use crate::{
        models::power::CarnotCycle,
        support::thermo::{
            FluidState,
            capability::{SaturationPressure, StateAt},
            fluid::{Ammonia, R134a, Water},
            model::TwoPhase,
        },
    };

    fn pascals(value: f64) -> Pressure {
        Pressure::new::<pascal>(value)
    }

    const PRESSURE_CASES: [(f64, f64); 4] =
        [(5e3, 1e6), (10e3, 16e6), (15e3, 20e6), (15e3, 500e3)];

    fn run_water(p_condenser: f64, p_boiler: f64) -> SimpleRankineMetrics {
        let thermo = TwoPhase::<Water>::new().unwrap();
        SimpleRankineCycle::new(&thermo, Water, pascals(p_condenser), pascals(p_boiler))
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn efficiency_is_non_negative() {
        for (p_condenser, p_boiler) in PRESSURE_CASES {
            let metrics = run_water(p_condenser, p_boiler);
            assert!(metrics.thermal_efficiency.get::<ratio>() >= 0.0);
        }
    }

    #[test]
    fn efficiency_stays_below_carnot() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        for (p_condenser, p_boiler) in PRESSURE_CASES {
            let metrics = run_water(p_condenser, p_boiler);

            // Carnot comparison between the same saturation temperatures,
            // with the entropy change taken across the boiler's vapor dome.
            let t_cold = thermo
                .state_at(&Water, (pascals(p_condenser), Quality::SATURATED_LIQUID))
                .unwrap()
                .temperature;
            let boiler_liquid = thermo
                .state_at(&Water, (pascals(p_boiler), Quality::SATURATED_LIQUID))
                .unwrap();
            let boiler_vapor = thermo
                .state_at(&Water, (pascals(p_boiler), Quality::SATURATED_VAPOR))
                .unwrap();
            let delta_s = boiler_vapor.entropy - boiler_liquid.entropy;
            assert!(delta_s.value > 0.0);

            let carnot = CarnotCycle::new(t_cold, boiler_liquid.temperature, delta_s)
                .unwrap()
                .run()
                .unwrap();

            assert!(metrics.thermal_efficiency < carnot.thermal_efficiency);
        }
    }

    #[test]
    fn specific_work_is_non_negative() {
        for (p_condenser, p_boiler) in PRESSURE_CASES {
            let metrics = run_water(p_condenser, p_boiler);
            assert!(metrics.specific_work.value >= 0.0);
        }
    }

    #[test]
    fn first_law_balance_holds() {
        for (p_condenser, p_boiler) in PRESSURE_CASES {
            let metrics = run_water(p_condenser, p_boiler);

            let residual = (metrics.boiler_heat + metrics.pump_work)
                - (metrics.turbine_work + metrics.condenser_heat);
            // The residual is kept as an inequality with an explicit
            // floating-point tolerance rather than an exact zero; see the
            // cycle energy balance discussion in DESIGN.md.
            assert!(residual.value.abs() <= 1e-6 * metrics.boiler_heat.value.abs());
        }
    }

    #[test]
    fn state_sequences_are_consistent() {
        let metrics = run_water(5e3, 1e6);

        // Condenser temperature is fixed by the condenser pressure.
        assert_eq!(metrics.temperatures[3], metrics.temperatures[0]);
        // Pump and turbine are isentropic.
        assert_eq!(metrics.entropies[1], metrics.entropies[0]);
        assert_eq!(metrics.entropies[3], metrics.entropies[2]);
        // Boiling happens above the condensing temperature.
        assert!(metrics.temperatures[2] > metrics.temperatures[0]);
    }

    #[test]
    fn fluid_comparison_stays_below_carnot() {
        let t_condenser = ThermodynamicTemperature::new::<kelvin>(313.15);
        let t_boiler = ThermodynamicTemperature::new::<kelvin>(358.15);
        let carnot_efficiency = 1.0 - 313.15 / 358.15;

        fn efficiency<F: Default + Copy>(
            thermo: &TwoPhase<F>,
            t_condenser: ThermodynamicTemperature,
            t_boiler: ThermodynamicTemperature,
        ) -> f64 {
            let p_condenser = thermo
                .saturation_pressure(&F::default(), t_condenser)
                .unwrap();
            let p_boiler = thermo.saturation_pressure(&F::default(), t_boiler).unwrap();
            SimpleRankineCycle::new(thermo, F::default(), p_condenser, p_boiler)
                .unwrap()
                .run()
                .unwrap()
                .thermal_efficiency
                .get::<ratio>()
        }

        let water = efficiency(&TwoPhase::<Water>::new().unwrap(), t_condenser, t_boiler);
        let ammonia = efficiency(&TwoPhase::<Ammonia>::new().unwrap(), t_condenser, t_boiler);
        let r134a = efficiency(&TwoPhase::<R134a>::new().unwrap(), t_condenser, t_boiler);

        for efficiency in [water, ammonia, r134a] {
            assert!(efficiency > 0.0);
            assert!(efficiency < carnot_efficiency);
        }
    }

    #[test]
    fn negative_condenser_pressure_is_rejected() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        let err = SimpleRankineCycle::new(&thermo, Water, pascals(-1.0), pascals(10.0)).unwrap_err();
        assert_eq!(err.to_string(), "pressure values cannot be negative");
    }

    #[test]
    fn negative_boiler_pressure_is_rejected() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        let err = SimpleRankineCycle::new(&thermo, Water, pascals(1.0), pascals(-10.0)).unwrap_err();
        assert_eq!(err.to_string(), "pressure values cannot be negative");
    }

    #[test]
    fn inverted_pressures_are_rejected() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        let err = SimpleRankineCycle::new(&thermo, Water, pascals(1e3), pascals(1e2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "condenser pressure should be lower than boiler pressure"
        );
    }

    /// Property model that fails every saturation lookup.
    struct FailingThermo;

    impl PropertyModel for FailingThermo {
        type Fluid = Water;
    }

    impl StateAt<(Pressure, Quality)> for FailingThermo {
        fn state_at(
            &self,
            _fluid: &Water,
            _input: (Pressure, Quality),
        ) -> Result<FluidState, PropertyError> {
            Err(PropertyError::OutOfDomain {
                context: "no saturation data".into(),
            })
        }
    }

    impl StateAt<(SpecificEnthalpy, SpecificEntropy)> for FailingThermo {
        fn state_at(
            &self,
            _fluid: &Water,
            _input: (SpecificEnthalpy, SpecificEntropy),
        ) -> Result<FluidState, PropertyError> {
            unreachable!("the first lookup already failed")
        }
    }

    impl StateAt<(Pressure, SpecificEntropy)> for FailingThermo {
        fn state_at(
            &self,
            _fluid: &Water,
            _input: (Pressure, SpecificEntropy),
        ) -> Result<FluidState, PropertyError> {
            unreachable!("the first lookup already failed")
        }
    }

    impl StateAt<(Pressure, ThermodynamicTemperature)> for FailingThermo {
        fn state_at(
            &self,
            _fluid: &Water,
            _input: (Pressure, ThermodynamicTemperature),
        ) -> Result<FluidState, PropertyError> {
            unreachable!("the first lookup already failed")
        }
    }

    #[test]
    fn property_errors_pass_through_unmodified() {
        let cycle =
            SimpleRankineCycle::new(&FailingThermo, Water, pascals(5e3), pascals(1e6)).unwrap();
        let err = cycle.run().unwrap_err();
        assert_eq!(
            err,
            PropertyError::OutOfDomain {
                context: "no saturation data".into()
            }
        );
    }
}
