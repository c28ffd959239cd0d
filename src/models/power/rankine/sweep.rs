use twine_core::Model;
use uom::si::f64::Pressure;

use crate::{
    models::power::{CycleError, PowerCycle},
    support::thermo::capability::PropertyModel,
};

use super::{RankineFluidModel, SimpleRankineCycle, SimpleRankineMetrics};

/// Sweeps a simple Rankine cycle over boiler pressure.
///
/// Holds the property model, fluid, and condenser pressure fixed and
/// treats the boiler pressure as the [`Model`] input, so the sweep can
/// be driven point by point by generic tooling.
#[derive(Debug)]
pub struct BoilerPressureSweep<'a, M: PropertyModel> {
    thermo: &'a M,
    fluid: M::Fluid,
    p_condenser: Pressure,
}

impl<'a, M: PropertyModel> BoilerPressureSweep<'a, M> {
    pub fn new(thermo: &'a M, fluid: M::Fluid, p_condenser: Pressure) -> Self {
        Self {
            thermo,
            fluid,
            p_condenser,
        }
    }
}

impl<M: RankineFluidModel> Model for BoilerPressureSweep<'_, M>
where
    M::Fluid: Clone,
{
    type Input = Pressure;
    type Output = SimpleRankineMetrics;
    type Error = CycleError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let cycle =
            SimpleRankineCycle::new(self.thermo, self.fluid.clone(), self.p_condenser, *input)?;
        Ok(cycle.run()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::pressure::pascal;

    use crate::support::thermo::{fluid::Water, model::TwoPhase};

    fn pascals(value: f64) -> Pressure {
        Pressure::new::<pascal>(value)
    }

    #[test]
    fn efficiency_rises_with_boiler_pressure() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        let sweep = BoilerPressureSweep::new(&thermo, Water, pascals(50e3));

        let mut previous = None;
        let mut p_boiler = 0.5e6;
        while p_boiler <= 15e6 {
            let metrics = sweep.call(&pascals(p_boiler)).unwrap();
            if let Some(previous) = previous {
                assert!(metrics.thermal_efficiency > previous);
            }
            previous = Some(metrics.thermal_efficiency);
            p_boiler += 1.45e6;
        }
    }

    #[test]
    fn boiler_pressure_below_condenser_is_rejected() {
        let thermo = TwoPhase::<Water>::new().unwrap();
        let sweep = BoilerPressureSweep::new(&thermo, Water, pascals(50e3));

        let err = sweep.call(&pascals(10e3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "condenser pressure should be lower than boiler pressure"
        );
    }
}
