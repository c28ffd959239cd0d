//! Analytic two-phase property model.
//!
//! `TwoPhase` models a pure substance around its saturation curve using
//! three standard engineering approximations:
//!
//! - incompressible liquid with constant heat capacity and density,
//! - ideal-gas vapor with constant heat capacity,
//! - Clausius–Clapeyron saturation curve with constant latent heat,
//!   anchored at the normal boiling point.
//!
//! # Reference State
//!
//! Enthalpy and entropy are zero for saturated liquid at the normal
//! boiling point. Liquid enthalpy includes a `(P − P_atm)·v` compressed-
//! liquid correction so that pump work is representable.
//!
//! # When To Use
//!
//! Use this model for idealized cycle studies in the subcritical wet
//! region and its immediate neighbors (compressed liquid, superheated
//! vapor). It has no critical point: far above the normal boiling
//! pressure the saturation curve is an extrapolation. For quantitative
//! property work, substitute a full equation-of-state library behind the
//! same capability traits.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        FluidState, PropertyError, Quality,
        capability::{PropertyModel, SaturationPressure, StateAt},
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, TemperatureDifference},
};

/// Atmospheric pressure anchoring the saturation curve, in pascal.
const ATMOSPHERE_PA: f64 = 101_325.0;

fn atmosphere() -> Pressure {
    Pressure::new::<pascal>(ATMOSPHERE_PA)
}

/// Constant parameters for the [`TwoPhase`] model.
///
/// These values are typically provided by a fluid's [`TwoPhaseFluid`]
/// implementation. The latent heat and boiling temperature are taken at
/// atmospheric pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseParameters {
    pub liquid_cp: SpecificHeatCapacity,
    pub liquid_density: MassDensity,
    pub vapor_cp: SpecificHeatCapacity,
    pub gas_constant: SpecificGasConstant,
    pub latent_heat: SpecificEnthalpy,
    pub boiling_temperature: ThermodynamicTemperature,
}

/// Fluid constants required by the [`TwoPhase`] model.
pub trait TwoPhaseFluid {
    /// Returns the constant parameters for use with [`TwoPhase`].
    fn parameters() -> TwoPhaseParameters;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TwoPhaseParametersError {
    #[error("invalid liquid cp: {cp:?}")]
    LiquidCp { cp: SpecificHeatCapacity },
    #[error("invalid liquid density: {density:?}")]
    LiquidDensity { density: MassDensity },
    #[error("invalid vapor cp: {cp:?}")]
    VaporCp { cp: SpecificHeatCapacity },
    #[error("invalid gas constant: {gas_constant:?}")]
    GasConstant { gas_constant: SpecificGasConstant },
    #[error("invalid latent heat: {latent_heat:?}")]
    LatentHeat { latent_heat: SpecificEnthalpy },
    #[error("invalid boiling temperature: {boiling_temperature:?}")]
    BoilingTemperature {
        boiling_temperature: ThermodynamicTemperature,
    },
}

/// Analytic two-phase property model for the fluid `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhase<F> {
    liquid_cp: SpecificHeatCapacity,
    liquid_density: MassDensity,
    vapor_cp: SpecificHeatCapacity,
    gas_constant: SpecificGasConstant,
    latent_heat: SpecificEnthalpy,
    boiling_temperature: ThermodynamicTemperature,
    _marker: PhantomData<F>,
}

impl<F> PropertyModel for TwoPhase<F> {
    type Fluid = F;
}

impl<F> TwoPhase<F> {
    /// Creates a model using the constants defined by `F`.
    ///
    /// # Errors
    ///
    /// Returns [`TwoPhaseParametersError`] if any required constant is
    /// not strictly positive.
    pub fn new() -> Result<Self, TwoPhaseParametersError>
    where
        F: TwoPhaseFluid,
    {
        let parameters = F::parameters();

        let cp = parameters.liquid_cp;
        if !(cp.value > 0.0) {
            return Err(TwoPhaseParametersError::LiquidCp { cp });
        }

        let density = parameters.liquid_density;
        if !(density.value > 0.0) {
            return Err(TwoPhaseParametersError::LiquidDensity { density });
        }

        let cp = parameters.vapor_cp;
        if !(cp.value > 0.0) {
            return Err(TwoPhaseParametersError::VaporCp { cp });
        }

        let gas_constant = parameters.gas_constant;
        if !(gas_constant.value > 0.0) {
            return Err(TwoPhaseParametersError::GasConstant { gas_constant });
        }

        let latent_heat = parameters.latent_heat;
        if !(latent_heat.value > 0.0) {
            return Err(TwoPhaseParametersError::LatentHeat { latent_heat });
        }

        let boiling_temperature = parameters.boiling_temperature;
        if !(boiling_temperature.value > 0.0) {
            return Err(TwoPhaseParametersError::BoilingTemperature {
                boiling_temperature,
            });
        }

        Ok(Self {
            liquid_cp: parameters.liquid_cp,
            liquid_density: parameters.liquid_density,
            vapor_cp: parameters.vapor_cp,
            gas_constant: parameters.gas_constant,
            latent_heat: parameters.latent_heat,
            boiling_temperature: parameters.boiling_temperature,
            _marker: PhantomData,
        })
    }

    /// Saturation temperature from the integrated Clausius–Clapeyron
    /// relation, `1/T = 1/T_b − (R/L)·ln(P/P_atm)`.
    fn saturation_temperature(
        &self,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = pressure.get::<pascal>();
        if !(p > 0.0) {
            return Err(PropertyError::OutOfDomain {
                context: format!("saturation lookup requires a positive pressure, got {p} Pa"),
            });
        }

        let r_over_l = (self.gas_constant / self.latent_heat).value;
        let inv_t =
            self.boiling_temperature.get::<kelvin>().recip() - r_over_l * (p / ATMOSPHERE_PA).ln();
        if inv_t <= 0.0 {
            return Err(PropertyError::OutOfDomain {
                context: format!("pressure {p} Pa is beyond the modeled saturation curve"),
            });
        }

        Ok(ThermodynamicTemperature::new::<kelvin>(inv_t.recip()))
    }

    /// Liquid temperature from entropy, inverting `s = cp·ln(T/T_b)`.
    fn liquid_temperature(&self, entropy: SpecificEntropy) -> ThermodynamicTemperature {
        let exponent = (entropy / self.liquid_cp).value;
        ThermodynamicTemperature::new::<kelvin>(
            self.boiling_temperature.get::<kelvin>() * exponent.exp(),
        )
    }

    fn liquid_specific_volume(&self) -> SpecificVolume {
        self.liquid_density.recip()
    }

    /// Sensible liquid enthalpy relative to the reference state.
    fn liquid_sensible_enthalpy(&self, temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
        self.liquid_cp * temperature.minus(self.boiling_temperature)
    }

    fn compressed_liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> SpecificEnthalpy {
        self.liquid_sensible_enthalpy(temperature)
            + (pressure - atmosphere()) * self.liquid_specific_volume()
    }

    fn liquid_entropy(&self, temperature: ThermodynamicTemperature) -> SpecificEntropy {
        self.liquid_cp * (temperature / self.boiling_temperature).ln()
    }

    fn saturated_vapor_enthalpy(&self, temperature: ThermodynamicTemperature) -> SpecificEnthalpy {
        self.liquid_sensible_enthalpy(temperature) + self.latent_heat
    }

    fn saturated_vapor_entropy(&self, temperature: ThermodynamicTemperature) -> SpecificEntropy {
        self.liquid_entropy(temperature) + self.latent_heat / temperature.above_absolute_zero()
    }

    /// Ideal-gas vapor density at the given pressure and temperature.
    fn vapor_density(&self, pressure: Pressure, temperature: ThermodynamicTemperature) -> MassDensity {
        pressure / (self.gas_constant * temperature.above_absolute_zero())
    }

    /// State on the saturation curve at `T_sat(pressure)` with vapor mass
    /// fraction `x`, quality-weighting the pure saturation states.
    fn saturation_state(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        x: f64,
    ) -> FluidState {
        let h_liquid = self.compressed_liquid_enthalpy(temperature, pressure);
        let h_vapor = self.saturated_vapor_enthalpy(temperature);
        let s_liquid = self.liquid_entropy(temperature);
        let s_vapor = self.saturated_vapor_entropy(temperature);
        let v_liquid = self.liquid_specific_volume();
        let v_vapor = self.vapor_density(pressure, temperature).recip();

        let specific_volume = v_liquid + (v_vapor - v_liquid) * x;

        FluidState::new(
            temperature,
            specific_volume.recip(),
            h_liquid + (h_vapor - h_liquid) * x,
            s_liquid + (s_vapor - s_liquid) * x,
        )
    }
}

impl<F> StateAt<(Pressure, Quality)> for TwoPhase<F> {
    fn state_at(
        &self,
        _fluid: &F,
        (pressure, quality): (Pressure, Quality),
    ) -> Result<FluidState, PropertyError> {
        let temperature = self.saturation_temperature(pressure)?;
        Ok(self.saturation_state(pressure, temperature, quality.value()))
    }
}

impl<F> StateAt<(SpecificEnthalpy, SpecificEntropy)> for TwoPhase<F> {
    /// Resolves an enthalpy-entropy pair on the compressed-liquid branch.
    ///
    /// The liquid entropy fixes the temperature; the enthalpy is echoed
    /// back (it differs from the sensible enthalpy only by the pressure
    /// correction). Pairs whose enthalpy exceeds the liquid branch by the
    /// latent heat are rejected as out of domain.
    fn state_at(
        &self,
        _fluid: &F,
        (enthalpy, entropy): (SpecificEnthalpy, SpecificEntropy),
    ) -> Result<FluidState, PropertyError> {
        let temperature = self.liquid_temperature(entropy);
        if !temperature.value.is_finite() {
            return Err(PropertyError::Calculation {
                context: format!("no liquid temperature for entropy {:?}", entropy),
            });
        }

        if enthalpy - self.liquid_sensible_enthalpy(temperature) >= self.latent_heat {
            return Err(PropertyError::OutOfDomain {
                context: "enthalpy-entropy pair does not lie on the liquid branch".into(),
            });
        }

        Ok(FluidState::new(
            temperature,
            self.liquid_density,
            enthalpy,
            entropy,
        ))
    }
}

impl<F> StateAt<(Pressure, SpecificEntropy)> for TwoPhase<F> {
    /// Resolves a pressure-entropy pair, branching on the entropy against
    /// the saturation entropies at `T_sat(pressure)`: subcooled liquid,
    /// two-phase mixture, or superheated vapor.
    fn state_at(
        &self,
        _fluid: &F,
        (pressure, entropy): (Pressure, SpecificEntropy),
    ) -> Result<FluidState, PropertyError> {
        let t_sat = self.saturation_temperature(pressure)?;
        let s_liquid = self.liquid_entropy(t_sat);
        let s_vapor = self.saturated_vapor_entropy(t_sat);

        if entropy < s_liquid {
            let temperature = self.liquid_temperature(entropy);
            return Ok(FluidState::new(
                temperature,
                self.liquid_density,
                self.compressed_liquid_enthalpy(temperature, pressure),
                entropy,
            ));
        }

        if entropy <= s_vapor {
            let x = ((entropy - s_liquid) / (s_vapor - s_liquid)).value;
            return Ok(FluidState {
                entropy,
                ..self.saturation_state(pressure, t_sat, x)
            });
        }

        // Superheated: invert s = s_v + cp·ln(T/T_sat) along the isobar.
        let exponent = ((entropy - s_vapor) / self.vapor_cp).value;
        let temperature =
            ThermodynamicTemperature::new::<kelvin>(t_sat.get::<kelvin>() * exponent.exp());
        let enthalpy = self.saturated_vapor_enthalpy(t_sat) + self.vapor_cp * temperature.minus(t_sat);

        Ok(FluidState::new(
            temperature,
            self.vapor_density(pressure, temperature),
            enthalpy,
            entropy,
        ))
    }
}

impl<F> StateAt<(Pressure, ThermodynamicTemperature)> for TwoPhase<F> {
    /// Resolves a pressure-temperature pair as superheated vapor above
    /// the saturation temperature or compressed liquid below it.
    ///
    /// Exactly at the saturation temperature the state is undefined
    /// without a quality; use the `(Pressure, Quality)` lookup instead.
    fn state_at(
        &self,
        _fluid: &F,
        (pressure, temperature): (Pressure, ThermodynamicTemperature),
    ) -> Result<FluidState, PropertyError> {
        if !(temperature.value > 0.0) {
            return Err(PropertyError::OutOfDomain {
                context: format!("temperature {:?} is not above absolute zero", temperature),
            });
        }

        let t_sat = self.saturation_temperature(pressure)?;

        if temperature > t_sat {
            let enthalpy =
                self.saturated_vapor_enthalpy(t_sat) + self.vapor_cp * temperature.minus(t_sat);
            let entropy = self.saturated_vapor_entropy(t_sat) + self.vapor_cp * (temperature / t_sat).ln();
            return Ok(FluidState::new(
                temperature,
                self.vapor_density(pressure, temperature),
                enthalpy,
                entropy,
            ));
        }

        if temperature < t_sat {
            return Ok(FluidState::new(
                temperature,
                self.liquid_density,
                self.compressed_liquid_enthalpy(temperature, pressure),
                self.liquid_entropy(temperature),
            ));
        }

        Err(PropertyError::Undefined {
            context: format!(
                "state at the saturation temperature {:?} requires a quality",
                t_sat
            ),
        })
    }
}

impl<F> SaturationPressure for TwoPhase<F> {
    fn saturation_pressure(
        &self,
        _fluid: &F,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let t = temperature.get::<kelvin>();
        if !(t > 0.0) {
            return Err(PropertyError::OutOfDomain {
                context: format!("saturation lookup requires a positive temperature, got {t} K"),
            });
        }

        let l_over_r = (self.latent_heat / self.gas_constant).value;
        let t_boil = self.boiling_temperature.get::<kelvin>();
        let p = ATMOSPHERE_PA * (l_over_r * (t_boil.recip() - t.recip())).exp();

        Ok(Pressure::new::<pascal>(p))
    }
}
