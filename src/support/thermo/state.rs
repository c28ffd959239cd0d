use thiserror::Error;
use uom::si::f64::{MassDensity, SpecificVolume, ThermodynamicTemperature};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

/// A fully resolved thermodynamic state of a working fluid.
///
/// Property models return a `FluidState` for every supported input pair,
/// so callers always have temperature, density, specific enthalpy, and
/// specific entropy available regardless of which pair fixed the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidState {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
}

impl FluidState {
    /// Creates a state from its four resolved properties.
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        density: MassDensity,
        enthalpy: SpecificEnthalpy,
        entropy: SpecificEntropy,
    ) -> Self {
        Self {
            temperature,
            density,
            enthalpy,
            entropy,
        }
    }

    /// Returns the specific volume, the reciprocal of density.
    #[must_use]
    pub fn specific_volume(&self) -> SpecificVolume {
        self.density.recip()
    }
}

/// Vapor quality at a two-phase saturation state.
///
/// Quality is the vapor mass fraction: 0 denotes saturated liquid and 1
/// saturated vapor. Values outside `[0, 1]` (and NaN) are rejected at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f64);

impl Quality {
    /// Saturated liquid (`Q = 0`).
    pub const SATURATED_LIQUID: Self = Self(0.0);

    /// Saturated vapor (`Q = 1`).
    pub const SATURATED_VAPOR: Self = Self(1.0);

    /// Creates a quality from a vapor mass fraction.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError`] if the value is outside `[0, 1]` or NaN.
    pub fn new(value: f64) -> Result<Self, QualityError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QualityError)
        }
    }

    /// Returns the vapor mass fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Error returned when a vapor quality is outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vapor quality must lie within [0, 1]")]
pub struct QualityError;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, f64::MassDensity, f64::ThermodynamicTemperature,
        mass_density::kilogram_per_cubic_meter, specific_heat_capacity::joule_per_kilogram_kelvin,
        specific_volume::cubic_meter_per_kilogram, thermodynamic_temperature::kelvin,
    };

    #[test]
    fn quality_bounds() {
        assert_eq!(Quality::new(0.0).unwrap(), Quality::SATURATED_LIQUID);
        assert_eq!(Quality::new(1.0).unwrap(), Quality::SATURATED_VAPOR);
        assert_relative_eq!(Quality::new(0.25).unwrap().value(), 0.25);

        assert_eq!(Quality::new(-0.1), Err(QualityError));
        assert_eq!(Quality::new(1.1), Err(QualityError));
        assert_eq!(Quality::new(f64::NAN), Err(QualityError));
    }

    #[test]
    fn specific_volume_inverts_density() {
        let density = MassDensity::new::<kilogram_per_cubic_meter>(4.0);
        let state = FluidState::new(
            ThermodynamicTemperature::new::<kelvin>(300.0),
            density,
            SpecificEnthalpy::new::<joule_per_kilogram>(0.0),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(0.0),
        );
        assert_relative_eq!(
            state.specific_volume().get::<cubic_meter_per_kilogram>(),
            0.25
        );
    }
}
