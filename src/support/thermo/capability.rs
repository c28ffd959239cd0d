//! Capability traits used to query fluid properties.
//!
//! A property model advertises, at compile time, which input pairs it can
//! resolve into a [`FluidState`] by implementing [`StateAt`] for the
//! corresponding input type. Cycle models then bound their type
//! parameters by exactly the capabilities they need; unsupported lookups
//! are compile errors rather than runtime "not implemented" failures.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::{FluidState, PropertyError};

/// Base trait for fluid-property models.
///
/// The `Fluid` type names the substance a model understands. It is
/// usually a simple marker type such as
/// [`Water`](crate::support::thermo::fluid::Water), but may carry
/// state-defining data (composition, salinity) for richer models.
pub trait PropertyModel {
    type Fluid;
}

/// Capability for resolving a [`FluidState`] from a typed input pair.
///
/// Inputs are ordinary Rust tuples of two independent state variables.
/// The pairs used by the cycle models are:
///
/// - `(Pressure, Quality)` — a point on the saturation curve
/// - `(SpecificEnthalpy, SpecificEntropy)` — a compressed-liquid point
/// - `(Pressure, SpecificEntropy)` — e.g. an isentropic expansion outlet
/// - `(Pressure, ThermodynamicTemperature)` — e.g. superheated vapor
///
/// with `Quality` being [`crate::support::thermo::Quality`] and the
/// specific quantities coming from [`crate::support::units`].
pub trait StateAt<Input>: PropertyModel {
    /// Resolves the full thermodynamic state fixed by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state cannot be evaluated at the
    /// given inputs.
    fn state_at(&self, fluid: &Self::Fluid, input: Input) -> Result<FluidState, PropertyError>;
}

/// Capability for querying the saturation pressure at a temperature.
///
/// This is the inverse of the `(Pressure, Quality)` lookup's temperature
/// output, and is what lets callers specify cycle boundary conditions as
/// condenser/boiler temperatures rather than pressures.
pub trait SaturationPressure: PropertyModel {
    /// Returns the saturation pressure at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature is outside the
    /// model's saturation curve.
    fn saturation_pressure(
        &self,
        fluid: &Self::Fluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError>;
}
