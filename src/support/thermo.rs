//! Thermodynamic fluid-property modeling for cycle analysis.
//!
//! Cycle models treat fluid properties as an oracle: given a fluid and two
//! independent state variables, a property model returns the full
//! [`FluidState`] (temperature, density, enthalpy, entropy) at that point.
//! The capability traits in [`capability`] express which input pairs a
//! model supports; [`model::TwoPhase`] is the built-in analytic
//! implementation.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::{FluidState, Quality, QualityError};
