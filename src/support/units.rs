//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (pressure,
//! temperature, density, and so on). This module adds the few pieces that
//! cycle modeling needs but [`uom`] doesn't ship:
//!
//! - Quantity aliases for specific enthalpy, specific entropy, and the
//!   specific gas constant.
//! - The [`TemperatureDifference`] extension trait for subtracting
//!   absolute temperatures, which [`uom`]'s temperature kind forbids
//!   directly.

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
