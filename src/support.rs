//! Supporting utilities used by the cycle models.
//!
//! These modules are part of the public API because they're useful on
//! their own, but their interfaces are less stable than the models
//! themselves and may change between releases.

pub mod thermo;
pub mod units;
