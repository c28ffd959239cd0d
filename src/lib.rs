//! # Power Cycles
//!
//! Idealized steady-state thermodynamic power-cycle models: the Carnot
//! cycle and the Rankine vapor cycle with and without superheat.
//!
//! ## Crate layout
//!
//! - [`models`]: The public cycle models and their metrics types.
//! - [`support`]: Supporting utilities used by the models, including the
//!   fluid-property capability traits and an analytic two-phase property
//!   model suitable for idealized cycle studies.
//!
//! A cycle is built from its boundary conditions (pressures, temperatures,
//! an entropy change), validated at construction, and then evaluated with
//! [`PowerCycle::run`](models::power::PowerCycle::run), which returns a
//! structured metrics record. Rankine cycles evaluate the working fluid
//! against any property model implementing the capability traits in
//! [`support::thermo::capability`].
//!
//! All quantities are SI: pressures in pascal, temperatures in kelvin,
//! specific energies in J/kg, and specific entropies in J/(kg·K). The
//! [`uom`] types fix these conventions at compile time.

pub mod models;
pub mod support;
