//! Canonical working-fluid identifiers.
//!
//! A fluid type names a substance; each property model defines how that
//! name is interpreted, typically via trait implementations supplying the
//! constants the model needs (e.g.
//! [`TwoPhaseFluid`](crate::support::thermo::model::two_phase::TwoPhaseFluid)
//! for the analytic [`TwoPhase`](crate::support::thermo::model::TwoPhase)
//! model).
//!
//! The fluids provided here are the working fluids commonly compared in
//! low-temperature Rankine studies.

mod ammonia;
mod r134a;
mod water;

pub use ammonia::Ammonia;
pub use r134a::R134a;
pub use water::Water;
