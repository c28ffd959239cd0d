//! Fluid property models.
//!
//! [`TwoPhase`] is an analytic model of a pure substance around its
//! saturation curve, sufficient for idealized vapor-cycle studies. Models
//! backed by full equation-of-state property libraries can be plugged in
//! by implementing the same capability traits.

pub mod two_phase;

pub use two_phase::TwoPhase;
