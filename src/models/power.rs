//! Steady-state power cycle models.
//!
//! Three idealized cycles are provided:
//!
//! - [`CarnotCycle`]: the closed-form two-temperature ideal cycle.
//! - [`SimpleRankineCycle`]: the four-state vapor cycle (pump, boiler,
//!   turbine, condenser) with saturated vapor at the turbine inlet.
//! - [`SuperheatRankineCycle`]: the five-state variant with a superheater
//!   between boiler and turbine.
//!
//! Each cycle validates its inputs at construction, returning
//! [`InvalidCycleError`] with a stable message for every domain
//! precondition violation, and computes its performance metrics in
//! [`PowerCycle::run`]. Construction and `run` never mutate the cycle;
//! repeated runs of the same cycle yield identical metrics.

pub mod carnot;
pub mod rankine;

mod error;

pub use carnot::{CarnotCycle, CarnotMetrics};
pub use error::{CycleError, InvalidCycleError};
pub use rankine::{
    BoilerPressureSweep, SimpleRankineCycle, SimpleRankineMetrics, SuperheatRankineCycle,
    SuperheatRankineMetrics,
};

/// Common contract for steady-state cycle models.
///
/// A cycle is constructed from immutable boundary conditions and
/// evaluated with [`run`](Self::run), which either returns the full
/// metrics record or fails without partial results. `run` is idempotent
/// and has no side effects.
pub trait PowerCycle {
    /// Structured performance metrics produced by this cycle.
    type Metrics;

    /// Failure mode of evaluation. Closed-form cycles use
    /// [`std::convert::Infallible`]; cycles that consult a fluid-property
    /// model surface its errors unmodified.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the cycle and returns its metrics.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a property evaluation fails.
    fn run(&self) -> Result<Self::Metrics, Self::Error>;
}
