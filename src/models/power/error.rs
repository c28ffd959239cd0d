use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Domain-precondition violations raised when constructing a cycle.
///
/// The message strings are part of the public contract; callers and
/// tests match on them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCycleError {
    #[error("temperature values cannot be negative")]
    NegativeTemperature,

    #[error("cold-side temperature should be smaller than hot side value")]
    ColdAboveHot,

    #[error("entropy variation should be positive")]
    NegativeEntropyVariation,

    #[error("pressure values cannot be negative")]
    NegativePressure,

    #[error("condenser pressure should be lower than boiler pressure")]
    CondenserAboveBoiler,

    #[error("turbine inlet temperature should be above saturation temperature at boiler pressure")]
    TurbineInletBelowSaturation,
}

/// Any failure while constructing or evaluating a cycle.
///
/// Construction of a superheated cycle consults the property model (to
/// locate the boiler saturation temperature), so both failure modes can
/// occur before `run` is ever called. Property errors pass through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    InvalidParameters(#[from] InvalidCycleError),

    #[error(transparent)]
    Property(#[from] PropertyError),
}
