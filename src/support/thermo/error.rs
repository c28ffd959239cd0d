use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
///
/// Property failures are never recovered inside a cycle model; they
/// propagate to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested inputs fall outside the model's valid region.
    ///
    /// For example, a saturation lookup at a non-positive pressure.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The inputs do not determine a unique state.
    ///
    /// For example, a pressure-temperature pair exactly on the saturation
    /// curve, where the state also depends on the vapor quality.
    #[error("undefined state: {context}")]
    Undefined { context: String },

    /// The evaluation failed numerically.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
