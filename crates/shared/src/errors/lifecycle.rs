use thiserror::Error;

/// Rejections raised by the lifecycle state machines before anything is
/// sent to the backend. A local rejection never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Cannot transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Missing required field '{0}' for this transition")]
    MissingRequiredField(&'static str),
}
