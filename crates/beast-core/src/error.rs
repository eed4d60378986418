use thiserror::Error;

/// The packet cannot be decided on yet. Not an error from the caller's point of view: the tick
/// yields [`ControlOutput::NOOP`](crate::ControlOutput::NOOP) and nothing else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotReady {
    #[error("field info not loaded")]
    FieldNotLoaded,

    #[error("no ball in play")]
    NoBall,

    #[error("no car at index {index}")]
    CarMissing { index: usize },
}

/// A choice could not score itself this tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("scoring failed: {0}")]
    Failed(String),

    #[error("non-finite utility {0}")]
    NonFinite(f32),
}

/// A choice or maneuver produced no usable output this tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("{what} produced no output")]
    NoOutput { what: &'static str },

    #[error("execution failed: {0}")]
    Failed(String),
}

/// Fatal at construction: the agent refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no choices registered")]
    NoChoices,

    #[error("invalid previous-choice bias {0} (must be finite and >= 0)")]
    InvalidBias(f32),

    #[error("{name} out of range: {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("failed to read config from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),
}
