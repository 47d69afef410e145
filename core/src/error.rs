use thiserror::Error;

/// Feil fra dispatch, parsing og innlesing av treningspakker.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("workout {code} expects {expected} values, got {got}")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },

    /// Teller-felt (action, count_pool) må være hele, ikke-negative tall.
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("invalid packages json: {0}")]
    Json(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
