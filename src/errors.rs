use thiserror::Error;

/// Errors raised while turning a raw sensor package into a workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("unrecognized workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{code} expects {expected} fields, got {got}")]
    FieldCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    /// A count field (steps, strokes, laps) was not a non-negative whole number.
    #[error("{code}: field `{field}` must be a non-negative whole number, got {value}")]
    InvalidField {
        code: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("malformed package {input:?}: {reason}")]
    Malformed { input: String, reason: String },
}
