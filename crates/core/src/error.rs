/// A single field constraint violated by a [`RiskInput`](crate::RiskInput).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    /// Name of the input field the violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } | ValidationError::NotFinite { field } => {
                field
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("risk input failed validation: {}", join_violations(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("unknown {kind} value: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl AssessmentError {
    /// The individual violations behind an [`AssessmentError::InvalidInput`].
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            AssessmentError::InvalidInput(violations) => violations,
            AssessmentError::UnknownVariant { .. } => &[],
        }
    }
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type AssessmentResult<T> = std::result::Result<T, AssessmentError>;
