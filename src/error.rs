use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{function}() takes {expected} arguments but {actual} were given")]
    Arity {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{function}() argument {index} must be a string or number")]
    ArgumentType { function: &'static str, index: usize },
}

impl SimilarityError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimilarityError>;

#[cfg(feature = "python")]
impl From<SimilarityError> for pyo3::PyErr {
    fn from(err: SimilarityError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
