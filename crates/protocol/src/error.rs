use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A structured filter parameter failed type/shape validation. The
    /// parameter name is carried so callers can point at the offending key.
    #[error("invalid value for \"{param}\": {reason}")]
    InvalidValue { param: &'static str, reason: String },
}

impl FilterError {
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            param,
            reason: reason.into(),
        }
    }

    /// The query parameter that failed validation.
    #[must_use]
    pub fn param(&self) -> &'static str {
        match self {
            Self::InvalidValue { param, .. } => param,
        }
    }
}
