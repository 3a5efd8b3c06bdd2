use thiserror::Error;

// =============================================================================
// Error types shared by every pattern module
// =============================================================================

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid {kind}: '{value}'")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("failed to parse query config: {0}")]
    Config(#[from] toml::de::Error),
}

impl PatternError {
    pub fn invalid_argument(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input, if this is an `InvalidArgument`.
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { value, .. } => Some(value),
            Self::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_names_value() {
        let err = PatternError::invalid_argument("vehicle type", "Truck");
        assert_eq!(err.to_string(), "invalid vehicle type: 'Truck'");
        assert_eq!(err.rejected_value(), Some("Truck"));
    }

    #[test]
    fn test_config_error_has_no_rejected_value() {
        let toml_err = toml::from_str::<toml::Value>("threshold = ").unwrap_err();
        let err = PatternError::from(toml_err);
        assert!(err.to_string().starts_with("failed to parse query config"));
        assert_eq!(err.rejected_value(), None);
    }
}
