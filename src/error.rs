//! Error handling for voxel-probe
//!
//! Traversals themselves never fail: the only runtime errors are the ones a
//! caller-supplied world collaborator raises, and those propagate unchanged.
//! `ProbeError` covers query construction and configuration loading.

/// Main error type for query construction and configuration
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Config parse error in {source_name}: {error}")]
    ConfigParse { source_name: String, error: String },

    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

/// Type alias for Results in voxel-probe
pub type ProbeResult<T> = Result<T, ProbeError>;

impl ProbeError {
    /// Shorthand for an `InvalidConfiguration` error
    pub fn invalid(reason: impl Into<String>) -> Self {
        ProbeError::InvalidConfiguration(reason.into())
    }
}

impl From<toml::de::Error> for ProbeError {
    fn from(error: toml::de::Error) -> Self {
        ProbeError::ConfigParse {
            source_name: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProbeError::invalid("ray query needs a direction or an end point");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: ray query needs a direction or an end point"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: Result<toml::Value, toml::de::Error> = toml::from_str("max_steps = = 3");
        let err: ProbeError = parsed.expect_err("malformed toml should fail").into();
        assert!(matches!(err, ProbeError::ConfigParse { .. }));
    }
}
