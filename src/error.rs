//! Error types for pccop

use thiserror::Error;

/// Result type alias for pccop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A lifecycle operation failed; carries which resource and which step.
    #[error("{kind}: {op} failed: {source}")]
    Resource {
        kind: String,
        op: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Tag creation is two calls; this records which one failed.
    #[error("tag {tag}: {phase} failed: {source}")]
    TagPhase {
        tag: String,
        phase: TagPhase,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// Wrap an error with the resource kind and operation it came from.
    pub fn in_resource(self, kind: impl Into<String>, op: &'static str) -> Self {
        Error::Resource {
            kind: kind.into(),
            op,
            source: Box::new(self),
        }
    }

    /// True when the error (or the error it wraps) is a synthesized not-found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api(ApiError::NotFound(_)) => true,
            Error::Resource { source, .. } | Error::TagPhase { source, .. } => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Step of the two-phase tag creation that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPhase {
    /// Creating the tag itself (no vulns attached yet)
    Create,
    /// Attaching one vuln after the tag was created
    AttachVuln { id: String },
}

impl std::fmt::Display for TagPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagPhase::Create => write!(f, "create"),
            TagPhase::AttachVuln { id } => {
                write!(f, "attach vuln {} (tag was created without it)", id)
            }
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Any status other than 200. The response body is not parsed.
    #[error("Non-OK status: {status}")]
    Status { status: u16 },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Failed to encode request body: {0}")]
    Serialize(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to console".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("{0} not configured. Set it with --{1} or {2}.")]
    Missing(&'static str, &'static str, &'static str),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors raised while reading or checking a schema document
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The generic map did not have the expected shape (wrong type, unknown kind).
    #[error("Invalid schema: {0}")]
    Shape(String),

    #[error("{0} is required")]
    Required(String),

    #[error("{field}: {value:?} is not one of {allowed:?}")]
    InvalidValue {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Invalid import id {0:?}: {1}")]
    InvalidImportId(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_carries_code() {
        let err = ApiError::Status { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_api_error_authentication() {
        let err = ApiError::Authentication("Non-OK status: 401".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Authentication failed"));
        assert!(msg.contains("401"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("tag ops".to_string());
        assert!(err.to_string().contains("tag ops"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_config_error_missing_names_flag_and_env() {
        let err = ConfigError::Missing("Console URL", "console-url", "PCC_CONSOLE_URL");
        let msg = err.to_string();
        assert!(msg.contains("--console-url"));
        assert!(msg.contains("PCC_CONSOLE_URL"));
    }

    #[test]
    fn test_schema_error_invalid_value() {
        let err = SchemaError::InvalidValue {
            field: "rule[0].effect".to_string(),
            value: "explode".to_string(),
            allowed: &["allow", "alert", "block"],
        };
        let msg = err.to_string();
        assert!(msg.contains("rule[0].effect"));
        assert!(msg.contains("explode"));
    }

    #[test]
    fn test_resource_context_prefix() {
        let err: Error = ApiError::Status { status: 500 }.into();
        let err = err.in_resource("tag", "read");
        let msg = err.to_string();
        assert!(msg.starts_with("tag: read failed"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_is_not_found_through_context() {
        let err: Error = ApiError::NotFound("x".to_string()).into();
        assert!(err.is_not_found());
        assert!(err.in_resource("group", "read").is_not_found());

        let other: Error = ApiError::Status { status: 500 }.into();
        assert!(!other.is_not_found());
    }

    #[test]
    fn test_tag_phase_message() {
        let err = Error::TagPhase {
            tag: "ops".to_string(),
            phase: TagPhase::AttachVuln {
                id: "CVE-2021-1".to_string(),
            },
            source: Box::new(ApiError::Status { status: 400 }.into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("CVE-2021-1"));
        assert!(msg.contains("created without it"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::Status { status: 403 };
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::Status { status: 403 }) => (),
            _ => panic!("Expected Error::Api(ApiError::Status)"),
        }
    }

    #[test]
    fn test_config_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let config_err: ConfigError = json_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
