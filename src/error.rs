// Centralized error handling using thiserror for type-safe error management

use thiserror::Error;

/// Main error type for the service directory explorer
///
/// Each variant maps to one failure mode of a directory operation. Nothing
/// is caught or retried inside the crate; every failure surfaces to the
/// immediate caller.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP request failed
    ///
    /// Wraps reqwest::Error via #[from]: network failures, non-success
    /// status codes (surfaced through error_for_status), and request
    /// building failures.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected shape
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Listing response lacked a key the directory contract requires
    ///
    /// Named folders are assumed to always report a `services` array, and
    /// map service endpoints a `singleFusedMapCache` flag. A response
    /// without one is a broken contract, not an empty result.
    #[error("response from {url} is missing expected key `{key}`")]
    MissingKey { url: String, key: &'static str },

    /// Service type has no property projection
    ///
    /// Only MapServer, FeatureServer and ImageServer endpoints expose the
    /// fields the property sheet is built from.
    #[error("unsupported service type for properties: {0}")]
    UnsupportedServiceType(String),

    /// Type label is not one of the recognized service types
    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    /// Environment variable not found or invalid
    #[error("environment error: {0}")]
    Env(String),
}

/// Type alias for Result with DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::MissingKey {
            url: "https://server/arcgis/rest/services/Utilities".to_string(),
            key: "services",
        };
        assert_eq!(
            err.to_string(),
            "response from https://server/arcgis/rest/services/Utilities is missing expected key `services`"
        );

        let err = DirectoryError::UnsupportedServiceType("GPServer".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported service type for properties: GPServer"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DirectoryError = json_err.into();

        match err {
            DirectoryError::Json(_) => {}
            other => panic!("Expected Json variant, got {:?}", other),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<i32> {
            Err(DirectoryError::Env("test error".to_string()))
        }

        assert!(returns_error().is_err());
    }
}
