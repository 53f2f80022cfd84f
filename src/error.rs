// src/error.rs

use thiserror::Error;

/// The primary error type for the `oidc-idp` library.
///
/// Every variant is a caller or configuration error and is surfaced
/// synchronously; none of these conditions is transient, so automatic
/// retries are never appropriate.
#[derive(Debug, Error)]
pub enum OidcIdpError {
    /// A required caller-supplied value is missing or empty.
    #[error("Missing required input: {0}")]
    InvalidInput(String),

    /// A signing algorithm other than RS256 was requested.
    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// No key material was supplied for an operation that requires it.
    #[error("Missing key material: {0}")]
    MissingKeyMaterial(String),

    /// A cryptographic key (PEM) is malformed or invalid.
    /// Contains the detailed underlying parsing error.
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A required configuration field is missing.
    #[error("A required configuration field is missing: {0}")]
    MissingConfiguration(String),

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Signing failed after key and algorithm were validated. This is
    /// unexpected and fatal for the request, never swallowed.
    #[error("Token generation failed: {0}")]
    TokenGenerationError(String),
}
