// src/metadata.rs

use crate::error::OidcIdpError;
use crate::keys::{KeyBackend, RsaKeyBackend};
use serde::{Deserialize, Serialize};
use url::Url;

/// An OIDC provider discovery document, served at
/// `.well-known/openid-configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryDocument {
    pub issuer: String,
    pub jwks_uri: String,
    pub subject_types_supported: Vec<String>,
    pub id_token_signing_alg_values_supported: Vec<String>,
}

/// A single JSON Web Key as defined in RFC 7517. Public components only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub n: String,
    pub e: String,
    pub alg: String,
    pub kid: String,
    #[serde(rename = "use")]
    pub use_purpose: String,
}

/// A JSON Web Key Set, served at `.well-known/jwks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKeySet {
    pub keys: Vec<Jwk>,
}

/// Builds the discovery document for the given issuer.
///
/// Pure and idempotent: the result depends only on the issuer URL. The HTTP
/// layer serving it is responsible for the JSON content type.
pub fn discovery_document(issuer: &Url) -> DiscoveryDocument {
    let issuer = issuer.as_str().trim_end_matches('/');
    DiscoveryDocument {
        issuer: issuer.to_string(),
        jwks_uri: format!("{}/.well-known/jwks.json", issuer),
        subject_types_supported: vec!["public".to_string()],
        id_token_signing_alg_values_supported: vec!["RS256".to_string()],
    }
}

/// Builds the JWKS document for a PEM-encoded RSA public key.
///
/// The set contains a single key annotated with `alg: "RS256"`,
/// `use: "sig"` and the supplied `key_id`. Private key material never
/// enters this path.
pub fn jwks_document(public_key_pem: &str, key_id: &str) -> Result<JsonWebKeySet, OidcIdpError> {
    jwks_document_with(&RsaKeyBackend, public_key_pem, key_id)
}

/// [`jwks_document`] with an explicit key backend.
pub fn jwks_document_with<B: KeyBackend>(
    backend: &B,
    public_key_pem: &str,
    key_id: &str,
) -> Result<JsonWebKeySet, OidcIdpError> {
    if public_key_pem.is_empty() {
        return Err(OidcIdpError::MissingKeyMaterial(
            "RSA public key".to_string(),
        ));
    }
    let jwk = backend.public_jwk(public_key_pem, key_id)?;
    Ok(JsonWebKeySet { keys: vec![jwk] })
}
