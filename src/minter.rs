// src/minter.rs

use crate::error::OidcIdpError;
use crate::keys::{KeyBackend, RsaKeyBackend};
use jsonwebtoken::{encode, Algorithm, Header};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// The only signing algorithm the consuming identity platform accepts.
/// Anything else in [`SigningOptions::signing_alg`] is a caller
/// configuration error, not a condition to coerce.
const SIGNING_ALG: &str = "RS256";

/// ID token lifetime in seconds.
const ID_TOKEN_TTL_SECS: u64 = 3600;

/// Signing options supplied by the caller on every mint call.
///
/// Key material is used transiently and never retained by the library, so
/// the exposure window of the private key is a single call.
#[derive(Clone, Debug)]
pub struct SigningOptions {
    /// The requested signing algorithm. Only `"RS256"` is accepted.
    pub signing_alg: String,
    /// The key id placed in the token header, matching the JWKS entry.
    pub key_id: String,
    /// PEM-encoded RSA private key (PKCS#8 or PKCS#1).
    pub rsa_private_key: String,
}

/// The user attributes asserted by a minted ID token.
///
/// All fields are structurally required; name and email fields pass through
/// to claims as-is, empty strings included. Only `user_id` must be non-empty,
/// since it becomes the token's subject.
#[derive(Clone, Debug)]
pub struct UserRecord {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verified: bool,
}

/// The claims carried by a minted ID token.
///
/// Public so that consumers verifying a token can decode straight into it.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub email_verified: bool,
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

/// Mints signed OIDC ID tokens for a relying application.
///
/// Holds only the resolved issuer URL and a key backend; it is `&self`
/// throughout with no interior mutability, so concurrent mint calls need no
/// locking.
#[derive(Clone, Debug)]
pub struct Minter<B: KeyBackend = RsaKeyBackend> {
    issuer: Url,
    backend: B,
}

impl Minter<RsaKeyBackend> {
    /// Creates a minter using the default in-process RSA backend.
    pub fn new(issuer: Url) -> Self {
        Self {
            issuer,
            backend: RsaKeyBackend,
        }
    }
}

impl<B: KeyBackend> Minter<B> {
    /// Creates a minter with a custom key backend.
    pub fn with_backend(issuer: Url, backend: B) -> Self {
        Self { issuer, backend }
    }

    /// The issuer URL this minter stamps into the `iss` claim.
    pub fn issuer(&self) -> &Url {
        &self.issuer
    }

    /// Mints a signed ID token for `user`, addressed to the identity
    /// provider client `idp_client_id`.
    ///
    /// Returns the compact `header.payload.signature` serialization. Inputs
    /// are validated before any key material is touched; every failure is
    /// reported through [`OidcIdpError`], never swallowed.
    pub fn mint(
        &self,
        idp_client_id: &str,
        options: &SigningOptions,
        user: &UserRecord,
    ) -> Result<String, OidcIdpError> {
        if idp_client_id.is_empty() {
            return Err(OidcIdpError::InvalidInput("idp client id".to_string()));
        }
        if user.user_id.is_empty() {
            return Err(OidcIdpError::InvalidInput("user id".to_string()));
        }
        if options.signing_alg != SIGNING_ALG {
            tracing::warn!(
                alg = %options.signing_alg,
                "Rejected mint request for unsupported signing algorithm."
            );
            return Err(OidcIdpError::UnsupportedAlgorithm(
                options.signing_alg.clone(),
            ));
        }
        if options.rsa_private_key.is_empty() {
            return Err(OidcIdpError::MissingKeyMaterial(
                "RSA private key".to_string(),
            ));
        }

        tracing::debug!(sub = %user.user_id, aud = %idp_client_id, "Minting ID token.");

        let encoding_key = self.backend.signing_key(&options.rsa_private_key)?;

        let iat = unix_now();
        let claims = IdTokenClaims {
            given_name: user.first_name.clone(),
            family_name: user.last_name.clone(),
            email: user.email.clone(),
            email_verified: user.email_verified,
            iss: self.issuer.as_str().to_string(),
            sub: user.user_id.clone(),
            aud: idp_client_id.to_string(),
            iat,
            exp: iat + ID_TOKEN_TTL_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(options.key_id.clone());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| OidcIdpError::TokenGenerationError(e.to_string()))
    }
}

fn unix_now() -> u64 {
    // A pre-epoch system clock yields 0 rather than a panic.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
