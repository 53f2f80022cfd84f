// src/keys.rs

use crate::error::OidcIdpError;
use crate::metadata::Jwk;
use base64::engine::{general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::EncodingKey;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// The seam between token/metadata logic and the cryptographic backend.
///
/// The minter and the metadata publisher only ever touch key material through
/// this trait, so a different backend (an HSM, a KMS client) can be swapped in
/// without changing either of them. Signing itself is performed by
/// `jsonwebtoken::encode` with the key this trait produces.
pub trait KeyBackend {
    /// Parses PEM-encoded private key material into a signing key.
    fn signing_key(&self, pem: &str) -> Result<EncodingKey, OidcIdpError>;

    /// Parses PEM-encoded public key material and renders it as a JWK
    /// carrying the given key id.
    fn public_jwk(&self, pem: &str, key_id: &str) -> Result<Jwk, OidcIdpError>;
}

/// The default backend: in-process RSA via the `rsa` crate.
///
/// Accepts both PKCS#8 (`BEGIN PRIVATE KEY` / `BEGIN PUBLIC KEY`) and the
/// older PKCS#1 (`BEGIN RSA ...`) PEM encodings.
#[derive(Clone, Copy, Debug, Default)]
pub struct RsaKeyBackend;

impl KeyBackend for RsaKeyBackend {
    fn signing_key(&self, pem: &str) -> Result<EncodingKey, OidcIdpError> {
        let private_key = parse_rsa_private_key(pem)?;

        // `jsonwebtoken`'s own PEM parsing has awkward trait bounds; parsing
        // with the `rsa` crate and handing over PKCS#1 DER is the reliable
        // route.
        let pkcs1_der = private_key.to_pkcs1_der().map_err(|e| {
            OidcIdpError::InvalidKeyFormat(format!(
                "Failed to convert RSA key to PKCS#1 DER: {}",
                e
            ))
        })?;
        Ok(EncodingKey::from_rsa_der(pkcs1_der.as_bytes()))
    }

    fn public_jwk(&self, pem: &str, key_id: &str) -> Result<Jwk, OidcIdpError> {
        let public_key = parse_rsa_public_key(pem)?;

        // Modulus and exponent as base64url without padding, per RFC 7518.
        let n = URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
        let e = URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());

        Ok(Jwk {
            kty: "RSA".to_string(),
            n,
            e,
            alg: "RS256".to_string(),
            kid: key_id.to_string(),
            use_purpose: "sig".to_string(),
        })
    }
}

fn parse_rsa_private_key(pem: &str) -> Result<RsaPrivateKey, OidcIdpError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| {
            OidcIdpError::InvalidKeyFormat(format!("Failed to parse RSA private key: {}", e))
        })
}

fn parse_rsa_public_key(pem: &str) -> Result<RsaPublicKey, OidcIdpError> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| {
            OidcIdpError::InvalidKeyFormat(format!("Failed to parse RSA public key: {}", e))
        })
}
