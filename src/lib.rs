// src/lib.rs

pub mod config;
pub mod error;
pub mod keys;
pub mod metadata;
pub mod minter;

/// The public prelude for the `oidc-idp` crate.
///
/// This module re-exports the most commonly used types for convenience.
pub mod prelude {
    pub use crate::config::IssuerConfig;
    pub use crate::error::OidcIdpError;
    pub use crate::keys::{KeyBackend, RsaKeyBackend};
    pub use crate::metadata::{
        discovery_document, jwks_document, DiscoveryDocument, Jwk, JsonWebKeySet,
    };
    pub use crate::minter::{IdTokenClaims, Minter, SigningOptions, UserRecord};
}
