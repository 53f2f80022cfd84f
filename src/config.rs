// src/config.rs

use crate::error::OidcIdpError;
use url::Url;

/// Environment variable enabling development mode when set to `"development"`.
pub const ENV_APP_ENV: &str = "APP_ENV";
/// Environment variable holding the local development API server port.
pub const ENV_DEV_API_SERVER_PORT: &str = "DEV_API_SERVER_PORT";
/// Environment variable holding the canonical root URL of the deployment.
pub const ENV_CANONICAL_ROOT_URL: &str = "CANONICAL_ROOT_URL";

/// The inputs from which the canonical issuer URL is computed.
///
/// Resolve this once at process startup and pass the resulting [`Url`] by
/// reference into the [`Minter`](crate::minter::Minter) and the metadata
/// functions. A restart is required to change the issuer, which matches how
/// the underlying values are deployed.
#[derive(Clone, Debug)]
pub struct IssuerConfig {
    /// Whether the process is running in local development mode.
    pub dev_mode: bool,
    /// The port of the local development API server, if one is configured.
    pub dev_api_port: Option<u16>,
    /// The canonical root URL of the deployment, e.g. `https://example.com`.
    pub canonical_root_url: Url,
}

impl IssuerConfig {
    /// Builds the configuration from environment variables.
    ///
    /// `CANONICAL_ROOT_URL` is required. `APP_ENV=development` together with a
    /// positive `DEV_API_SERVER_PORT` switches the issuer to the local dev
    /// server; a port value that is present but not a valid integer is a
    /// configuration error rather than something to silently ignore.
    pub fn from_env() -> Result<Self, OidcIdpError> {
        let dev_mode = std::env::var(ENV_APP_ENV)
            .map(|v| v == "development")
            .unwrap_or(false);

        let dev_api_port = match std::env::var(ENV_DEV_API_SERVER_PORT) {
            Ok(raw) => Some(raw.parse::<u16>().map_err(|e| {
                OidcIdpError::InvalidConfiguration(format!(
                    "{} is not a valid port: {}",
                    ENV_DEV_API_SERVER_PORT, e
                ))
            })?),
            Err(_) => None,
        };

        let root = std::env::var(ENV_CANONICAL_ROOT_URL)
            .map_err(|_| OidcIdpError::MissingConfiguration(ENV_CANONICAL_ROOT_URL.to_string()))?;
        let canonical_root_url =
            Url::parse(&root).map_err(|e| OidcIdpError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            dev_mode,
            dev_api_port,
            canonical_root_url,
        })
    }

    /// Computes the canonical issuer URL.
    ///
    /// In development mode with a configured positive port the issuer is
    /// `http://localhost:{port}/api`; otherwise it is the canonical root URL
    /// with `/api` appended. Pure computation, no I/O.
    pub fn resolve(&self) -> Result<Url, OidcIdpError> {
        let issuer = match (self.dev_mode, self.dev_api_port) {
            (true, Some(port)) if port > 0 => format!("http://localhost:{}/api", port),
            _ => {
                let root = self.canonical_root_url.as_str().trim_end_matches('/');
                format!("{}/api", root)
            }
        };
        Url::parse(&issuer).map_err(|e| OidcIdpError::InvalidUrl(e.to_string()))
    }
}
