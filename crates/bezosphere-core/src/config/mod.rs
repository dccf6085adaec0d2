//! Environment configuration (`BEZOSPHERE_` prefix).

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the response-cache Postgres database. `None` means the server
    /// is deliberately running with a no-op store (credentialing-only mode, see spec §6).
    pub postgres_conn: Option<String>,

    /// Address of the credential-broker service ("spanx" in the source).
    pub spanx_address: String,

    /// Address this gateway's RPC listener binds to.
    pub address: String,

    /// PEM certificate file for the TLS listener.
    pub cert: PathBuf,

    /// PEM private key file for the TLS listener.
    pub cert_key: PathBuf,
}

impl Config {
    const ENV_POSTGRES_CONN: &'static str = "BEZOSPHERE_POSTGRES_CONN";
    const ENV_SPANX_ADDRESS: &'static str = "BEZOSPHERE_SPANX_ADDRESS";
    const ENV_ADDRESS: &'static str = "BEZOSPHERE_ADDRESS";
    const ENV_CERT: &'static str = "BEZOSPHERE_CERT";
    const ENV_CERT_KEY: &'static str = "BEZOSPHERE_CERT_KEY";

    pub fn from_env() -> Result<Self, ConfigError> {
        let postgres_conn = Self::parse_optional_string_from_env(Self::ENV_POSTGRES_CONN);
        let spanx_address = Self::require_string_from_env(Self::ENV_SPANX_ADDRESS)?;
        let address = Self::require_string_from_env(Self::ENV_ADDRESS)?;
        let cert = PathBuf::from(Self::require_string_from_env(Self::ENV_CERT)?);
        let cert_key = PathBuf::from(Self::require_string_from_env(Self::ENV_CERT_KEY)?);

        Ok(Self {
            postgres_conn,
            spanx_address,
            address,
            cert,
            cert_key,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.address
            .parse::<std::net::SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: self.address.clone(),
                source: e,
            })?;

        for path in [&self.cert, &self.cert_key] {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// `true` if this configuration opted into the no-op store escape hatch (spec §6).
    pub fn has_store(&self) -> bool {
        self.postgres_conn.is_some()
    }

    fn require_string_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        env::var(var_name).map_err(|_| ConfigError::MissingEnvVar { name: var_name })
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
