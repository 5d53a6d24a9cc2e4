//! Static host configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `index.html` and the stylesheet.
    pub site_dir: PathBuf,
    /// `wasm-pack` output for the `client` crate, served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `<manifest>/site`
    /// - `PKG_DIR`: default `<manifest>/client/pkg`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_PORT,
        };
        let site_dir = var("SITE_DIR").map_or_else(|| manifest_dir.join("site"), PathBuf::from);
        let pkg_dir = var("PKG_DIR").map_or_else(|| manifest_dir.join("client").join("pkg"), PathBuf::from);

        Ok(Self { port, site_dir, pkg_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
