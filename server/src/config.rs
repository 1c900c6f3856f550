//! Listener address and asset directory resolution.
//!
//! Leptos' `get_configuration` supplies the defaults (site address and site
//! root, which `cargo leptos` fills from the workspace metadata). `BIND_ADDR`,
//! `PORT` and `PUBLIC_DIR` override them; unparsable overrides fall back to
//! the Leptos values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use leptos::prelude::*;

use crate::error::ServerError;

pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const PORT_VAR: &str = "PORT";
pub const PUBLIC_DIR_VAR: &str = "PUBLIC_DIR";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory served at `/` for slide and preview images.
    pub public_dir: PathBuf,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Load Leptos options and apply process environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if the Leptos configuration cannot be
    /// loaded.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(Self::resolve(conf.leptos_options, |key| std::env::var(key).ok()))
    }

    /// Apply overrides read through `lookup` on top of `leptos`.
    pub fn resolve(leptos: LeptosOptions, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site = leptos.site_addr;
        let ip: IpAddr = parse_or(lookup(BIND_ADDR_VAR), site.ip());
        let port: u16 = parse_or(lookup(PORT_VAR), site.port());
        let public_dir = lookup(PUBLIC_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(leptos.site_root.as_ref()), PathBuf::from);
        Self { addr: SocketAddr::new(ip, port), public_dir, leptos }
    }
}

/// Parse an override, keeping `default` when it is absent or malformed.
fn parse_or<T>(value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    value.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
