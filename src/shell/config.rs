// Runtime configuration read from the environment.
//
// Variables
// - CONTACT_REQUESTS_HOST            interface to bind, default 0.0.0.0
// - CONTACT_REQUESTS_PORT            port to bind, default 8000
// - CONTACT_REQUESTS_ALLOWED_ORIGIN  the single origin allowed by CORS,
//                                    default http://localhost:5173

use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "CONTACT_REQUESTS_HOST";
pub const PORT_VAR: &str = "CONTACT_REQUESTS_PORT";
pub const ALLOWED_ORIGIN_VAR: &str = "CONTACT_REQUESTS_ALLOWED_ORIGIN";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} is not a valid origin: {value}")]
    InvalidOrigin { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup(HOST_VAR) {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let origin =
            lookup(ALLOWED_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin =
            HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin {
                var: ALLOWED_ORIGIN_VAR,
                value: origin.clone(),
            })?;

        Ok(Self {
            host,
            port,
            allowed_origin,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}
