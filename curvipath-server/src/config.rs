use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use curvipath_core::solve;
use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_INTERVALS: usize = 10_000;

/// Server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Largest `intervals` a request may ask for.
    pub max_intervals: usize,
    pub solver: solve::Config,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("invalid solver configuration: {0}")]
    Solver(&'static str),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            static_dir: PathBuf::from("static"),
            max_intervals: DEFAULT_MAX_INTERVALS,
            solver: solve::Config::default(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`.
    ///
    /// Recognized keys are `CURVIPATH_HOST`, `PORT`, `CURVIPATH_STATIC_DIR`,
    /// `CURVIPATH_MAX_INTERVALS` and `CURVIPATH_GRAVITY`. Without a static directory, `static` under
    /// `CARGO_MANIFEST_DIR` is used, then `static` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a present value cannot be parsed or the
    /// resulting solver configuration is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&lookup, "CURVIPATH_HOST", DEFAULT_HOST)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let static_dir = lookup("CURVIPATH_STATIC_DIR")
            .map(PathBuf::from)
            .or_else(|| lookup("CARGO_MANIFEST_DIR").map(|dir| PathBuf::from(dir).join("static")))
            .unwrap_or_else(|| PathBuf::from("static"));

        let max_intervals = parse_or(&lookup, "CURVIPATH_MAX_INTERVALS", DEFAULT_MAX_INTERVALS)?;
        if max_intervals == 0 {
            return Err(ConfigError::Invalid {
                name: "CURVIPATH_MAX_INTERVALS",
                value: max_intervals.to_string(),
            });
        }

        let mut solver = solve::Config::default();
        solver.default_gravity = parse_or(&lookup, "CURVIPATH_GRAVITY", solver.default_gravity)?;
        solver.validate().map_err(ConfigError::Solver)?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            static_dir,
            max_intervals,
            solver,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
