//! Configuration loading for censusboard.
//! Reads censusboard.toml from the current directory or the path in CENSUSBOARD_CONFIG.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing::info;

use crate::dataset::DatasetSource;
use crate::error::{CensusError, Result};

pub const CONFIG_ENV: &str = "CENSUSBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "censusboard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub charts: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "bool_true")]
    pub open_browser: bool,
    /// Delay between binding the listener and launching the browser.
    #[serde(default)]
    pub open_delay_ms: u64,
}

fn default_host() -> IpAddr { IpAddr::V4(Ipv4Addr::LOCALHOST) }
fn default_port() -> u16    { 8050 }
fn bool_true()    -> bool   { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: true,
            open_delay_ms: 0,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub source: DatasetSource,
    /// Reject datasets whose Total differs from the category sum.
    #[serde(default)]
    pub enforce_totals: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    /// Stacked bars.
    #[default]
    Relative,
    Group,
}

impl BarMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BarMode::Relative => "relative",
            BarMode::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub barmode: BarMode,
}

impl DashboardConfig {
    /// Load configuration.
    /// Checks CENSUSBOARD_CONFIG first, then censusboard.toml in the current
    /// directory. Only an explicitly requested file is required to exist.
    pub fn load() -> Result<Self> {
        Self::from_env_value(std::env::var(CONFIG_ENV))
    }

    fn from_env_value(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(path) => Self::from_file(&path),
            Err(VarError::NotUnicode(raw)) => Err(CensusError::Config(format!(
                "{} is not valid UTF-8: {:?}",
                CONFIG_ENV, raw
            ))),
            Err(VarError::NotPresent) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            Err(VarError::NotPresent) => {
                info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CensusError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CensusError::Config(e.to_string()))
    }
}
