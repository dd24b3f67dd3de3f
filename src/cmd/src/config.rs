use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use clap::ValueEnum;
use common::DEFAULT_DATASET;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Result;

pub const ENV_PREFIX: &str = "EVENTMAP";

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub host: SocketAddr,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Data {
    pub path: PathBuf,
    pub default_dataset: Option<String>,
    pub ui_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Default)]
pub struct Client {
    pub api_base_url: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    #[serde(default)]
    pub client: Client,
    pub log: Log,
}

impl Config {
    /// Reads the TOML file at `path`; `EVENTMAP__SECTION__KEY` variables
    /// override its values.
    pub fn load(path: &Path) -> Result<Config> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl From<Config> for common::config::Config {
    fn from(cfg: Config) -> Self {
        common::config::Config {
            server: common::config::Server {
                host: cfg.server.host,
            },
            data: common::config::Data {
                path: cfg.data.path,
                default_dataset: cfg
                    .data
                    .default_dataset
                    .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
                ui_path: cfg.data.ui_path,
            },
            client: common::config::Client {
                api_base_url: cfg.client.api_base_url,
            },
            log: common::config::Log {
                level: cfg.log.level.into(),
            },
        }
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
