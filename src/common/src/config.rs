use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::error::Result;
use crate::API_EVENTS_PATH;
use crate::API_NEW_EVENT_PATH;
use crate::DEFAULT_DATASET;
use crate::DEFAULT_HOST;

#[derive(Debug, Clone)]
pub struct Server {
    pub host: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct Data {
    /// Directory holding the CSV datasets.
    pub path: PathBuf,
    /// Dataset served when a request names none.
    pub default_dataset: String,
    /// Directory with `index.html` and `static/`. The page routes are not
    /// mounted when unset.
    pub ui_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Client {
    /// Published at `/config.json` when set.
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    pub client: Client,
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: Server {
                host: SocketAddr::from_str(DEFAULT_HOST).unwrap(),
            },
            data: Data {
                path: PathBuf::from("data"),
                default_dataset: DEFAULT_DATASET.to_string(),
                ui_path: None,
            },
            client: Client { api_base_url: None },
            log: Log {
                level: LevelFilter::INFO,
            },
        }
    }
}

/// Configuration document the map page fetches at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// `GET` endpoint of the event list, optionally scoped to a dataset.
    pub fn events_url(&self, dataset: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint(API_EVENTS_PATH)?;
        if let Some(dataset) = dataset {
            url.query_pairs_mut().append_pair("filename", dataset);
        }

        Ok(url)
    }

    /// `POST` endpoint for new events.
    pub fn new_event_url(&self) -> Result<Url> {
        self.endpoint(API_NEW_EVENT_PATH)
    }

    // the base url is a plain prefix, so a path in it is kept
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.api_base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;

    #[test]
    fn test_client_config_wire_name() -> Result<(), serde_json::Error> {
        let cfg: ClientConfig = serde_json::from_str(r#"{"apiBaseUrl":"http://localhost:8082"}"#)?;
        assert_eq!(cfg.api_base_url, "http://localhost:8082");
        assert_eq!(
            serde_json::to_string(&cfg)?,
            r#"{"apiBaseUrl":"http://localhost:8082"}"#
        );

        Ok(())
    }

    #[test]
    fn test_endpoints() {
        let cfg = ClientConfig::new("http://localhost:8082/");
        assert_eq!(
            cfg.events_url(None).unwrap().as_str(),
            "http://localhost:8082/api/events"
        );
        assert_eq!(
            cfg.events_url(Some("it festivals.csv")).unwrap().as_str(),
            "http://localhost:8082/api/events?filename=it+festivals.csv"
        );

        let cfg = ClientConfig::new("http://example.com/map");
        assert_eq!(
            cfg.new_event_url().unwrap().as_str(),
            "http://example.com/map/api/events/new"
        );
    }

    #[test]
    fn test_bad_base_url() {
        assert!(ClientConfig::new("not a url").new_event_url().is_err());
    }
}
