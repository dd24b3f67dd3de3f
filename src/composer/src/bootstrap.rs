use std::future::Future;
use std::path::PathBuf;
use std::str::FromStr;

use common::config::ClientConfig;
use tracing::info;
use tracing::warn;
use url::Url;

use crate::api::HttpEventsApi;
use crate::composer::Composer;
use crate::error::ComposerError;
use crate::error::Result;
use crate::notice::Notice;
use crate::surface::Ui;

/// Where the client configuration document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Url(Url),
    File(PathBuf),
}

impl FromStr for ConfigSource {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self> {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(ConfigSource::Url(url)),
            _ => Ok(ConfigSource::File(PathBuf::from(s))),
        }
    }
}

pub async fn load_client_config(
    source: &ConfigSource,
    client: &reqwest::Client,
) -> Result<ClientConfig> {
    let cfg: ClientConfig = match source {
        ConfigSource::Url(url) => client.get(url.clone()).send().await?.json().await?,
        ConfigSource::File(path) => serde_json::from_slice(&tokio::fs::read(path).await?)?,
    };
    // fail early on a base url the endpoints can't be built from
    cfg.new_event_url()?;

    Ok(cfg)
}

/// Starts the editor once both the configuration is loaded and the map is
/// ready, whichever finishes last, then shows the events of `dataset`.
///
/// A configuration failure is reported on the page and aborts startup. A
/// failure to load the events is reported but leaves the editor usable.
pub async fn start<U, F>(
    source: &ConfigSource,
    map_ready: F,
    dataset: Option<&str>,
) -> Result<Composer<U, HttpEventsApi>>
where
    U: Ui,
    F: Future<Output = U>,
{
    let client = reqwest::Client::new();
    let (cfg, mut ui) = tokio::join!(load_client_config(source, &client), map_ready);
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!("can't load config from {source:?}: {err}");
            ui.notify(Notice::ConfigUnavailable);
            return Err(err);
        }
    };
    info!("config loaded, api base url: {}", cfg.api_base_url);

    let mut composer = Composer::new(ui, HttpEventsApi::new(client, cfg));
    if let Err(err) = composer.load_markers(dataset).await {
        warn!("starting without events: {err}");
    }

    Ok(composer)
}
