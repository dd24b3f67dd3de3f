use async_trait::async_trait;
use common::config::ClientConfig;
use common::types::CreateEventResponse;
use common::types::CreateOutcome;
use common::types::EventFeature;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Backend calls made by the composer. Each call is a single request: no
/// retries, no timeout.
#[async_trait]
pub trait EventsApi {
    /// Raw entries of the event list; entries are checked by the caller.
    async fn list_events(&self, dataset: Option<&str>) -> Result<Vec<Value>>;
    async fn create_event(&self, event: &EventFeature) -> Result<CreateOutcome>;
}

pub struct HttpEventsApi {
    client: reqwest::Client,
    cfg: ClientConfig,
}

impl HttpEventsApi {
    pub fn new(client: reqwest::Client, cfg: ClientConfig) -> Self {
        Self { client, cfg }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn list_events(&self, dataset: Option<&str>) -> Result<Vec<Value>> {
        let url = self.cfg.events_url(dataset)?;
        debug!("GET {url}");

        Ok(self.client.get(url).send().await?.json().await?)
    }

    // the body decides the outcome, whatever the status code
    async fn create_event(&self, event: &EventFeature) -> Result<CreateOutcome> {
        let url = self.cfg.new_event_url()?;
        debug!("POST {url}");

        let resp = self.client.post(url).json(event).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!("create event response: {status}");
        let resp: CreateEventResponse = serde_json::from_slice(&body)?;

        Ok(resp.into_outcome())
    }
}
