use std::io;
use std::path::PathBuf;

use common::types::EventFeature;
use common::types::EventRecord;
use metrics::counter;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::PlatformError;
use crate::Result;

pub const METRIC_EVENTS_CREATED_TOTAL: &str = "events.created_total";

const COL_NAME: usize = 0;
const COL_LAT: usize = 1;
const COL_LON: usize = 2;
const COL_RADIUS: usize = 9;

/// Serves event datasets stored as CSV files and accepts new events.
pub struct Events {
    data_path: PathBuf,
    default_dataset: String,
}

impl Events {
    pub fn new(data_path: impl Into<PathBuf>, default_dataset: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            default_dataset: default_dataset.into(),
        }
    }

    /// Resolves a dataset name to its file. An empty name selects the default
    /// dataset; names that could leave the data directory are refused.
    pub fn dataset_path(&self, filename: Option<&str>) -> Result<PathBuf> {
        let filename = match filename.map(str::trim) {
            None | Some("") => {
                debug!("no dataset specified, using {}", self.default_dataset);
                self.default_dataset.as_str()
            }
            Some(name) => name,
        };

        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(PlatformError::BadRequest(format!(
                "invalid dataset name {filename:?}"
            )));
        }

        Ok(self.data_path.join(filename))
    }

    /// Events of a dataset. A missing or unreadable dataset is served as an
    /// empty list.
    pub async fn list(&self, filename: Option<&str>) -> Result<Vec<EventRecord>> {
        let path = self.dataset_path(filename)?;
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(err) => {
                warn!("can't open dataset {path:?}: {err}, serving no events");
                return Ok(vec![]);
            }
        };

        match parse_events(data.as_slice()) {
            Ok(events) => {
                if events.is_empty() {
                    warn!("dataset {path:?} is empty or only has a header");
                }
                Ok(events)
            }
            Err(err) => {
                warn!("can't read dataset {path:?}: {err}, serving no events");
                Ok(vec![])
            }
        }
    }

    /// Checks a submitted event and hands it back as the confirmation payload.
    /// Events are not stored.
    pub fn create(&self, event: EventFeature) -> Result<EventFeature> {
        event.validate()?;

        info!(
            "new event received: name={:?} start={:?} end={:?}",
            event.properties.name, event.properties.start_date, event.properties.end_date
        );
        counter!(METRIC_EVENTS_CREATED_TOTAL).increment(1);

        Ok(event)
    }
}

/// Reads event rows from CSV. The first row is a header; rows with fewer than
/// three columns are skipped and a missing or invalid radius falls back to 0.
pub fn parse_events<R: io::Read>(rdr: R) -> Result<Vec<EventRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let mut events = Vec::new();
    for res in rdr.records() {
        let rec = res?;
        if rec.len() <= COL_LON {
            warn!("skipping row with {} columns: {rec:?}", rec.len());
            continue;
        }

        let radius = match rec.get(COL_RADIUS).filter(|v| !v.is_empty()) {
            None => {
                debug!("missing radius for {rec:?}, using 0");
                0.0
            }
            Some(v) => match v.trim().parse::<f32>() {
                Ok(r) => r,
                Err(_) => {
                    warn!("invalid radius {v:?} for {rec:?}, using 0");
                    0.0
                }
            },
        };

        events.push(EventRecord {
            name: rec[COL_NAME].to_string(),
            lat: rec[COL_LAT].to_string(),
            lon: rec[COL_LON].to_string(),
            radius,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use common::types::EventRecord;

    use crate::events::parse_events;
    use crate::events::Events;

    const CSV: &str = "\
Name,Latitude,Longitude,City,Country,Start,End,Genre,Url,Radius
Glastonbury,51.15,-2.58,Pilton,UK,2025-06-25,2025-06-29,Mixed,http://x,3.5
Reading,51.46,-0.97,Reading,UK,2025-08-22,2025-08-24,Rock,http://y,bad
Short,51.0
Boomtown,51.04,-1.26
";

    #[test]
    fn test_parse_events() {
        let events = parse_events(CSV.as_bytes()).unwrap();
        assert_eq!(events, vec![
            EventRecord {
                name: "Glastonbury".to_string(),
                lat: "51.15".to_string(),
                lon: "-2.58".to_string(),
                radius: 3.5,
            },
            EventRecord {
                name: "Reading".to_string(),
                lat: "51.46".to_string(),
                lon: "-0.97".to_string(),
                radius: 0.0,
            },
            EventRecord {
                name: "Boomtown".to_string(),
                lat: "51.04".to_string(),
                lon: "-1.26".to_string(),
                radius: 0.0,
            },
        ]);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_events("Name,Latitude,Longitude\n".as_bytes())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dataset_path() {
        let events = Events::new("data", "uk_festivals.csv");
        assert_eq!(
            events.dataset_path(None).unwrap(),
            std::path::Path::new("data/uk_festivals.csv")
        );
        assert_eq!(
            events.dataset_path(Some("")).unwrap(),
            std::path::Path::new("data/uk_festivals.csv")
        );
        assert_eq!(
            events.dataset_path(Some("it.csv")).unwrap(),
            std::path::Path::new("data/it.csv")
        );
        assert!(events.dataset_path(Some("../secret.csv")).is_err());
        assert!(events.dataset_path(Some("a/b.csv")).is_err());
    }

    #[tokio::test]
    async fn test_missing_dataset_is_empty() {
        let events = Events::new(temp_dir().join("eventmap-missing"), "none.csv");
        assert!(events.list(None).await.unwrap().is_empty());
    }
}
