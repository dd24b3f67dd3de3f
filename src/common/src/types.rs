use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

use crate::error::CommonError;
use crate::error::Result;
use crate::STATUS_ERROR;
use crate::STATUS_SUCCESS;

/// A GeoJSON position, `[lon, lat]` with an optional altitude.
pub type Position = Vec<f64>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Linear rings, the first one is the exterior.
    pub coordinates: Vec<Vec<Position>>,
}

impl Polygon {
    pub fn new(coordinates: Vec<Vec<Position>>) -> Self {
        Self { coordinates }
    }

    pub fn validate(&self) -> Result<()> {
        if self.coordinates.is_empty() {
            return Err(CommonError::InvalidPolygon("no rings".to_string()));
        }

        for (idx, ring) in self.coordinates.iter().enumerate() {
            if ring.len() < 4 {
                return Err(CommonError::InvalidPolygon(format!(
                    "ring {idx} has {} positions, at least 4 required",
                    ring.len()
                )));
            }
            for pos in ring {
                if pos.len() < 2 || pos.len() > 3 || pos.iter().any(|v| !v.is_finite()) {
                    return Err(CommonError::InvalidPolygon(format!(
                        "ring {idx} has an invalid position {pos:?}"
                    )));
                }
            }
            if ring.first() != ring.last() {
                return Err(CommonError::InvalidPolygon(format!(
                    "ring {idx} is not closed"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon(Polygon),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureType {
    #[default]
    Feature,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventProperties {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Event submitted by the map page: a GeoJSON feature with a polygon and the
/// event's name and date range.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventFeature {
    #[serde(rename = "type")]
    pub typ: FeatureType,
    pub geometry: Geometry,
    pub properties: EventProperties,
}

impl EventFeature {
    pub fn new(polygon: Polygon, properties: EventProperties) -> Self {
        Self {
            typ: FeatureType::Feature,
            geometry: Geometry::Polygon(polygon),
            properties,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        match &self.geometry {
            Geometry::Polygon(p) => p,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.properties.name.trim().is_empty() {
            return Err(CommonError::BadRequest("event name is empty".to_string()));
        }
        if self.properties.start_date.trim().is_empty()
            || self.properties.end_date.trim().is_empty()
        {
            return Err(CommonError::BadRequest(
                "start and end dates are required".to_string(),
            ));
        }

        self.polygon().validate()
    }
}

/// Event row of a dataset as served by `GET /api/events`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub name: String,
    pub lat: String,
    pub lon: String,
    pub radius: f32,
}

/// Body of the `POST /api/events/new` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateEventResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echo of the accepted event, `None` when absent or not a valid feature.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_echo"
    )]
    pub data: Option<EventFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateEventResponse {
    pub fn success(message: impl Into<String>, data: EventFeature) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    pub fn with_error(self, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..self
        }
    }

    pub fn into_outcome(self) -> CreateOutcome {
        if self.status == STATUS_SUCCESS {
            CreateOutcome::Accepted(self.data)
        } else {
            CreateOutcome::Rejected(self.message.filter(|msg| !msg.is_empty()))
        }
    }
}

// the status alone decides the outcome, so a broken echo must not fail decoding
fn deserialize_echo<'de, D>(deserializer: D) -> std::result::Result<Option<EventFeature>, D::Error>
where D: Deserializer<'de> {
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decoded result of an event submission.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    /// Carries the echoed feature when the server sent one back.
    Accepted(Option<EventFeature>),
    Rejected(Option<String>),
}
