use serde_json::Value;

use crate::surface::LatLng;
use crate::surface::Popup;

/// Backend event that can be placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub position: LatLng,
}

impl Marker {
    /// Reads an event list entry. `lat` and `lon` may be numbers or numeric
    /// strings; entries without a finite position yield `None`.
    pub fn from_value(v: &Value) -> Option<Marker> {
        let lat = coordinate(v.get("lat")?)?;
        let lon = coordinate(v.get("lon")?)?;
        let name = v
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Some(Marker {
            name,
            position: LatLng::new(lat, lon),
        })
    }

    pub fn popup(&self) -> Popup {
        Popup::new(self.name.as_str())
            .line(format!("Lat: {}", self.position.lat))
            .line(format!("Lon: {}", self.position.lon))
    }
}

fn coordinate(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    n.is_finite().then_some(n)
}

/// Markers for the entries that have a usable position, in list order.
pub fn parse_markers(entries: &[Value]) -> Vec<Marker> {
    entries.iter().filter_map(Marker::from_value).collect()
}
