use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use common::types::Geometry;
use composer::bootstrap;
use composer::bootstrap::ConfigSource;
use composer::surface::DrawnShape;
use composer::EventForm;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::console::ConsoleUi;
use crate::error::Error;
use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Submit {
    /// Client config document, an URL or a local file
    #[arg(long)]
    pub config: ConfigSource,
    /// GeoJSON file with the drawn area, a feature or a bare geometry
    #[arg(long)]
    pub shape: PathBuf,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
}

/// Draws the area from `args.shape`, fills the form and sends it.
pub async fn run(args: &Submit) -> Result<()> {
    let shape = read_shape(&args.shape).await?;
    let form = EventForm::new(&args.name, &args.start, &args.end);

    let mut c = bootstrap::start(&args.config, async { ConsoleUi::new(form) }, None).await?;
    c.handle_shape_drawn(shape);
    let event = c.submit().await?;
    info!("event \"{}\" created", event.properties.name);

    Ok(())
}

pub async fn read_shape(path: &Path) -> Result<DrawnShape> {
    let data = tokio::fs::read(path).await.map_err(|err| {
        Error::FileNotFound(format!("can't read shape {path:?}: {err}"))
    })?;

    parse_shape(&serde_json::from_slice(&data)?)
}

fn parse_shape(v: &Value) -> Result<DrawnShape> {
    let typ = v.get("type").and_then(Value::as_str).unwrap_or_default();
    match typ {
        "Feature" => {
            let geometry = v
                .get("geometry")
                .ok_or_else(|| Error::BadRequest("feature without geometry".to_string()))?;
            parse_shape(geometry)
        }
        "Polygon" => match Geometry::deserialize(v)? {
            Geometry::Polygon(polygon) => Ok(DrawnShape::Polygon(polygon)),
        },
        "" => Err(Error::BadRequest("shape has no type".to_string())),
        other => Ok(DrawnShape::Other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use composer::surface::DrawnShape;
    use serde_json::json;

    use crate::command::submit::parse_shape;

    #[test]
    fn test_parse_shape() {
        let ring = json!([[10.4, 43.8], [10.6, 43.8], [10.6, 43.9], [10.4, 43.8]]);
        let polygon = json!({"type": "Polygon", "coordinates": [ring]});

        let bare = parse_shape(&polygon).unwrap();
        let feature = parse_shape(&json!({
            "type": "Feature",
            "geometry": polygon,
            "properties": {}
        }))
        .unwrap();
        assert_eq!(bare, feature);
        match bare {
            DrawnShape::Polygon(p) => assert_eq!(p.coordinates[0].len(), 4),
            other => panic!("unexpected shape {other:?}"),
        }

        assert_eq!(
            parse_shape(&json!({"type": "Point", "coordinates": [1.0, 2.0]})).unwrap(),
            DrawnShape::Other("Point".to_string())
        );
        assert!(parse_shape(&json!({"coordinates": []})).is_err());
        assert!(parse_shape(&json!({"type": "Feature"})).is_err());
    }
}
