//! Seam between the composer and the map/draw toolkit that renders the page.

use common::html;
use common::types::EventFeature;
use common::types::Polygon;

use crate::form::EventForm;
use crate::notice::Notice;

pub const DEFAULT_CENTER: LatLng = LatLng { lat: 41.9, lon: 12.5 };
pub const DEFAULT_ZOOM: u8 = 5;
pub const FIT_PADDING: Padding = Padding { x: 20, y: 20 };

pub const NEW_EVENT_STYLE: ShapeStyle = ShapeStyle {
    color: "#28a745",
    weight: 2,
    fill_color: "#28a745",
    fill_opacity: 0.4,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Bounds> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for p in points {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lon = bounds.south_west.lon.min(p.lon);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lon = bounds.north_east.lon.max(p.lon);
        }

        Some(bounds)
    }
}

/// Pixel padding kept around fitted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: &'static str,
    pub weight: u32,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
}

/// Label attached to a marker or a shape: a bold title over plain lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub lines: Vec<String>,
}

impl Popup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![],
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<b>{}</b>", html::escape(&self.title));
        for line in &self.lines {
            out.push_str("<br>");
            out.push_str(&html::escape(line));
        }
        out
    }
}

/// Shape reported by the draw toolkit when the user finishes drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnShape {
    Polygon(Polygon),
    /// Any other layer type, identified by the toolkit's name for it.
    Other(String),
}

pub trait MapSurface {
    /// Shows the pending drawing, replacing whatever was drawn before.
    fn show_draft(&mut self, polygon: &Polygon);
    fn clear_draft(&mut self);
    /// Adds a confirmed event to the map.
    fn add_event_shape(&mut self, event: &EventFeature, style: &ShapeStyle, popup: Popup);
    fn clear_markers(&mut self);
    fn add_marker(&mut self, at: LatLng, popup: Popup);
    fn fit_bounds(&mut self, bounds: Bounds, padding: Padding);
    fn set_view(&mut self, center: LatLng, zoom: u8);
}

/// Current values of the event form, read on demand.
pub trait FormSource {
    fn read_form(&self) -> EventForm;
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Everything the composer needs from the page.
pub trait Ui: MapSurface + FormSource + Notifier {}

impl<T: MapSurface + FormSource + Notifier> Ui for T {}

#[cfg(test)]
mod tests {
    use crate::surface::Bounds;
    use crate::surface::LatLng;
    use crate::surface::Popup;

    #[test]
    fn test_bounds() {
        assert_eq!(Bounds::from_points(vec![]), None);

        let b = Bounds::from_points(vec![
            LatLng::new(41.9, 12.5),
            LatLng::new(45.4, 9.2),
            LatLng::new(40.8, 14.2),
        ])
        .unwrap();
        assert_eq!(b.south_west, LatLng::new(40.8, 9.2));
        assert_eq!(b.north_east, LatLng::new(45.4, 14.2));

        let one = Bounds::from_points(vec![LatLng::new(1.0, 2.0)]).unwrap();
        assert_eq!(one.south_west, one.north_east);
    }

    #[test]
    fn test_popup_html() {
        let p = Popup::new("Rock & Roll").line("From: 2025-06-01");
        assert_eq!(p.to_html(), "<b>Rock &amp; Roll</b><br>From: 2025-06-01");
    }
}
