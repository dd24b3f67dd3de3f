//! Page stand-in for the headless commands: map updates and notices go to the log.

use common::types::EventFeature;
use common::types::Polygon;
use composer::surface::Bounds;
use composer::surface::FormSource;
use composer::surface::LatLng;
use composer::surface::MapSurface;
use composer::surface::Notifier;
use composer::surface::Padding;
use composer::surface::Popup;
use composer::surface::ShapeStyle;
use composer::EventForm;
use composer::Notice;
use tracing::debug;
use tracing::info;
use tracing::warn;

#[derive(Debug, Default)]
pub struct ConsoleUi {
    pub form: EventForm,
    pub markers: Vec<(LatLng, Popup)>,
    pub shapes: Vec<EventFeature>,
    pub notices: Vec<Notice>,
}

impl ConsoleUi {
    pub fn new(form: EventForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }
}

impl MapSurface for ConsoleUi {
    fn show_draft(&mut self, polygon: &Polygon) {
        debug!("drawing area with {} ring(s)", polygon.coordinates.len());
    }

    fn clear_draft(&mut self) {
        debug!("drawing cleared");
    }

    fn add_event_shape(&mut self, event: &EventFeature, style: &ShapeStyle, popup: Popup) {
        info!("event shape ({}): {}", style.color, popup.to_html());
        self.shapes.push(event.clone());
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, at: LatLng, popup: Popup) {
        self.markers.push((at, popup));
    }

    fn fit_bounds(&mut self, bounds: Bounds, _padding: Padding) {
        debug!(
            "fit bounds: ({}, {}) - ({}, {})",
            bounds.south_west.lat, bounds.south_west.lon, bounds.north_east.lat, bounds.north_east.lon
        );
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        debug!("view: ({}, {}) zoom {zoom}", center.lat, center.lon);
    }
}

impl FormSource for ConsoleUi {
    fn read_form(&self) -> EventForm {
        self.form.clone()
    }
}

impl Notifier for ConsoleUi {
    fn notify(&mut self, notice: Notice) {
        match &notice {
            Notice::EventCreated => info!("{notice}"),
            _ => warn!("{notice}"),
        }
        self.notices.push(notice);
    }
}
