use common::types::CreateOutcome;
use common::types::EventFeature;
use common::types::Polygon;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::api::EventsApi;
use crate::error::Result;
use crate::error::SubmitError;
use crate::markers::parse_markers;
use crate::notice::Notice;
use crate::surface::Bounds;
use crate::surface::DrawnShape;
use crate::surface::Popup;
use crate::surface::Ui;
use crate::surface::DEFAULT_CENTER;
use crate::surface::DEFAULT_ZOOM;
use crate::surface::FIT_PADDING;
use crate::surface::NEW_EVENT_STYLE;

/// Owns the page state of the event editor: at most one drawn area waiting to
/// be submitted.
///
/// Operations take `&mut self`, so a submission in flight blocks further
/// submissions on the same composer until it completes.
pub struct Composer<U, A> {
    ui: U,
    api: A,
    draft: Option<Polygon>,
}

impl<U, A> Composer<U, A>
where
    U: Ui,
    A: EventsApi,
{
    pub fn new(ui: U, api: A) -> Self {
        Self {
            ui,
            api,
            draft: None,
        }
    }

    /// Keeps the newly drawn polygon, dropping any previous one.
    pub fn handle_shape_drawn(&mut self, shape: DrawnShape) {
        match shape {
            DrawnShape::Polygon(polygon) => {
                debug!("polygon drawn: {:?}", polygon.coordinates);
                self.ui.clear_draft();
                self.ui.show_draft(&polygon);
                self.draft = Some(polygon);
            }
            DrawnShape::Other(layer_type) => {
                debug!("ignoring drawn {layer_type}");
            }
        }
    }

    /// Sends the drawn area with the current form values as a new event.
    ///
    /// The drawn area is only dropped when the server accepts the event; on
    /// any failure it stays so the user can try again.
    pub async fn submit(&mut self) -> std::result::Result<EventFeature, SubmitError> {
        let form = self.ui.read_form();
        let event = match form.compose(self.draft.as_ref()) {
            Ok(event) => event,
            Err(err) => {
                debug!("submission blocked: {err}");
                self.ui.notify(err.into());
                return Err(err.into());
            }
        };

        match self.api.create_event(&event).await {
            Ok(CreateOutcome::Accepted(_)) => {
                info!("event {:?} created", event.properties.name);
                self.ui.notify(Notice::EventCreated);
                self.ui
                    .add_event_shape(&event, &NEW_EVENT_STYLE, event_popup(&event));
                self.ui.clear_draft();
                self.draft = None;
                Ok(event)
            }
            Ok(CreateOutcome::Rejected(message)) => {
                warn!("event {:?} rejected: {:?}", event.properties.name, message);
                self.ui.notify(Notice::CreateFailed(message.clone()));
                Err(SubmitError::Rejected(message))
            }
            Err(err) => {
                warn!("can't send event: {err}");
                self.ui.notify(Notice::ServerUnreachable);
                Err(SubmitError::Transport(err))
            }
        }
    }

    /// Replaces the markers with the events of a dataset and frames them.
    /// Returns how many markers were placed.
    pub async fn load_markers(&mut self, dataset: Option<&str>) -> Result<usize> {
        let entries = match self.api.list_events(dataset).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("can't load events: {err}");
                self.ui.notify(Notice::EventsUnavailable);
                return Err(err);
            }
        };

        let markers = parse_markers(&entries);
        debug!("{} of {} events have a position", markers.len(), entries.len());

        self.ui.clear_markers();
        for marker in &markers {
            self.ui.add_marker(marker.position, marker.popup());
        }

        match Bounds::from_points(markers.iter().map(|m| m.position)) {
            Some(bounds) => self.ui.fit_bounds(bounds, FIT_PADDING),
            None => self.ui.set_view(DEFAULT_CENTER, DEFAULT_ZOOM),
        }

        Ok(markers.len())
    }

    pub fn draft(&self) -> Option<&Polygon> {
        self.draft.as_ref()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

fn event_popup(event: &EventFeature) -> Popup {
    Popup::new(event.properties.name.as_str())
        .line(format!("From: {}", event.properties.start_date))
        .line(format!("To: {}", event.properties.end_date))
}
