//! Client side of the event map: keeps the drawn area and the form in sync with
//! the backend and tells the map what to show.

pub mod api;
pub mod bootstrap;
pub mod composer;
pub mod error;
pub mod form;
pub mod markers;
pub mod notice;
pub mod selector;
pub mod surface;

pub use api::EventsApi;
pub use api::HttpEventsApi;
pub use composer::Composer;
pub use error::ComposerError;
pub use error::Result;
pub use error::SubmitError;
pub use error::ValidationError;
pub use form::EventForm;
pub use notice::Notice;
pub use surface::Ui;
