use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::ValidationError;

pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DrawAreaFirst,
    EnterName,
    SelectDates,
    EventCreated,
    /// The server refused the event, with its message if it sent one.
    CreateFailed(Option<String>),
    ServerUnreachable,
    EventsUnavailable,
    ConfigUnavailable,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::DrawAreaFirst => {
                write!(f, "Please, draw an area on the map before clicking on Send.")
            }
            Notice::EnterName => write!(f, "Please, insert an event name."),
            Notice::SelectDates => write!(f, "Please, select a start date and an end date."),
            Notice::EventCreated => write!(f, "Event successfully created!"),
            Notice::CreateFailed(msg) => write!(
                f,
                "An error occurred while creating the event: {}",
                msg.as_deref()
                    .filter(|msg| !msg.is_empty())
                    .unwrap_or(UNKNOWN_ERROR)
            ),
            Notice::ServerUnreachable => {
                write!(f, "An error occurred communicating with the server.")
            }
            Notice::EventsUnavailable => {
                write!(f, "Error loading events. Check that the server is running.")
            }
            Notice::ConfigUnavailable => write!(f, "Impossible to load config."),
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingShape => Notice::DrawAreaFirst,
            ValidationError::MissingName => Notice::EnterName,
            ValidationError::MissingDates => Notice::SelectDates,
        }
    }
}
