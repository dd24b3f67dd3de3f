use common::types::EventFeature;
use common::types::EventProperties;
use common::types::Polygon;

use crate::error::ValidationError;

/// Values of the name and date inputs as the user left them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

impl EventForm {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Builds the event to submit. Checks run in a fixed order: area, name,
    /// dates.
    pub fn compose(&self, draft: Option<&Polygon>) -> Result<EventFeature, ValidationError> {
        let polygon = draft.ok_or(ValidationError::MissingShape)?;
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(ValidationError::MissingDates);
        }

        Ok(EventFeature::new(polygon.clone(), EventProperties {
            name: self.name.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }))
    }
}
