use serde::Serialize;

use super::{FormState, RecommendationRecord};

/// Everything the page shows: the form, the flash message and the results table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub form: FormState,
    /// Single-slot status message; `None` renders an empty region
    pub flash: Option<String>,
    /// Rows of the last successful search; `None` until one has happened
    pub results: Option<Vec<RecommendationRecord>>,
}

impl View {
    /// Replaces the flash message
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.flash = Some(text.into());
    }

    pub fn clear_message(&mut self) {
        self.flash = None;
    }
}
