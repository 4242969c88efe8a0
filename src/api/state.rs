use std::sync::Arc;

use crate::error::AppResult;
use crate::services::{FormSyncController, ResponseOrdering, Transport};

use super::PageRenderer;

/// Shared application state
///
/// One controller backs the page, so every browser talking to this front sees
/// and edits the same form.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<FormSyncController>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Creates the state around a transport to the recommendations service
    pub fn new(transport: Arc<dyn Transport>, ordering: ResponseOrdering) -> AppResult<Self> {
        Ok(Self {
            controller: Arc::new(FormSyncController::new(transport).with_ordering(ordering)),
            renderer: Arc::new(PageRenderer::new()?),
        })
    }
}
