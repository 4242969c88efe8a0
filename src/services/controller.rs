/// Form synchronization controller
///
/// Each action stores the submitted form (if any), clears the flash and reads
/// what it needs under one write guard, releases the lock, talks to the
/// recommendations service, and then reconciles the outcome back into the
/// view. The lock is never held across a request, so several actions can be
/// in flight at once.
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, ErrorInfo},
    models::{Action, FormState, RecommendationRecord, View},
    services::{
        requests,
        transport::{ApiRequest, ApiResponse, Transport},
    },
};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Recommendation has been Deleted!";
/// Shown for any delete failure; the response body is not consulted
pub const GENERIC_FAILURE_MESSAGE: &str = "Server error!";

/// How responses of overlapping actions are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every response is applied as it arrives; the last one to arrive wins
    #[default]
    ArrivalOrder,
    /// A response is applied only if no newer request was dispatched for the
    /// same action in the meantime
    LatestPerAction,
}

/// What an action did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(String),
    /// A newer request for the same action superseded this one
    Discarded,
}

pub struct FormSyncController {
    transport: Arc<dyn Transport>,
    view: Arc<RwLock<View>>,
    ordering: ResponseOrdering,
    sequences: [AtomicU64; 8],
}

impl FormSyncController {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            view: Arc::new(RwLock::new(View::default())),
            ordering: ResponseOrdering::default(),
            sequences: Default::default(),
        }
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Snapshot of the current view
    pub async fn view(&self) -> View {
        self.view.read().await.clone()
    }

    /// Replaces the form with values the user typed
    pub async fn set_form(&self, form: FormState) {
        self.view.write().await.form = form;
    }

    /// Takes a submitted form and runs `action` against it. The request is
    /// built from this form even when other submissions race with it.
    pub async fn submit(&self, action: Action, form: FormState) -> ActionOutcome {
        self.run(action, Some(form)).await
    }

    /// Runs `action` against the form currently in the view
    pub async fn dispatch(&self, action: Action) -> ActionOutcome {
        self.run(action, None).await
    }

    async fn run(&self, action: Action, form: Option<FormState>) -> ActionOutcome {
        match action {
            Action::Create | Action::Update | Action::Like | Action::Unlike => {
                self.mutate(action, form).await
            }
            Action::Retrieve => self.retrieve_with(form).await,
            Action::Delete => self.delete_with(form).await,
            Action::Clear => self.clear().await,
            Action::Search => self.search_with(form).await,
        }
    }

    pub async fn create(&self) -> ActionOutcome {
        self.mutate(Action::Create, None).await
    }

    pub async fn update(&self) -> ActionOutcome {
        self.mutate(Action::Update, None).await
    }

    pub async fn like(&self) -> ActionOutcome {
        self.mutate(Action::Like, None).await
    }

    pub async fn unlike(&self) -> ActionOutcome {
        self.mutate(Action::Unlike, None).await
    }

    pub async fn retrieve(&self) -> ActionOutcome {
        self.retrieve_with(None).await
    }

    pub async fn delete(&self) -> ActionOutcome {
        self.delete_with(None).await
    }

    pub async fn search(&self) -> ActionOutcome {
        self.search_with(None).await
    }

    /// Stores `form` if given, clears the flash and reads from the form, all
    /// under one write guard
    async fn prepare<T>(&self, form: Option<FormState>, read: impl FnOnce(&FormState) -> T) -> T {
        let mut view = self.view.write().await;
        if let Some(form) = form {
            view.form = form;
        }
        view.clear_message();
        read(&view.form)
    }

    /// Create, update, like and unlike share one protocol: send the full
    /// record, replace the form with the server's copy on success, surface the
    /// server's message on failure.
    async fn mutate(&self, action: Action, form: Option<FormState>) -> ActionOutcome {
        let record = self.prepare(form, FormState::read_record).await;

        let Some(request) = requests::mutation_request(action, &record) else {
            return ActionOutcome::Failed(format!("{} does not write a record", action));
        };

        let ticket = self.begin(action);
        let result = self.exchange::<RecommendationRecord>(action, &request).await;

        let mut view = self.view.write().await;
        if self.is_stale(action, ticket) {
            return self.discard(action, ticket);
        }

        match result {
            Ok(record) => {
                view.form.populate(&record);
                view.show_message(SUCCESS_MESSAGE);
                ActionOutcome::Succeeded
            }
            Err(info) => {
                view.show_message(info.message.clone());
                ActionOutcome::Failed(info.message)
            }
        }
    }

    /// Loads the record named by the id field. On failure the other six
    /// fields are blanked but the typed id is kept.
    async fn retrieve_with(&self, form: Option<FormState>) -> ActionOutcome {
        let raw_id = self.prepare(form, |form| form.id.clone()).await;

        let request = requests::retrieve_request(&raw_id);
        let ticket = self.begin(Action::Retrieve);
        let result = self
            .exchange::<RecommendationRecord>(Action::Retrieve, &request)
            .await;

        let mut view = self.view.write().await;
        if self.is_stale(Action::Retrieve, ticket) {
            return self.discard(Action::Retrieve, ticket);
        }

        match result {
            Ok(record) => {
                view.form.populate(&record);
                view.show_message(SUCCESS_MESSAGE);
                ActionOutcome::Succeeded
            }
            Err(info) => {
                view.form.clear_fields();
                view.show_message(info.message.clone());
                ActionOutcome::Failed(info.message)
            }
        }
    }

    /// Deletes the record named by the id field. Success blanks the other six
    /// fields; any failure collapses to `GENERIC_FAILURE_MESSAGE`.
    async fn delete_with(&self, form: Option<FormState>) -> ActionOutcome {
        let raw_id = self.prepare(form, |form| form.id.clone()).await;

        let request = requests::delete_request(&raw_id);
        let ticket = self.begin(Action::Delete);
        let result = self.send(Action::Delete, &request).await;

        let mut view = self.view.write().await;
        if self.is_stale(Action::Delete, ticket) {
            return self.discard(Action::Delete, ticket);
        }

        match result {
            Ok(_) => {
                view.form.clear_fields();
                view.show_message(DELETED_MESSAGE);
                ActionOutcome::Succeeded
            }
            Err(_) => {
                view.show_message(GENERIC_FAILURE_MESSAGE);
                ActionOutcome::Failed(GENERIC_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Blanks every field and the flash message. No request is made.
    pub async fn clear(&self) -> ActionOutcome {
        let mut view = self.view.write().await;
        view.form.id.clear();
        view.clear_message();
        view.form.clear_fields();
        ActionOutcome::Succeeded
    }

    /// Searches by product id and/or rec type. The results replace the table
    /// and the top hit, if any, is copied into the form.
    async fn search_with(&self, form: Option<FormState>) -> ActionOutcome {
        let (product_id, rec_type) = self
            .prepare(form, |form| (form.product_id.clone(), form.rec_type.clone()))
            .await;

        let request = requests::search_request(&product_id, &rec_type);
        let ticket = self.begin(Action::Search);
        let result = self
            .exchange::<Vec<RecommendationRecord>>(Action::Search, &request)
            .await;

        let mut view = self.view.write().await;
        if self.is_stale(Action::Search, ticket) {
            return self.discard(Action::Search, ticket);
        }

        match result {
            Ok(records) => {
                tracing::info!(
                    query = request.query.as_deref().unwrap_or(""),
                    results = records.len(),
                    "Search completed"
                );
                if let Some(first) = records.first() {
                    view.form.populate(first);
                }
                view.results = Some(records);
                view.show_message(SUCCESS_MESSAGE);
                ActionOutcome::Succeeded
            }
            Err(info) => {
                view.show_message(info.message.clone());
                ActionOutcome::Failed(info.message)
            }
        }
    }

    /// Sends a request and keeps only 2xx responses on the success side
    async fn send(&self, action: Action, request: &ApiRequest) -> Result<ApiResponse, ErrorInfo> {
        match self.transport.send(request.clone()).await {
            Ok(response) if response.is_success() => {
                tracing::info!(
                    action = %action,
                    request = %request,
                    status = response.status,
                    "Request succeeded"
                );
                Ok(response)
            }
            Ok(response) => {
                let info = ErrorInfo::from_response(&response);
                tracing::warn!(
                    action = %action,
                    request = %request,
                    status = response.status,
                    message = %info.message,
                    "Request rejected by server"
                );
                Err(info)
            }
            Err(e) => {
                tracing::warn!(
                    action = %action,
                    request = %request,
                    error = %e,
                    "Request failed"
                );
                Err(ErrorInfo::from(e))
            }
        }
    }

    /// Sends a request and decodes a successful body as `T`
    async fn exchange<T: DeserializeOwned>(
        &self,
        action: Action,
        request: &ApiRequest,
    ) -> Result<T, ErrorInfo> {
        let response = self.send(action, request).await?;

        serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!(
                action = %action,
                error = %e,
                body = %response.body,
                "Failed to deserialize recommendations response"
            );
            ErrorInfo {
                status: Some(response.status),
                ..ErrorInfo::from(AppError::from(e))
            }
        })
    }

    /// Claims the next sequence number for `action`
    fn begin(&self, action: Action) -> u64 {
        self.sequences[action.slot()].fetch_add(1, AtomicOrdering::SeqCst) + 1
    }

    fn is_stale(&self, action: Action, ticket: u64) -> bool {
        self.ordering == ResponseOrdering::LatestPerAction
            && self.sequences[action.slot()].load(AtomicOrdering::SeqCst) != ticket
    }

    fn discard(&self, action: Action, ticket: u64) -> ActionOutcome {
        tracing::debug!(
            action = %action,
            ticket = ticket,
            latest = self.sequences[action.slot()].load(AtomicOrdering::SeqCst),
            "Discarding stale response"
        );
        ActionOutcome::Discarded
    }
}
