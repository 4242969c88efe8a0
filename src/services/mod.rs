pub mod controller;
pub mod requests;
pub mod transport;

pub use controller::{ActionOutcome, FormSyncController, ResponseOrdering};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
