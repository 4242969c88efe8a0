pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use page::PageRenderer;
pub use routes::create_router;
pub use state::AppState;
