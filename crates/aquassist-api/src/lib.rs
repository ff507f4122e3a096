//! AquaAssist API crate - platform envelope codec and axum skill endpoint.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use envelope::{respond, RequestEnvelope, ResponseEnvelope};
pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
