//! Core types for AquaAssist: configuration, errors, the request/response
//! model, and the consumption dataset.

pub mod config;
pub mod dataset;
pub mod error;
pub mod request;
pub mod response;

pub use config::AquaConfig;
pub use dataset::{Dataset, Record};
pub use error::{AquaError, Result};
pub use request::{IntentRequest, RequestType, Slot};
pub use response::{ResponseBuilder, SpokenResponse};
