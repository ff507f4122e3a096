//! Last-resort exception handling around dispatch.
//!
//! Whatever escapes the handler chain ends up here and is turned into a
//! spoken apology that keeps the session open.

use aquassist_core::{IntentRequest, SpokenResponse};
use tracing::error;

use crate::error::SkillError;

pub const GENERIC_APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Converts a dispatch failure into a response.
pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, request: &IntentRequest, error: &SkillError) -> bool;

    fn handle(&self, request: &IntentRequest, error: &SkillError) -> SpokenResponse;
}

/// Matches every failure; logs it and apologizes.
pub struct CatchAllExceptionHandler;

impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _request: &IntentRequest, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, request: &IntentRequest, error: &SkillError) -> SpokenResponse {
        error!(
            request_type = %request.request_type(),
            intent = request.intent_name().unwrap_or(""),
            error = %error,
            "Unhandled error during dispatch"
        );
        SpokenResponse::builder()
            .speech(GENERIC_APOLOGY)
            .reprompt(GENERIC_APOLOGY)
            .build()
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
