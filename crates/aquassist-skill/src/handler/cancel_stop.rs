//! Built-in cancel and stop intents share one goodbye.

use aquassist_core::{IntentRequest, SpokenResponse};

use crate::error::SkillError;
use crate::handler::RequestHandler;

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const GOODBYE: &str = "Goodbye!";

/// Handler for `AMAZON.CancelIntent` and `AMAZON.StopIntent`.
pub struct CancelOrStopIntentHandler;

impl RequestHandler for CancelOrStopIntentHandler {
    fn name(&self) -> &'static str {
        "cancel_or_stop"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_intent_name(CANCEL_INTENT) || request.is_intent_name(STOP_INTENT)
    }

    fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        Ok(SpokenResponse::builder().speech(GOODBYE).build())
    }
}
