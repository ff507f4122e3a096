//! Built-in fallback intent: the utterance matched nothing in the model.

use aquassist_core::{IntentRequest, SpokenResponse};
use tracing::info;

use crate::error::SkillError;
use crate::handler::RequestHandler;

pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

pub const FALLBACK_SPEECH: &str =
    "Hmm, I'm not sure. You can say Hello or Help. What would you like to do?";
pub const FALLBACK_REPROMPT: &str = "I didn't catch that. What can I help you with?";

/// Handler for `AMAZON.FallbackIntent`; asks the user to rephrase.
pub struct FallbackIntentHandler;

impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_intent_name(FALLBACK_INTENT)
    }

    fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        info!("In FallbackIntentHandler");
        Ok(SpokenResponse::builder()
            .speech(FALLBACK_SPEECH)
            .reprompt(FALLBACK_REPROMPT)
            .build())
    }
}
