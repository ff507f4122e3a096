//! Catch-all for intent requests nothing earlier in the chain handled.
//!
//! Repeats the intent name back, which makes gaps in the interaction model
//! easy to spot. Must be registered last.

use aquassist_core::{IntentRequest, RequestType, SpokenResponse};

use crate::error::SkillError;
use crate::handler::RequestHandler;

/// Handler matching every intent request.
pub struct IntentReflectorHandler;

impl RequestHandler for IntentReflectorHandler {
    fn name(&self) -> &'static str {
        "intent_reflector"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_request_type(&RequestType::Intent)
    }

    fn handle(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        let intent_name = request
            .intent_name()
            .ok_or_else(|| SkillError::HandlerFailed("intent request without a name".to_string()))?;
        Ok(SpokenResponse::builder()
            .speech(format!("You just triggered {}.", intent_name))
            .build())
    }
}
