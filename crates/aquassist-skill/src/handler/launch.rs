//! Greeting for a skill opened without a request.

use aquassist_core::{IntentRequest, RequestType, SpokenResponse};

use crate::error::SkillError;
use crate::handler::RequestHandler;

pub const WELCOME: &str = "Welcome to AquaAssist. How can I help you?";

/// Handler for `LaunchRequest`; keeps the session open.
pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_request_type(&RequestType::Launch)
    }

    fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        Ok(SpokenResponse::builder()
            .speech(WELCOME)
            .reprompt(WELCOME)
            .build())
    }
}
