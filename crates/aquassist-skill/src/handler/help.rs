//! Built-in help intent.

use aquassist_core::{IntentRequest, SpokenResponse};

use crate::error::SkillError;
use crate::handler::RequestHandler;

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";

pub const HELP_TEXT: &str = "You can ask me for the average or total water consumption for a specific site. How can I help you?";

/// Handler for `AMAZON.HelpIntent`; keeps the session open.
pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_intent_name(HELP_INTENT)
    }

    fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        Ok(SpokenResponse::builder()
            .speech(HELP_TEXT)
            .reprompt(HELP_TEXT)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_matches_help_intent_only() {
        assert!(HelpIntentHandler.matches(&IntentRequest::intent(HELP_INTENT)));
        assert!(!HelpIntentHandler.matches(&IntentRequest::intent("AMAZON.StopIntent")));
        assert!(!HelpIntentHandler.matches(&IntentRequest::launch()));
    }

    #[test]
    fn test_help_keeps_session_open() {
        let resp = HelpIntentHandler
            .handle(&IntentRequest::intent(HELP_INTENT))
            .unwrap();
        assert_eq!(resp.speech(), Some(HELP_TEXT));
        assert_eq!(resp.reprompt(), Some(HELP_TEXT));
        assert!(resp.keeps_session_open());
    }
}
