//! Session-ended notifications. Nothing to clean up; answer silently.

use aquassist_core::{IntentRequest, RequestType, SpokenResponse};
use tracing::debug;

use crate::error::SkillError;
use crate::handler::RequestHandler;

/// Handler for `SessionEndedRequest`.
pub struct SessionEndedRequestHandler;

impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_request_type(&RequestType::SessionEnded)
    }

    fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        debug!("Session ended");
        Ok(SpokenResponse::builder().build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ended_is_silent_and_terminal() {
        let req = IntentRequest::session_ended();
        assert!(SessionEndedRequestHandler.matches(&req));
        let resp = SessionEndedRequestHandler.handle(&req).unwrap();
        assert!(resp.speech().is_none());
        assert!(resp.reprompt().is_none());
        assert!(resp.should_end_session());
    }

    #[test]
    fn test_session_ended_ignores_intents() {
        assert!(!SessionEndedRequestHandler.matches(&IntentRequest::intent("AMAZON.StopIntent")));
    }
}
