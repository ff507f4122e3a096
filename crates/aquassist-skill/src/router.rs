//! Ordered request handler chain.
//!
//! Handlers are asked in registration order and the first match wins, so
//! specific handlers must be registered before generic ones.

use aquassist_core::{IntentRequest, SpokenResponse};
use tracing::debug;

use crate::error::SkillError;
use crate::handler::RequestHandler;

/// First-match dispatcher over a fixed list of handlers.
#[derive(Default)]
pub struct RequestRouter {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl RequestRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain.
    pub fn register(&mut self, handler: Box<dyn RequestHandler>) {
        self.handlers.push(handler);
    }

    /// Handler names in evaluation order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The first handler whose predicate accepts `request`.
    pub fn select(&self, request: &IntentRequest) -> Option<&dyn RequestHandler> {
        self.handlers
            .iter()
            .find(|h| h.matches(request))
            .map(|h| h.as_ref())
    }

    /// Run the first matching handler.
    ///
    /// Returns [`SkillError::NoHandler`] when nothing in the chain matches.
    pub fn dispatch(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        let handler = self.select(request).ok_or_else(|| {
            SkillError::NoHandler(match request.intent_name() {
                Some(name) => format!("{} ({})", request.request_type(), name),
                None => request.request_type().to_string(),
            })
        })?;
        debug!(
            handler = handler.name(),
            request_type = %request.request_type(),
            "Dispatching request"
        );
        handler.handle(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{HelpIntentHandler, IntentReflectorHandler, LaunchRequestHandler};

    /// Handler that answers every request with its own label.
    struct Labelled(&'static str);

    impl RequestHandler for Labelled {
        fn name(&self) -> &'static str {
            self.0
        }

        fn matches(&self, _request: &IntentRequest) -> bool {
            true
        }

        fn handle(&self, _request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
            Ok(SpokenResponse::builder().speech(self.0).build())
        }
    }

    #[test]
    fn test_first_match_wins() {
        let mut router = RequestRouter::new();
        router.register(Box::new(Labelled("first")));
        router.register(Box::new(Labelled("second")));
        let resp = router.dispatch(&IntentRequest::launch()).unwrap();
        assert_eq!(resp.speech(), Some("first"));
    }

    #[test]
    fn test_specific_handler_precedes_reflector() {
        let mut router = RequestRouter::new();
        router.register(Box::new(HelpIntentHandler));
        router.register(Box::new(IntentReflectorHandler));
        let req = IntentRequest::intent("AMAZON.HelpIntent");
        assert!(IntentReflectorHandler.matches(&req));
        assert_eq!(router.select(&req).map(|h| h.name()), Some("help"));
    }

    #[test]
    fn test_registration_order_matters() {
        let mut router = RequestRouter::new();
        router.register(Box::new(IntentReflectorHandler));
        router.register(Box::new(HelpIntentHandler));
        let resp = router.dispatch(&IntentRequest::intent("AMAZON.HelpIntent")).unwrap();
        assert_eq!(resp.speech(), Some("You just triggered AMAZON.HelpIntent."));
    }

    #[test]
    fn test_no_handler() {
        let mut router = RequestRouter::new();
        router.register(Box::new(LaunchRequestHandler));
        let err = router
            .dispatch(&IntentRequest::other("CanFulfillIntentRequest"))
            .unwrap_err();
        assert!(matches!(err, SkillError::NoHandler(_)));
        assert!(err.to_string().contains("CanFulfillIntentRequest"));
    }

    #[test]
    fn test_no_handler_names_the_intent() {
        let router = RequestRouter::new();
        let err = router.dispatch(&IntentRequest::intent("OrderPizzaIntent")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No handler can serve request: IntentRequest (OrderPizzaIntent)"
        );
    }

    #[test]
    fn test_handler_names_in_order() {
        let mut router = RequestRouter::new();
        assert!(router.is_empty());
        router.register(Box::new(LaunchRequestHandler));
        router.register(Box::new(IntentReflectorHandler));
        assert_eq!(router.len(), 2);
        assert_eq!(router.handler_names(), vec!["launch", "intent_reflector"]);
    }
}
