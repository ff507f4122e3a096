//! The assembled skill: handler chain plus exception boundary.
//!
//! [`Skill::invoke`] is total. Every request yields exactly one response,
//! including when no handler matches, a handler fails, or a handler panics.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use aquassist_core::{Dataset, IntentRequest, SpokenResponse};
use tracing::{info, warn};

use crate::aggregate::Aggregator;
use crate::boundary::{panic_message, CatchAllExceptionHandler, ExceptionHandler};
use crate::error::SkillError;
use crate::handler::{
    AverageConsumptionHandler, CancelOrStopIntentHandler, FallbackIntentHandler,
    HelpIntentHandler, IntentReflectorHandler, LaunchRequestHandler, RequestHandler,
    SessionEndedRequestHandler, TotalConsumptionHandler,
};
use crate::router::RequestRouter;
use crate::sites::SiteResolver;

/// Collects request and exception handlers in order, then builds a [`Skill`].
#[derive(Default)]
pub struct SkillBuilder {
    router: RequestRouter,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
}

impl SkillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.router.register(Box::new(handler));
        self
    }

    pub fn add_exception_handler(mut self, handler: impl ExceptionHandler + 'static) -> Self {
        self.exception_handlers.push(Box::new(handler));
        self
    }

    pub fn build(self) -> Skill {
        Skill {
            router: self.router,
            exception_handlers: self.exception_handlers,
        }
    }
}

/// A ready-to-serve skill.
pub struct Skill {
    router: RequestRouter,
    exception_handlers: Vec<Box<dyn ExceptionHandler>>,
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::new()
    }

    /// The water-consumption skill with its fixed handler order.
    ///
    /// The intent reflector must stay last: it matches every intent request.
    pub fn standard(dataset: Arc<Dataset>, sites: Arc<SiteResolver>) -> Self {
        let aggregator = Aggregator::new(dataset);
        Self::builder()
            .add_request_handler(LaunchRequestHandler)
            .add_request_handler(AverageConsumptionHandler::new(
                Arc::clone(&sites),
                aggregator.clone(),
            ))
            .add_request_handler(TotalConsumptionHandler::new(sites, aggregator))
            .add_request_handler(HelpIntentHandler)
            .add_request_handler(CancelOrStopIntentHandler)
            .add_request_handler(FallbackIntentHandler)
            .add_request_handler(SessionEndedRequestHandler)
            .add_request_handler(IntentReflectorHandler)
            .add_exception_handler(CatchAllExceptionHandler)
            .build()
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.router.handler_names()
    }

    /// Handle one request. Never fails.
    pub fn invoke(&self, request: &IntentRequest) -> SpokenResponse {
        info!(
            request_type = %request.request_type(),
            intent = request.intent_name().unwrap_or(""),
            "Handling request"
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.router.dispatch(request)))
            .unwrap_or_else(|payload| Err(SkillError::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(response) => response,
            Err(error) => self.recover(request, &error),
        }
    }

    fn recover(&self, request: &IntentRequest, error: &SkillError) -> SpokenResponse {
        if let Some(handler) = self
            .exception_handlers
            .iter()
            .find(|h| h.can_handle(request, error))
        {
            return handler.handle(request, error);
        }
        warn!(error = %error, "No exception handler accepted the error; using catch-all");
        CatchAllExceptionHandler.handle(request, error)
    }
}
