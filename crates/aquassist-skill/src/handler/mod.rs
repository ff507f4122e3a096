//! Request handler trait and the built-in handler set.
//!
//! Each handler is a predicate (`matches`) plus an action (`handle`). The
//! router asks them in order and runs the first one that matches.

use aquassist_core::{IntentRequest, SpokenResponse};

use crate::error::SkillError;

pub mod cancel_stop;
pub mod consumption;
pub mod fallback;
pub mod help;
pub mod launch;
pub mod reflector;
pub mod session_ended;

pub use cancel_stop::CancelOrStopIntentHandler;
pub use consumption::{AverageConsumptionHandler, TotalConsumptionHandler};
pub use fallback::FallbackIntentHandler;
pub use help::HelpIntentHandler;
pub use launch::LaunchRequestHandler;
pub use reflector::IntentReflectorHandler;
pub use session_ended::SessionEndedRequestHandler;

/// A single entry in the request handler chain.
pub trait RequestHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this handler serves `request`.
    fn matches(&self, request: &IntentRequest) -> bool;

    /// Produce the response. Only called after `matches` returned true.
    fn handle(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError>;
}
