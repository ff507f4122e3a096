//! Outbound response model and its builder.
//!
//! Session state is never set directly: a response keeps the session open
//! exactly when it carries a reprompt.

use serde::{Deserialize, Serialize};

/// What the skill says back for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenResponse {
    speech: Option<String>,
    reprompt: Option<String>,
    should_end_session: bool,
}

impl SpokenResponse {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Speech text; `None` for silent responses such as session-ended.
    pub fn speech(&self) -> Option<&str> {
        self.speech.as_deref()
    }

    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    /// True when the platform should close the session after this turn.
    pub fn should_end_session(&self) -> bool {
        self.should_end_session
    }

    pub fn keeps_session_open(&self) -> bool {
        !self.should_end_session
    }
}

/// Builder for [`SpokenResponse`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speech(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    /// Set the reprompt; this also keeps the session open.
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn build(self) -> SpokenResponse {
        let should_end_session = self.reprompt.is_none();
        SpokenResponse {
            speech: self.speech,
            reprompt: self.reprompt,
            should_end_session,
        }
    }
}
