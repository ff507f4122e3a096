//! Inbound request model.
//!
//! An `IntentRequest` is the platform-neutral view of one invocation: the
//! request type, the intent name (intent requests only) and the slot values
//! the NLU layer already extracted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Request type tag as sent by the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    /// The user opened the skill without asking anything.
    Launch,
    /// The user asked for a specific intent.
    Intent,
    /// The platform closed the session.
    SessionEnded,
    /// Any request type the skill does not model.
    Other(String),
}

impl RequestType {
    /// Wire name of the request type.
    pub fn as_str(&self) -> &str {
        match self {
            RequestType::Launch => "LaunchRequest",
            RequestType::Intent => "IntentRequest",
            RequestType::SessionEnded => "SessionEndedRequest",
            RequestType::Other(name) => name,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "LaunchRequest" => RequestType::Launch,
            "IntentRequest" => RequestType::Intent,
            "SessionEndedRequest" => RequestType::SessionEnded,
            other => RequestType::Other(other.to_string()),
        })
    }
}

/// A named slot and its resolved value, if the user supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub value: Option<String>,
}

/// One inbound invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRequest {
    request_type: RequestType,
    intent_name: Option<String>,
    slots: BTreeMap<String, Slot>,
}

impl IntentRequest {
    /// A `LaunchRequest`.
    pub fn launch() -> Self {
        Self {
            request_type: RequestType::Launch,
            intent_name: None,
            slots: BTreeMap::new(),
        }
    }

    /// A `SessionEndedRequest`.
    pub fn session_ended() -> Self {
        Self {
            request_type: RequestType::SessionEnded,
            intent_name: None,
            slots: BTreeMap::new(),
        }
    }

    /// An `IntentRequest` for the named intent with no slots.
    pub fn intent(name: impl Into<String>) -> Self {
        Self {
            request_type: RequestType::Intent,
            intent_name: Some(name.into()),
            slots: BTreeMap::new(),
        }
    }

    /// A request of a type the skill does not model.
    pub fn other(request_type: impl Into<String>) -> Self {
        Self {
            request_type: RequestType::Other(request_type.into()),
            intent_name: None,
            slots: BTreeMap::new(),
        }
    }

    /// Attach a filled slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.slots.insert(
            name.clone(),
            Slot {
                name,
                value: Some(value.into()),
            },
        );
        self
    }

    /// Attach a slot entry the user left unfilled.
    pub fn with_empty_slot(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.slots.insert(name.clone(), Slot { name, value: None });
        self
    }

    pub fn request_type(&self) -> &RequestType {
        &self.request_type
    }

    /// Intent name; only present for intent requests.
    pub fn intent_name(&self) -> Option<&str> {
        self.intent_name.as_deref()
    }

    pub fn slots(&self) -> &BTreeMap<String, Slot> {
        &self.slots
    }

    /// The slot entry by name, whether or not it carries a value.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    /// The slot value by name, `None` when missing or unfilled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|s| s.value.as_deref())
    }

    pub fn is_request_type(&self, request_type: &RequestType) -> bool {
        &self.request_type == request_type
    }

    /// True when this is an intent request for exactly `name`.
    pub fn is_intent_name(&self, name: &str) -> bool {
        self.request_type == RequestType::Intent && self.intent_name.as_deref() == Some(name)
    }
}
