//! Voice-platform request and response envelopes.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! platform JSON is ignored on input and omitted on output.

use std::collections::BTreeMap;

use aquassist_core::{IntentRequest, RequestType, SpokenResponse};
use aquassist_skill::Skill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENVELOPE_VERSION: &str = "1.0";

// =============================================================================
// Request side
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: RequestBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentBody>,
    /// Why the session ended; only on `SessionEndedRequest`.
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentBody {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotBody {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    /// Application id, preferring the context over the session copy.
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.application.as_ref())
            .or_else(|| self.session.as_ref().and_then(|s| s.application.as_ref()))
            .map(|a| a.application_id.as_str())
    }

    /// The platform-neutral request the skill dispatches on.
    pub fn to_intent_request(&self) -> IntentRequest {
        let request_type: RequestType = self
            .request
            .request_type
            .parse()
            .unwrap_or_else(|never| match never {});
        let mut request = match (&request_type, &self.request.intent) {
            (RequestType::Intent, Some(intent)) => IntentRequest::intent(intent.name.clone()),
            (RequestType::Intent, None) => IntentRequest::other("IntentRequest"),
            (RequestType::Launch, _) => IntentRequest::launch(),
            (RequestType::SessionEnded, _) => IntentRequest::session_ended(),
            (RequestType::Other(name), _) => IntentRequest::other(name.clone()),
        };
        if let (RequestType::Intent, Some(intent)) = (&request_type, &self.request.intent) {
            for slot in intent.slots.values() {
                request = match &slot.value {
                    Some(value) => request.with_slot(slot.name.clone(), value.clone()),
                    None => request.with_empty_slot(slot.name.clone()),
                };
            }
        }
        request
    }
}

// =============================================================================
// Response side
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default)]
    pub session_attributes: serde_json::Map<String, serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

impl From<&SpokenResponse> for ResponseEnvelope {
    fn from(resp: &SpokenResponse) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            session_attributes: serde_json::Map::new(),
            response: ResponseBody {
                output_speech: resp.speech().map(OutputSpeech::ssml),
                reprompt: resp.reprompt().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: resp.should_end_session(),
            },
        }
    }
}

/// Escape text for embedding inside an SSML `<speak>` element.
pub fn escape_ssml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Run one envelope through the skill.
pub fn respond(skill: &Skill, envelope: &RequestEnvelope) -> ResponseEnvelope {
    let request = envelope.to_intent_request();
    ResponseEnvelope::from(&skill.invoke(&request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn intent_envelope(intent: serde_json::Value) -> RequestEnvelope {
        serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.1",
                "application": { "applicationId": "amzn1.ask.skill.session" }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2024-03-01T10:15:00Z",
                "locale": "en-US",
                "intent": intent
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_intent_request_with_slots() {
        let envelope = intent_envelope(json!({
            "name": "GetTotalConsumptionIntentHandler",
            "confirmationStatus": "NONE",
            "slots": {
                "site": { "name": "site", "value": "Scale Pit", "confirmationStatus": "NONE" }
            }
        }));
        let req = envelope.to_intent_request();
        assert_eq!(req.request_type(), &RequestType::Intent);
        assert_eq!(req.intent_name(), Some("GetTotalConsumptionIntentHandler"));
        assert_eq!(req.slot_value("site"), Some("Scale Pit"));
        assert_eq!(
            envelope.request.timestamp.map(|t| t.to_rfc3339()),
            Some("2024-03-01T10:15:00+00:00".to_string())
        );
    }

    #[test]
    fn test_unfilled_slot_is_kept() {
        let envelope = intent_envelope(json!({
            "name": "GetAverageConsumptionIntentHandler",
            "slots": { "site": { "name": "site" } }
        }));
        let req = envelope.to_intent_request();
        assert!(req.slot("site").is_some());
        assert!(req.slot_value("site").is_none());
    }

    #[test]
    fn test_launch_and_session_ended() {
        let launch: RequestEnvelope =
            serde_json::from_value(json!({ "request": { "type": "LaunchRequest" } })).unwrap();
        assert_eq!(launch.to_intent_request(), IntentRequest::launch());

        let ended: RequestEnvelope = serde_json::from_value(json!({
            "request": { "type": "SessionEndedRequest", "reason": "USER_INITIATED" }
        }))
        .unwrap();
        assert_eq!(ended.to_intent_request(), IntentRequest::session_ended());
        assert_eq!(ended.request.reason.as_deref(), Some("USER_INITIATED"));
    }

    #[test]
    fn test_intent_request_without_intent_is_unmodelled() {
        let envelope: RequestEnvelope =
            serde_json::from_value(json!({ "request": { "type": "IntentRequest" } })).unwrap();
        let req = envelope.to_intent_request();
        assert!(req.intent_name().is_none());
        assert_ne!(req.request_type(), &RequestType::Intent);
    }

    #[test]
    fn test_application_id_prefers_context() {
        let mut envelope = intent_envelope(json!({ "name": "AMAZON.HelpIntent" }));
        assert_eq!(envelope.application_id(), Some("amzn1.ask.skill.session"));

        envelope.context = Some(Context {
            system: Some(SystemContext {
                application: Some(Application {
                    application_id: "amzn1.ask.skill.context".to_string(),
                }),
            }),
        });
        assert_eq!(envelope.application_id(), Some("amzn1.ask.skill.context"));
    }

    #[test]
    fn test_response_envelope_open_session() {
        let resp = SpokenResponse::builder()
            .speech("Welcome!")
            .reprompt("Still there?")
            .build();
        let value = serde_json::to_value(ResponseEnvelope::from(&resp)).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "response": {
                    "outputSpeech": { "type": "SSML", "ssml": "<speak>Welcome!</speak>" },
                    "reprompt": {
                        "outputSpeech": { "type": "SSML", "ssml": "<speak>Still there?</speak>" }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn test_silent_response_omits_speech() {
        let resp = SpokenResponse::builder().build();
        let value = serde_json::to_value(ResponseEnvelope::from(&resp)).unwrap();
        assert!(value["response"].get("outputSpeech").is_none());
        assert!(value["response"].get("reprompt").is_none());
        assert_eq!(value["response"]["shouldEndSession"], json!(true));
    }

    #[test]
    fn test_escape_ssml() {
        assert_eq!(
            escape_ssml("I couldn't find the site <b>&co."),
            "I couldn't find the site &lt;b&gt;&amp;co."
        );
        assert_eq!(escape_ssml("plain"), "plain");
    }
}
