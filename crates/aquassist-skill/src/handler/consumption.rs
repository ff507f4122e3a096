//! Average and total water consumption for a named site.
//!
//! Both handlers read the `site` slot, resolve it to a metric key and
//! aggregate over the dataset. Anything that goes wrong on the way is
//! caught here and spoken as an apology, so these handlers never return
//! an error to the router.

use std::sync::Arc;

use aquassist_core::{IntentRequest, SpokenResponse};
use tracing::{error, info};

use crate::aggregate::Aggregator;
use crate::error::SkillError;
use crate::handler::RequestHandler;
use crate::sites::SiteResolver;

pub const AVERAGE_INTENT: &str = "GetAverageConsumptionIntentHandler";
pub const TOTAL_INTENT: &str = "GetTotalConsumptionIntentHandler";
pub const SITE_SLOT: &str = "site";

pub const PROCESSING_APOLOGY: &str =
    "Sorry, I had trouble processing your request. Please try again.";
pub const MISSING_SITE: &str = "I didn't catch the site name. Please provide a valid site.";

/// Outcome of reading and resolving the `site` slot.
enum SiteLookup {
    Known { site: String, key: String },
    Retry(SpokenResponse),
}

/// Shared slot handling and aggregation access for both handlers.
struct ConsumptionContext {
    sites: Arc<SiteResolver>,
    aggregator: Aggregator,
}

impl ConsumptionContext {
    fn lookup(&self, request: &IntentRequest) -> Result<SiteLookup, SkillError> {
        let slot = request
            .slot(SITE_SLOT)
            .ok_or_else(|| SkillError::MissingSlot(SITE_SLOT.to_string()))?;

        let Some(site) = slot.value.as_deref().map(str::to_lowercase) else {
            return Ok(SiteLookup::Retry(ask_again(MISSING_SITE)));
        };
        info!(site = %site, "Site requested");

        match self.sites.resolve(&site) {
            Some(key) => Ok(SiteLookup::Known {
                key: key.to_string(),
                site,
            }),
            None => {
                let prompt = format!(
                    "I couldn't find the site {}. Please provide a valid site.",
                    site
                );
                Ok(SiteLookup::Retry(ask_again(prompt)))
            }
        }
    }
}

fn ask_again(text: impl Into<String>) -> SpokenResponse {
    let text = text.into();
    SpokenResponse::builder()
        .speech(text.clone())
        .reprompt(text)
        .build()
}

fn no_data(site: &str) -> SpokenResponse {
    SpokenResponse::builder()
        .speech(format!("No data found for {}.", site))
        .build()
}

/// Turn a failed attempt into the spoken apology, logging the cause.
fn contain(handler: &'static str, outcome: Result<SpokenResponse, SkillError>) -> SpokenResponse {
    outcome.unwrap_or_else(|e| {
        error!(handler, error = %e, "Error while handling consumption request");
        ask_again(PROCESSING_APOLOGY)
    })
}

// =============================================================================
// Average
// =============================================================================

/// Handler for the average-consumption intent.
pub struct AverageConsumptionHandler {
    context: ConsumptionContext,
}

impl AverageConsumptionHandler {
    pub fn new(sites: Arc<SiteResolver>, aggregator: Aggregator) -> Self {
        Self {
            context: ConsumptionContext { sites, aggregator },
        }
    }

    fn respond(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        let (site, key) = match self.context.lookup(request)? {
            SiteLookup::Known { site, key } => (site, key),
            SiteLookup::Retry(response) => return Ok(response),
        };

        let response = match self.context.aggregator.average(&key)? {
            Some((average, _count)) => SpokenResponse::builder()
                .speech(format!(
                    "The average water consumption for {} is {:.2} units.",
                    site, average
                ))
                .build(),
            None => no_data(&site),
        };
        Ok(response)
    }
}

impl RequestHandler for AverageConsumptionHandler {
    fn name(&self) -> &'static str {
        "average_consumption"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_intent_name(AVERAGE_INTENT)
    }

    fn handle(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        Ok(contain(self.name(), self.respond(request)))
    }
}

// =============================================================================
// Total
// =============================================================================

/// Handler for the total-consumption intent.
pub struct TotalConsumptionHandler {
    context: ConsumptionContext,
}

impl TotalConsumptionHandler {
    pub fn new(sites: Arc<SiteResolver>, aggregator: Aggregator) -> Self {
        Self {
            context: ConsumptionContext { sites, aggregator },
        }
    }

    fn respond(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        let (site, key) = match self.context.lookup(request)? {
            SiteLookup::Known { site, key } => (site, key),
            SiteLookup::Retry(response) => return Ok(response),
        };

        let response = match self.context.aggregator.total(&key)? {
            Some(total) => SpokenResponse::builder()
                .speech(format!(
                    "The total water consumption for {} is {:.2} units.",
                    site, total
                ))
                .build(),
            None => no_data(&site),
        };
        Ok(response)
    }
}

impl RequestHandler for TotalConsumptionHandler {
    fn name(&self) -> &'static str {
        "total_consumption"
    }

    fn matches(&self, request: &IntentRequest) -> bool {
        request.is_intent_name(TOTAL_INTENT)
    }

    fn handle(&self, request: &IntentRequest) -> Result<SpokenResponse, SkillError> {
        Ok(contain(self.name(), self.respond(request)))
    }
}
