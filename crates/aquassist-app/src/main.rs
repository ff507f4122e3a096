//! AquaAssist application binary - composition root.
//!
//! 1. Parse the command line and load configuration from TOML
//! 2. Initialize tracing
//! 3. Load the consumption dataset and build the skill
//! 4. Run the chosen subcommand (HTTP endpoint, one-shot envelope, question)

mod cli;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use uuid::Uuid;

use aquassist_api::envelope::{
    self, Application, IntentBody, RequestBody, RequestEnvelope, Session, SlotBody,
    ENVELOPE_VERSION,
};
use aquassist_api::routes;
use aquassist_api::state::AppState;
use aquassist_core::{AquaConfig, Dataset};
use aquassist_skill::handler::consumption::SITE_SLOT;
use aquassist_skill::{SiteResolver, Skill};

use cli::{CliArgs, Command};

const LAUNCH_SHORTHAND: &str = "launch";
const CLI_APPLICATION_ID: &str = "aquassist.cli";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so its log level can apply;
    // a load failure is reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let loaded = AquaConfig::load(&config_file);
    let config_level = loaded
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(args.resolve_log_level(&config_level))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting AquaAssist v{}", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_file.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = %config_file.display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            AquaConfig::default()
        }
    };

    let dataset_path = args.resolve_dataset_path(&config.dataset.path);

    match args.command {
        Command::Sites => {
            print_sites(&config);
            Ok(())
        }
        Command::Serve { host, port } => {
            let (skill, records) = build_skill(&config, &dataset_path);
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let mut state = AppState::new(skill, records, config.sites.len());
            if let Some(ref id) = config.skill.application_id {
                state = state.with_application_id(id.clone());
            }
            routes::start_server(&server, state).await?;
            Ok(())
        }
        Command::Invoke { file } => {
            let (skill, _) = build_skill(&config, &dataset_path);
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let request: RequestEnvelope = serde_json::from_str(&raw)?;
            let response = envelope::respond(&skill, &request);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::Ask { intent, site } => {
            let (skill, _) = build_skill(&config, &dataset_path);
            let request = synthetic_envelope(&intent, site.as_deref());
            let response = skill.invoke(&request.to_intent_request());
            match response.speech() {
                Some(speech) => println!("{}", speech),
                None => println!("(no speech)"),
            }
            if let Some(reprompt) = response.reprompt() {
                println!("[reprompt] {}", reprompt);
            }
            Ok(())
        }
    }
}

/// Load the dataset and assemble the standard skill over it.
///
/// A missing or unreadable dataset leaves the skill running with no data.
fn build_skill(config: &AquaConfig, dataset_path: &Path) -> (Skill, usize) {
    let dataset = Dataset::load_or_empty(dataset_path);
    let records = dataset.len();
    let sites = SiteResolver::new(&config.sites);
    tracing::info!(
        records,
        sites = sites.len(),
        path = %dataset_path.display(),
        "Skill ready"
    );
    (Skill::standard(Arc::new(dataset), Arc::new(sites)), records)
}

fn print_sites(config: &AquaConfig) {
    for line in site_listing(&SiteResolver::new(&config.sites)) {
        println!("{}", line);
    }
}

/// One aligned `name  key` line per site, using the names `resolve` matches.
fn site_listing(sites: &SiteResolver) -> Vec<String> {
    let width = sites.names().map(str::len).max().unwrap_or(0);
    sites
        .names()
        .filter_map(|name| {
            sites
                .resolve(name)
                .map(|key| format!("{:<width$}  {}", name, key, width = width))
        })
        .collect()
}

/// Platform envelope for a single question typed at the command line.
fn synthetic_envelope(intent: &str, site: Option<&str>) -> RequestEnvelope {
    let (request_type, intent_body) = if intent.eq_ignore_ascii_case(LAUNCH_SHORTHAND) {
        ("LaunchRequest", None)
    } else {
        let slots = site
            .map(|value| {
                (
                    SITE_SLOT.to_string(),
                    SlotBody {
                        name: SITE_SLOT.to_string(),
                        value: Some(value.to_string()),
                    },
                )
            })
            .into_iter()
            .collect();
        (
            "IntentRequest",
            Some(IntentBody {
                name: intent.to_string(),
                slots,
            }),
        )
    };

    RequestEnvelope {
        version: ENVELOPE_VERSION.to_string(),
        session: Some(Session {
            new: true,
            session_id: format!("aquassist.session.{}", Uuid::new_v4()),
            application: Some(Application {
                application_id: CLI_APPLICATION_ID.to_string(),
            }),
        }),
        context: None,
        request: RequestBody {
            request_type: request_type.to_string(),
            request_id: format!("aquassist.request.{}", Uuid::new_v4()),
            timestamp: Some(Utc::now()),
            locale: Some("en-US".to_string()),
            intent: intent_body,
            reason: None,
        },
    }
}
