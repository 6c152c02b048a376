use talent_scout::cli::{Command, Opts};
use talent_scout::commands::{navigation, postings};
use talent_scout::error::TalentScoutError;
use talent_scout::logger::{initialize as LoggerInitialize, level_for_verbosity};

use client_core::config::load_dotenv;
use client_core::error::CoreError;
use client_core::job_posting_client::JobPostingRequest;
use client_core::navigation::HistoryNavigator;
use client_core::session::FileStore;
use client_core::{JobPostingClient, Route, SessionContext};

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let opts = Opts::parse();

    if let Err(e) = LoggerInitialize(opts.log_dir.as_deref(), level_for_verbosity(opts.verbose)) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(opts).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            match &e {
                TalentScoutError::Service { message, .. } => eprintln!("{message}"),
                other => eprintln!("{other}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(opts: Opts) -> Result<String, TalentScoutError> {
    match opts.command.clone() {
        Command::Generate {
            job_title,
            career_level,
            location,
            department,
            key_skills,
        } => {
            let mut request = JobPostingRequest::new(job_title, career_level, location, department);
            request.key_skills = key_skills;
            let response = postings::generate(&build_client(&opts)?, request).await?;
            pretty(&response)
        }
        Command::Approve {
            natural_posting,
            structured_data,
            original_input,
        } => {
            let client = build_client(&opts)?;
            let response =
                postings::approve(&client, natural_posting, structured_data, &original_input)
                    .await?;
            pretty(&response)
        }
        Command::List => pretty(&postings::list(&build_client(&opts)?).await?),
        Command::Health => Ok(postings::health(&build_client(&opts)?).await.to_string()),
        Command::Nav { path, json } => {
            if json {
                navigation::nav_json(&path)
            } else {
                Ok(navigation::render_nav(&path))
            }
        }
        Command::Login => {
            let mut navigator = HistoryNavigator::default();
            navigation::login(&session_for(&opts), &mut navigator)?;
            Ok(landed_on(&navigator))
        }
        Command::Logout => {
            let mut navigator = HistoryNavigator::default();
            navigation::logout(&session_for(&opts), &mut navigator);
            Ok(landed_on(&navigator))
        }
    }
}

/// Config is resolved once here (`.env`, then the environment, then `--base-url`)
/// and passed into the client.
fn build_client(opts: &Opts) -> Result<JobPostingClient, TalentScoutError> {
    load_dotenv();
    let config = opts
        .client_config(|key| env::var(key))
        .map_err(|e| TalentScoutError::from(CoreError::from(e)))?;

    info!("Using API base URL {}", config.base_url());

    JobPostingClient::new(&config).map_err(|e| TalentScoutError::from(CoreError::from(e)))
}

fn session_for(opts: &Opts) -> SessionContext {
    let path = opts.session_path();
    info!("Session file: {}", path.display());
    SessionContext::new(Arc::new(FileStore::new(path)))
}

fn landed_on(navigator: &HistoryNavigator) -> String {
    navigator.current().unwrap_or(Route::Home).path().to_string()
}

fn pretty(value: &Value) -> Result<String, TalentScoutError> {
    serde_json::to_string_pretty(value).map_err(|e| TalentScoutError::App {
        message: format!("Failed to format response: {e}"),
        location: common::ErrorLocation::caller(),
    })
}
