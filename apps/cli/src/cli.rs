use client_core::ClientConfig;
use client_core::config::API_BASE_URL_ENV;
use client_core::error::config::ConfigError;

use std::env::VarError;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Session file name inside the application data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

const APP_DIR_NAME: &str = "talent-scout";

#[derive(Parser, Debug, Clone)]
#[command(name = "talent-scout", version, about = "Talent Scout job-posting client", long_about = None)]
pub struct Opts {
    /// Base address of the job-posting service [default: $API_BASE_URL, else http://localhost:8000]
    #[arg(global = true, long)]
    pub base_url: Option<String>,

    /// File holding the persisted session flag
    #[arg(global = true, long, env = "TALENT_SCOUT_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Directory to also write talent-scout.log into
    #[arg(global = true, long)]
    pub log_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Draft a job posting from its attributes
    Generate {
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        career_level: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        department: String,
        /// Comma-separated skills
        #[arg(long)]
        key_skills: Option<String>,
    },

    /// Persist a reviewed posting
    Approve {
        #[arg(long)]
        natural_posting: String,
        /// Structured posting data, itself a JSON document
        #[arg(long)]
        structured_data: String,
        /// JSON object the draft was generated from
        #[arg(long)]
        original_input: String,
    },

    /// List stored postings
    List,

    /// Probe the service's health endpoint
    Health,

    /// Show the navigation bar for a path
    Nav {
        #[arg(long, default_value = "/")]
        path: String,
        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the persisted authentication flag
    Login,

    /// Clear the persisted authentication flag and go to the login route
    Logout,
}

impl Opts {
    /// Explicit `--session-file`, else `<data_local_dir>/talent-scout/session.json`,
    /// else `./session.json`.
    pub fn session_path(&self) -> PathBuf {
        if let Some(path) = &self.session_file {
            return path.clone();
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME))
    }

    /// Resolve the client config. `--base-url` takes the place of
    /// `API_BASE_URL`; either way an empty value selects the default.
    pub fn client_config<F>(&self, lookup: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match &self.base_url {
            Some(base_url) => ClientConfig::from_lookup(|key| {
                if key == API_BASE_URL_ENV {
                    Ok(base_url.clone())
                } else {
                    lookup(key)
                }
            }),
            None => ClientConfig::from_lookup(lookup),
        }
    }
}
