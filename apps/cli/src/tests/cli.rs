// Unit tests for argument parsing

use crate::cli::{Command, Opts};

use client_core::DEFAULT_API_BASE_URL;
use client_core::config::API_BASE_URL_ENV;

use std::env::VarError;
use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_generate_args_when_parsed_then_key_skills_is_optional() {
    let opts = Opts::try_parse_from([
        "talent-scout",
        "generate",
        "--job-title",
        "Data Engineer",
        "--career-level",
        "Senior",
        "--location",
        "Cairo",
        "--department",
        "Engineering",
    ])
    .unwrap();

    match opts.command {
        Command::Generate {
            job_title,
            key_skills,
            ..
        } => {
            assert_eq!(job_title, "Data Engineer");
            assert_eq!(key_skills, None);
        }
        other => panic!("expected Generate, got {other:?}"),
    }
}

#[test]
fn given_generate_without_required_field_when_parsed_then_fails() {
    let result = Opts::try_parse_from(["talent-scout", "generate", "--job-title", "x"]);

    assert!(result.is_err());
}

#[test]
fn given_explicit_session_file_when_resolving_path_then_uses_it() {
    let opts = Opts::try_parse_from([
        "talent-scout",
        "logout",
        "--session-file",
        "/tmp/ts-session.json",
    ])
    .unwrap();

    assert_eq!(opts.session_path(), PathBuf::from("/tmp/ts-session.json"));
}

#[test]
fn given_nav_without_path_when_parsed_then_defaults_to_root() {
    let opts = Opts::try_parse_from(["talent-scout", "nav"]).unwrap();

    assert!(matches!(opts.command, Command::Nav { ref path, json: false } if path == "/"));
}

fn env_with_base_url(value: &'static str) -> impl Fn(&str) -> Result<String, VarError> {
    move |key: &str| {
        if key == API_BASE_URL_ENV {
            Ok(value.to_string())
        } else {
            Err(VarError::NotPresent)
        }
    }
}

/// **VALUE**: Verifies an empty `API_BASE_URL` falls back to the local default.
///
/// **WHY THIS MATTERS**: Shells and `.env` templates often export the variable
/// empty. The binary must behave like the library and use
/// `http://localhost:8000` rather than refusing to start.
///
/// **BUG THIS CATCHES**: Would catch the CLI reading the variable itself and
/// validating the raw value, bypassing the default rule.
#[test]
fn given_empty_base_url_variable_when_resolving_config_then_uses_default() {
    // GIVEN: No --base-url flag, and an empty API_BASE_URL
    let opts = Opts::try_parse_from(["talent-scout", "health"]).unwrap();

    // WHEN: Resolving the client config
    let config = opts.client_config(env_with_base_url("")).unwrap();

    // THEN: Default base URL
    assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn given_padded_base_url_variable_when_resolving_config_then_value_is_trimmed() {
    let opts = Opts::try_parse_from(["talent-scout", "list"]).unwrap();

    let config = opts
        .client_config(env_with_base_url(" http://localhost:1 "))
        .unwrap();

    assert_eq!(config.base_url(), "http://localhost:1");
}

#[test]
fn given_base_url_flag_when_resolving_config_then_flag_overrides_variable() {
    let opts = Opts::try_parse_from([
        "talent-scout",
        "list",
        "--base-url",
        "https://jobs.example.com",
    ])
    .unwrap();

    let config = opts
        .client_config(env_with_base_url("http://ignored:9"))
        .unwrap();

    assert_eq!(config.base_url(), "https://jobs.example.com");
}

#[test]
fn given_empty_base_url_flag_when_resolving_config_then_uses_default() {
    let opts = Opts::try_parse_from(["talent-scout", "list", "--base-url", ""]).unwrap();

    let config = opts.client_config(|_: &str| Err(VarError::NotPresent)).unwrap();

    assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
}
