//! Server configuration loading from file and environment.

mod support;

use std::io::Write;
use std::sync::Arc;

use axum::http::StatusCode;

use sdr_webapi::adapter::{LocalAdapter, WebApiAdapter};
use sdr_webapi::config::{ConfigError, ServerConfig, CONFIG_PATH_VAR};
use sdr_webapi::http::{create_router_with_limit, AppState};
use sdr_webapi::mapping::{MapError, SettingsMapper};
use support::{send, with_scoped_env};

const ENV_KEYS: [&str; 3] = ["HOST", "PORT", "SDR_WEBAPI_BODY_LIMIT"];

fn cleared<'a>(extra: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes: Vec<(&str, Option<&str>)> = ENV_KEYS.iter().map(|k| (*k, None)).collect();
    changes.push((CONFIG_PATH_VAR, None));
    changes.extend_from_slice(extra);
    changes
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = with_scoped_env(&cleared(&[]), ServerConfig::load).unwrap();

    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_load_file_then_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "host = \"127.0.0.1\"\nport = 9000\n\n[preset_channels]\n\"sdrangel.channel.bfm\" = \"BFMDemodSettings\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &cleared(&[(CONFIG_PATH_VAR, Some(path.as_str())), ("PORT", Some("9100"))]),
        ServerConfig::load,
    )
    .unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert_eq!(config.preset_channels.len(), 1);
}

#[test]
fn test_load_rejects_bad_values() {
    let result = with_scoped_env(&cleared(&[("SDR_WEBAPI_BODY_LIMIT", Some("lots"))]), ServerConfig::load);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnv { name: "SDR_WEBAPI_BODY_LIMIT", .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a port\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let result = with_scoped_env(&cleared(&[(CONFIG_PATH_VAR, Some(path.as_str()))]), ServerConfig::load);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_preset_table_checked_by_mapper() {
    let config = ServerConfig::from_toml_str(
        r#"
        [preset_channels]
        "sdrangel.channel.custom" = "CustomSettings"
        "#,
    )
    .unwrap();

    assert!(matches!(
        SettingsMapper::new(&config.preset_channels),
        Err(MapError::UnknownSettingsKey { .. })
    ));
}

#[tokio::test]
async fn test_body_limit_applies() {
    let adapter = Arc::new(LocalAdapter::new()) as Arc<dyn WebApiAdapter>;
    let state = AppState::new(adapter, SettingsMapper::with_defaults().unwrap());
    let app = create_router_with_limit(state, 16);

    let body = format!("{{\"latitude\": 1.0, \"longitude\": 2.0, \"pad\": \"{}\"}}", "x".repeat(64));
    let response = send(app, "PUT", "/instance/location", Some(&body)).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}
