//! Environment-driven configuration. Serial because it mutates process env.

use std::time::Duration;

use coinlens::cli::{parse_args, CliCommand};
use coinlens::config::{AppConfig, ENV_API_URL, ENV_LIGHT, ENV_LOG_DIR, ENV_REFRESH_MS};
use serial_test::serial;

fn clear_env() {
    for key in [ENV_API_URL, ENV_REFRESH_MS, ENV_LOG_DIR, ENV_LIGHT] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    std::env::set_var(ENV_API_URL, "http://localhost:9000/v1/");
    std::env::set_var(ENV_REFRESH_MS, "250");
    std::env::set_var(ENV_LIGHT, "yes");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.refresh_interval, Duration::from_millis(250));
    assert!(config.light_theme);
}

#[test]
#[serial]
fn test_from_env_rejects_bad_refresh() {
    clear_env();
    std::env::set_var(ENV_REFRESH_MS, "soon");
    let result = AppConfig::from_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_log_dir_override() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(ENV_LOG_DIR, dir.path());
    let config = AppConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.resolved_log_dir(), dir.path());
}

#[test]
#[serial]
fn test_flags_override_env() {
    clear_env();
    std::env::set_var(ENV_API_URL, "http://env.test/v1");

    let args = ["coinlens", "--api-url", "https://flag.test/v1", "--light", "eth-ethereum"];
    let options = match parse_args(args.iter().map(|s| s.to_string())) {
        CliCommand::RunTui(options) => options,
        other => panic!("expected RunTui, got {:?}", other),
    };
    let config = options.apply(AppConfig::from_env().unwrap());
    clear_env();

    assert_eq!(config.api_url, "https://flag.test/v1");
    assert!(config.light_theme);
    assert_eq!(config.start_path, "/eth-ethereum");
}
