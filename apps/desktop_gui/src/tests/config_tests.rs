use super::{resolve_startup_config, CliArgs, StartupConfig};

use std::{collections::HashMap, fs, path::Path};

use clap::Parser;
use shared::domain::{ServiceId, View};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    env_from(&[])
}

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("desktop.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn falls_back_to_defaults_without_any_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let config =
        resolve_startup_config(&CliArgs::default(), Some(&missing), no_env()).expect("config");

    assert_eq!(config, StartupConfig::default());
    assert_eq!(config.start_view, View::Home);
    assert!(config.mail_client);
}

#[test]
fn reads_default_config_file_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        "start_view = \"services\"\nservice = \"cinematography\"\nmail_client = false\n",
    );

    let config = resolve_startup_config(&CliArgs::default(), Some(&path), no_env()).expect("config");

    assert_eq!(config.start_view, View::Services);
    assert_eq!(config.service, ServiceId::Cinematography);
    assert!(!config.mail_client);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        "start_view = \"services\"\nlog_filter = \"warn\"\n",
    );
    let env = env_from(&[
        ("QUADRELLIOT_START_VIEW", "compliance"),
        ("QUADRELLIOT_LOG", "debug"),
        ("QUADRELLIOT_SERVICE", "documentation"),
    ]);
    let args = CliArgs::parse_from(["quadrelliot", "--start-view", "contact", "--no-mail-client"]);

    let config = resolve_startup_config(&args, Some(&path), env).expect("config");

    assert_eq!(config.start_view, View::Contact);
    assert_eq!(config.service, ServiceId::Documentation);
    assert_eq!(config.log_filter, "debug");
    assert!(!config.mail_client);
}

#[test]
fn blank_env_values_are_ignored() {
    let env = env_from(&[("QUADRELLIOT_START_VIEW", "  ")]);
    let config = resolve_startup_config(&CliArgs::default(), None, env).expect("config");
    assert_eq!(config.start_view, View::Home);
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = CliArgs {
        config: Some(dir.path().join("missing.toml")),
        ..CliArgs::default()
    };

    let err = resolve_startup_config(&args, None, no_env()).expect_err("missing file");
    assert!(format!("{err:#}").contains("failed to read config file"));
}

#[test]
fn unknown_view_in_file_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "start_view = \"pricing\"\n");

    let err = resolve_startup_config(&CliArgs::default(), Some(&path), no_env())
        .expect_err("invalid view");
    let message = format!("{err:#}");

    assert!(message.contains("desktop.toml"), "{message}");
    assert!(message.contains("unknown view 'pricing'"), "{message}");
}

#[test]
fn unknown_keys_in_file_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "recipient = \"someone@example.com\"\n");

    let err = resolve_startup_config(&CliArgs::default(), Some(&path), no_env())
        .expect_err("unknown key");
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn invalid_service_in_env_names_the_variable() {
    let env = env_from(&[("QUADRELLIOT_SERVICE", "mapping")]);
    let err = resolve_startup_config(&CliArgs::default(), None, env).expect_err("invalid");
    assert!(format!("{err:#}").contains("QUADRELLIOT_SERVICE"));
}

#[test]
fn mail_client_env_accepts_common_boolean_spellings() {
    for (raw, expected) in [("off", false), ("0", false), ("YES", true), ("true", true)] {
        let env = env_from(&[("QUADRELLIOT_MAIL_CLIENT", raw)]);
        let config = resolve_startup_config(&CliArgs::default(), None, env).expect("config");
        assert_eq!(config.mail_client, expected, "{raw}");
    }

    let env = env_from(&[("QUADRELLIOT_MAIL_CLIENT", "maybe")]);
    assert!(resolve_startup_config(&CliArgs::default(), None, env).is_err());
}

#[test]
fn cli_rejects_unknown_view_keys() {
    let parsed = CliArgs::try_parse_from(["quadrelliot", "--start-view", "pricing"]);
    assert!(parsed.is_err());
}
