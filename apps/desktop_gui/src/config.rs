//! Startup configuration: defaults, then config file, then environment, then CLI flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use shared::domain::{ServiceId, View};

const ENV_START_VIEW: &str = "QUADRELLIOT_START_VIEW";
const ENV_SERVICE: &str = "QUADRELLIOT_SERVICE";
const ENV_LOG: &str = "QUADRELLIOT_LOG";
const ENV_MAIL_CLIENT: &str = "QUADRELLIOT_MAIL_CLIENT";

#[derive(Parser, Debug, Default)]
#[command(name = "quadrelliot", about = "Quadrelliot precision drone operations")]
pub struct CliArgs {
    /// Config file to load instead of the per-user default.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// View shown on launch: home, services, compliance or contact.
    #[arg(long)]
    pub start_view: Option<View>,
    /// Service highlighted on the services view.
    #[arg(long)]
    pub service: Option<ServiceId>,
    /// tracing filter directive, e.g. `info` or `site_core=debug`.
    #[arg(long)]
    pub log_filter: Option<String>,
    /// Log generated enquiry links instead of opening the mail client.
    #[arg(long)]
    pub no_mail_client: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub start_view: View,
    pub service: ServiceId,
    pub log_filter: String,
    pub mail_client: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            start_view: View::Home,
            service: ServiceId::Inspection,
            log_filter: "info".to_string(),
            mail_client: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    start_view: Option<String>,
    service: Option<String>,
    log_filter: Option<String>,
    mail_client: Option<bool>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quadrelliot").join("desktop.toml"))
}

pub fn load_startup_config(args: &CliArgs) -> Result<StartupConfig> {
    resolve_startup_config(args, default_config_path().as_deref(), |name| {
        std::env::var(name).ok()
    })
}

/// Layers every source over the defaults.
///
/// An explicit `--config` path must exist; the per-user default file is optional.
pub fn resolve_startup_config(
    args: &CliArgs,
    default_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<StartupConfig> {
    let mut config = StartupConfig::default();

    let file_cfg = match (&args.config, default_path) {
        (Some(path), _) => Some(read_config_file(path)?),
        (None, Some(path)) if path.exists() => Some(read_config_file(path)?),
        _ => None,
    };

    if let Some((path, file_cfg)) = file_cfg {
        let source = path.display().to_string();
        if let Some(v) = file_cfg.start_view {
            config.start_view = parse_key(&v, &source)?;
        }
        if let Some(v) = file_cfg.service {
            config.service = parse_key(&v, &source)?;
        }
        if let Some(v) = file_cfg.log_filter {
            config.log_filter = v;
        }
        if let Some(v) = file_cfg.mail_client {
            config.mail_client = v;
        }
    }

    if let Some(v) = read_non_empty(&env, ENV_START_VIEW) {
        config.start_view = parse_key(&v, ENV_START_VIEW)?;
    }
    if let Some(v) = read_non_empty(&env, ENV_SERVICE) {
        config.service = parse_key(&v, ENV_SERVICE)?;
    }
    if let Some(v) = read_non_empty(&env, ENV_LOG) {
        config.log_filter = v;
    }
    if let Some(v) = read_non_empty(&env, ENV_MAIL_CLIENT) {
        config.mail_client =
            parse_bool(&v).with_context(|| format!("invalid {ENV_MAIL_CLIENT}"))?;
    }

    if let Some(view) = args.start_view {
        config.start_view = view;
    }
    if let Some(service) = args.service {
        config.service = service;
    }
    if let Some(filter) = &args.log_filter {
        config.log_filter = filter.clone();
    }
    if args.no_mail_client {
        config.mail_client = false;
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<(PathBuf, FileConfig)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let parsed = toml::from_str::<FileConfig>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok((path.to_path_buf(), parsed))
}

fn read_non_empty(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    env(name).filter(|value| !value.trim().is_empty())
}

fn parse_key<T>(raw: &str, source: &str) -> Result<T>
where
    T: std::str::FromStr<Err = shared::error::DomainError>,
{
    raw.parse::<T>()
        .with_context(|| format!("invalid value in {source}"))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true or false, got '{other}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
