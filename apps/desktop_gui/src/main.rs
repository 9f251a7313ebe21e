mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{CliArgs, StartupConfig};
use crate::ui::{
    theme::{PersistedDisplaySettings, SETTINGS_STORAGE_KEY},
    SiteApp,
};

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> eframe::Result<()> {
    let args = CliArgs::parse();
    let (startup, startup_error) = match config::load_startup_config(&args) {
        Ok(startup) => (startup, None),
        Err(err) => (StartupConfig::default(), Some(format!("{err:#}"))),
    };

    init_tracing(&startup.log_filter);
    if let Some(err) = &startup_error {
        tracing::warn!(error = %err, "startup configuration rejected; using defaults");
    }
    tracing::info!(
        start_view = %startup.start_view,
        service = %startup.service,
        mail_client = startup.mail_client,
        "starting Quadrelliot site"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quadrelliot · Precision Drone Operations")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([880.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quadrelliot",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedDisplaySettings::load(&text))
            });
            Ok(Box::new(SiteApp::new(
                &startup,
                persisted_settings,
                startup_error,
            )))
        }),
    )
}
