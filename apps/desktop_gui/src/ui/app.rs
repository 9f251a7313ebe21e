use chrono::Datelike;
use eframe::egui;
use shared::domain::View;
use site_core::{LogOnlyMailHandler, MailHandler, MailtoLink, SiteController};

use crate::config::StartupConfig;
use crate::controller::events::{SiteAction, StatusBanner, StatusBannerSeverity};
use crate::controller::orchestration::dispatch_site_actions;
use crate::ui::{
    panels,
    theme::{
        scaled_text_styles, text_scale_range, visuals_for, DisplaySettings,
        PersistedDisplaySettings, ThemePreset, SETTINGS_STORAGE_KEY,
    },
    widgets::{primary_button, secondary_button},
};

const CONTENT_MAX_WIDTH: f32 = 1100.0;

pub struct SiteApp {
    site: SiteController,
    mail_client_enabled: bool,
    status_banner: Option<StatusBanner>,

    settings: DisplaySettings,
    applied_settings: Option<DisplaySettings>,
    settings_open: bool,

    copyright_year: i32,
}

impl SiteApp {
    pub fn new(
        startup: &StartupConfig,
        persisted_settings: Option<PersistedDisplaySettings>,
        startup_error: Option<String>,
    ) -> Self {
        Self {
            site: SiteController::new(startup.start_view, startup.service),
            mail_client_enabled: startup.mail_client,
            status_banner: startup_error.map(|err| {
                StatusBanner::error(format!("Configuration ignored, using defaults: {err}"))
            }),
            settings: persisted_settings.unwrap_or_default().into_runtime(),
            applied_settings: None,
            settings_open: false,
            copyright_year: chrono::Local::now().year(),
        }
    }

    fn apply_settings_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_settings == Some(self.settings) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for(self.settings);
        style.text_styles = scaled_text_styles(self.settings.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        ctx.set_style(style);
        self.applied_settings = Some(self.settings);
    }

    fn show_header(&mut self, ctx: &egui::Context, actions: &mut Vec<SiteAction>) {
        egui::TopBottomPanel::top("site_header")
            .exact_height(72.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new("Quadrelliot").strong().size(20.0));
                        ui.weak("Precision Drone Operations · UK");
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("⚙").on_hover_text("Display settings").clicked() {
                            self.settings_open = !self.settings_open;
                        }
                        // right_to_left: add in reverse so the buttons read left to right.
                        if primary_button(ui, View::Contact.nav_label(), true).clicked() {
                            actions.push(SiteAction::Navigate(View::Contact));
                        }
                        for view in [View::Compliance, View::Services, View::Home] {
                            if secondary_button(ui, view.nav_label()).clicked() {
                                actions.push(SiteAction::Navigate(view));
                            }
                        }
                    });
                });
            });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("site_footer").show(ctx, |ui| {
            panels::show_footer(ui, self.copyright_year);
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let (fill, stroke) = match banner.severity {
            StatusBannerSeverity::Info => (
                egui::Color32::from_rgb(32, 48, 40),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(84, 140, 110)),
            ),
            StatusBannerSeverity::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        ui.add_space(12.0);
        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Display settings")
            .open(&mut settings_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.settings.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in [ThemePreset::Dark, ThemePreset::Light] {
                            ui.selectable_value(&mut self.settings.preset, preset, preset.label());
                        }
                    });
                ui.add(
                    egui::Slider::new(&mut self.settings.text_scale, text_scale_range())
                        .text("Text scale")
                        .step_by(0.05),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.settings = DisplaySettings::default();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_content(&mut self, ctx: &egui::Context, actions: &mut Vec<SiteAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            self.show_status_banner(ui);
                            match self.site.view() {
                                View::Home => panels::show_home(ui, actions),
                                View::Services => {
                                    panels::show_services(ui, self.site.selected_service(), actions)
                                }
                                View::Compliance => panels::show_compliance(ui),
                                View::Contact => panels::show_contact(ui, self.site.draft(), actions),
                            }
                            ui.add_space(24.0);
                        });
                    });
                });
        });
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_settings_if_needed(ctx);

        let mut actions = Vec::new();
        self.show_header(ctx, &mut actions);
        self.show_footer(ctx);
        self.show_content(ctx, &mut actions);
        self.show_settings_window(ctx);

        if actions.is_empty() {
            return;
        }

        let mail_ctx = ctx.clone();
        let open_in_mail_client = move |link: &MailtoLink| {
            mail_ctx.open_url(egui::OpenUrl::same_tab(link.to_uri()));
        };
        let mail: &dyn MailHandler = if self.mail_client_enabled {
            &open_in_mail_client
        } else {
            &LogOnlyMailHandler
        };
        dispatch_site_actions(&mut self.site, actions, mail, &mut self.status_banner);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDisplaySettings::from_runtime(self.settings);
        match serde_json::to_string(&settings) {
            Ok(serialized) => storage.set_string(SETTINGS_STORAGE_KEY, serialized),
            Err(err) => tracing::warn!(error = %err, "failed to persist display settings"),
        }
    }
}
