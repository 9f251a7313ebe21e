//! Display settings, their persisted form, and the egui style derived from them.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "quadrelliot.display_settings";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    Dark,
    Light,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDisplaySettings {
    theme_preset: ThemePreset,
    text_scale: f32,
}

impl Default for PersistedDisplaySettings {
    fn default() -> Self {
        Self::from_runtime(DisplaySettings::default())
    }
}

impl PersistedDisplaySettings {
    pub fn into_runtime(self) -> DisplaySettings {
        DisplaySettings {
            preset: self.theme_preset,
            text_scale: clamp_text_scale(self.text_scale),
        }
    }

    pub fn from_runtime(settings: DisplaySettings) -> Self {
        Self {
            theme_preset: settings.preset,
            text_scale: clamp_text_scale(settings.text_scale),
        }
    }

    pub fn load(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable persisted display settings");
                None
            }
        }
    }
}

fn clamp_text_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
    } else {
        1.0
    }
}

pub fn text_scale_range() -> std::ops::RangeInclusive<f32> {
    MIN_TEXT_SCALE..=MAX_TEXT_SCALE
}

/// Near-black page with white primary actions, matching the site's brand.
pub fn visuals_for(settings: DisplaySettings) -> egui::Visuals {
    match settings.preset {
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(5, 5, 5);
            v.window_fill = egui::Color32::from_rgb(14, 14, 14);
            v.extreme_bg_color = egui::Color32::from_rgb(0, 0, 0);
            v.faint_bg_color = egui::Color32::from_rgb(22, 22, 22);
            v.selection.bg_fill = egui::Color32::from_rgb(235, 235, 235);
            v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::BLACK);
            v.window_corner_radius = egui::CornerRadius::same(16);
            v.menu_corner_radius = egui::CornerRadius::same(12);
            v
        }
        ThemePreset::Light => egui::Visuals::light(),
    }
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_settings_round_trip_through_json() {
        let settings = DisplaySettings {
            preset: ThemePreset::Light,
            text_scale: 1.2,
        };
        let json = serde_json::to_string(&PersistedDisplaySettings::from_runtime(settings))
            .expect("serialize");
        let restored = PersistedDisplaySettings::load(&json)
            .expect("load")
            .into_runtime();
        assert_eq!(restored, settings);
    }

    #[test]
    fn out_of_range_text_scale_is_clamped_on_load() {
        let restored = PersistedDisplaySettings::load(r#"{"theme_preset":"dark","text_scale":9.0}"#)
            .expect("load")
            .into_runtime();
        assert_eq!(restored.text_scale, MAX_TEXT_SCALE);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let restored = PersistedDisplaySettings::load("{}").expect("load").into_runtime();
        assert_eq!(restored, DisplaySettings::default());
    }

    #[test]
    fn unreadable_settings_are_ignored() {
        assert!(PersistedDisplaySettings::load("not json").is_none());
    }

    #[test]
    fn scaled_text_styles_multiply_every_size() {
        let base = egui::Style::default().text_styles;
        let scaled = scaled_text_styles(1.25);
        for (style, font) in scaled {
            assert_eq!(font.size, base[&style].size * 1.25);
        }
    }
}
