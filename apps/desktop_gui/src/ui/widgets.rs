//! Small reusable pieces: cards, pills, buttons and form fields.

use eframe::egui;

pub const CARD_RADIUS: u8 = 16;
const BUTTON_HEIGHT: f32 = 40.0;

pub fn card(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(CARD_RADIUS)
        .inner_margin(egui::Margin::symmetric(20, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().size(16.0));
            if !description.is_empty() {
                ui.weak(description);
            }
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(6.0);
            add_contents(ui);
        });
}

/// A bordered row inside a card.
pub fn tile(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}

pub fn pill(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(egui::CornerRadius::same(u8::MAX))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.small(text);
        });
}

pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .strong()
            .color(egui::Color32::BLACK),
    )
    .fill(egui::Color32::from_rgb(245, 245, 245))
    .corner_radius(12.0)
    .min_size(egui::vec2(0.0, BUTTON_HEIGHT));
    ui.add_enabled(enabled, button)
}

pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(text)
        .fill(egui::Color32::TRANSPARENT)
        .corner_radius(12.0)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT));
    ui.add(button)
}

/// Labelled text input. Returns the new value when the user edited it this frame.
pub fn text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    current: &str,
    multiline: bool,
) -> Option<String> {
    ui.label(egui::RichText::new(label).strong());
    let mut buffer = current.to_owned();
    let hint = egui::RichText::new(hint).color(ui.visuals().weak_text_color());
    let response = if multiline {
        ui.add(
            egui::TextEdit::multiline(&mut buffer)
                .id_salt(id)
                .hint_text(hint)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        )
    } else {
        ui.add_sized(
            [ui.available_width(), 34.0],
            egui::TextEdit::singleline(&mut buffer)
                .id_salt(id)
                .hint_text(hint),
        )
    };
    response.changed().then_some(buffer)
}
