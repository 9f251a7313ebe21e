//! One render function per view. Panels only read state and push [`SiteAction`]s.

use eframe::egui;
use shared::{
    catalog::{DURATIONS, SERVICES},
    domain::{ServiceId, View},
};
use site_core::{EnquiryDraft, EnquiryField, ENQUIRY_RECIPIENT};

use crate::{
    controller::events::SiteAction,
    ui::widgets::{card, pill, primary_button, secondary_button, text_field, tile},
};

const HOME_CAPABILITIES: &[&str] = &[
    "Structured asset inspection & defect capture",
    "Professional aerial photo/video capture",
    "Audit-friendly reporting and file delivery",
];

const TRUST_PILLS: &[&str] = &["Licensed", "Insured", "Method Statement Included"];

struct CompliancePanel {
    title: &'static str,
    description: &'static str,
    items: &'static [&'static str],
}

const COMPLIANCE_PANELS: &[CompliancePanel] = &[
    CompliancePanel {
        title: "Regulatory",
        description: "CAA-compliant operation as standard.",
        items: &[
            "Project-by-project operational risk assessment",
            "Pre-flight airspace and site checks",
            "Clear flight conduct and safe separation",
        ],
    },
    CompliancePanel {
        title: "Insurance",
        description: "Documentation available on request.",
        items: &[
            "Public Liability Insurance",
            "RAMS / method statement provided",
            "Client requirements incorporated",
        ],
    },
    CompliancePanel {
        title: "Data Handling",
        description: "Less chaos. More traceability.",
        items: &[
            "Secure delivery links",
            "Structured file naming",
            "Confidentiality respected",
        ],
    },
];

const DIRECT_CONTACT_NOTES: &[&str] = &[
    "Fully compliant UK drone operations. RAMS / method statement available.",
    "Typical turnaround: depends on scope; inspection reporting is usually fastest.",
];

fn page_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(text).heading().strong().size(28.0));
    ui.add_space(16.0);
}

pub fn show_home(ui: &mut egui::Ui, actions: &mut Vec<SiteAction>) {
    ui.add_space(32.0);
    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.label(
            egui::RichText::new("Enterprise-standard drone operations.")
                .strong()
                .size(34.0),
        );
        ui.add_space(12.0);
        ui.weak(
            "Inspection-led aerial services with disciplined planning, structured reporting \
             and regulatory compliance.",
        );
        ui.add_space(18.0);
        ui.horizontal(|ui| {
            if primary_button(ui, "View Services", true).clicked() {
                actions.push(SiteAction::Navigate(View::Services));
            }
            if secondary_button(ui, "Submit Requirements").clicked() {
                actions.push(SiteAction::Navigate(View::Contact));
            }
        });
        ui.add_space(18.0);
        ui.horizontal_wrapped(|ui| {
            for text in TRUST_PILLS {
                pill(ui, text);
            }
        });

        card(
            &mut cols[1],
            "Core Capability",
            "Practical deliverables. Clean governance. No cowboy flying.",
            |ui| {
                for capability in HOME_CAPABILITIES {
                    tile(ui, capability);
                }
            },
        );
    });
}

pub fn show_services(ui: &mut egui::Ui, selected: ServiceId, actions: &mut Vec<SiteAction>) {
    page_heading(ui, "Services");
    ui.columns(2, |cols| {
        card(
            &mut cols[0],
            "Select Service",
            "Pick a lane. See exactly what you get.",
            |ui| {
                for entry in SERVICES {
                    let is_selected = entry.id == selected;
                    let text = egui::RichText::new(format!("{}\n{}", entry.title, entry.description));
                    let row = egui::Button::selectable(is_selected, text)
                        .min_size(egui::vec2(ui.available_width(), 52.0));
                    if ui.add(row).clicked() {
                        actions.push(SiteAction::SelectService(entry.id));
                    }
                }
            },
        );

        let entry = selected.entry();
        card(&mut cols[1], entry.title, entry.description, |ui| {
            for bullet in entry.bullets {
                ui.horizontal_wrapped(|ui| {
                    ui.label("○");
                    ui.label(*bullet);
                });
            }
            ui.add_space(14.0);
            if primary_button(ui, "Submit Requirements", true).clicked() {
                actions.push(SiteAction::RequestProposal);
            }
        });
    });
}

pub fn show_compliance(ui: &mut egui::Ui) {
    page_heading(ui, "Compliance & Governance");
    ui.columns(COMPLIANCE_PANELS.len(), |cols| {
        for (col, panel) in cols.iter_mut().zip(COMPLIANCE_PANELS) {
            card(col, panel.title, panel.description, |ui| {
                for item in panel.items {
                    ui.label(*item);
                }
            });
        }
    });
}

pub fn show_contact(ui: &mut egui::Ui, draft: &EnquiryDraft, actions: &mut Vec<SiteAction>) {
    page_heading(ui, "Submit Project Requirements");
    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.weak(
            "Fill this in and it generates a structured enquiry email. Phone is optional and \
             is the customer's number so you can call them back.",
        );
        ui.add_space(12.0);

        for field in [
            EnquiryField::Company,
            EnquiryField::ContactName,
            EnquiryField::Email,
            EnquiryField::Phone,
            EnquiryField::Location,
        ] {
            edit_field(ui, draft, field, actions);
            ui.add_space(6.0);
        }

        ui.label(egui::RichText::new("Service").strong());
        let service_text = draft.service.map_or("Select Service", ServiceId::title);
        egui::ComboBox::from_id_salt("enquiry_service")
            .selected_text(service_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for entry in SERVICES {
                    if ui
                        .selectable_label(draft.service == Some(entry.id), entry.title)
                        .clicked()
                    {
                        actions.push(SiteAction::ChooseService(Some(entry.id)));
                    }
                }
            });
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Estimated duration").strong());
        let duration_text = draft.duration.map_or("Select Duration", |d| d.label());
        egui::ComboBox::from_id_salt("enquiry_duration")
            .selected_text(duration_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in DURATIONS {
                    if ui
                        .selectable_label(draft.duration == Some(option.id), option.label)
                        .clicked()
                    {
                        actions.push(SiteAction::ChooseDuration(Some(option.id)));
                    }
                }
            });
        ui.add_space(6.0);

        edit_field(ui, draft, EnquiryField::Scope, actions);
        ui.add_space(12.0);

        let submit = primary_button(ui, "Generate Enquiry Email", draft.can_submit())
            .on_hover_text("Opens your email client with a pre-filled enquiry");
        if submit.clicked() {
            actions.push(SiteAction::SubmitEnquiry);
        }
        ui.add_space(6.0);
        ui.small(
            "This doesn't submit to a server; it opens a pre-filled email draft in your \
             mail client.",
        );

        card(
            &mut cols[1],
            "Direct Contact",
            "For clients who just want a human.",
            |ui| {
                tile(ui, &format!("Email: {ENQUIRY_RECIPIENT}"));
                for note in DIRECT_CONTACT_NOTES {
                    tile(ui, note);
                }
            },
        );
    });
}

fn edit_field(
    ui: &mut egui::Ui,
    draft: &EnquiryDraft,
    field: EnquiryField,
    actions: &mut Vec<SiteAction>,
) {
    let id = match field {
        EnquiryField::Company => "enquiry_company",
        EnquiryField::ContactName => "enquiry_contact_name",
        EnquiryField::Email => "enquiry_email",
        EnquiryField::Phone => "enquiry_phone",
        EnquiryField::Location => "enquiry_location",
        EnquiryField::Scope => "enquiry_scope",
    };
    let multiline = field == EnquiryField::Scope;
    if let Some(value) = text_field(
        ui,
        id,
        field.label(),
        field.placeholder(),
        draft.field(field),
        multiline,
    ) {
        actions.push(SiteAction::EditField { field, value });
    }
}

pub fn show_footer(ui: &mut egui::Ui, year: i32) {
    ui.add_space(6.0);
    ui.small(format!(
        "© {year} Quadrelliot · Precision Drone Operations · United Kingdom"
    ));
    ui.add_space(6.0);
}
