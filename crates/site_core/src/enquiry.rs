//! Contact-form draft and its serialization into an enquiry subject/body pair.

use serde::{Deserialize, Serialize};
use shared::domain::{DurationCategory, ServiceId};

use crate::mailto::ENQUIRY_SUBJECT;

const EMPTY_FIELD: &str = "-";
const NOT_SELECTED: &str = "(not selected)";

/// Free-text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryField {
    Company,
    ContactName,
    Email,
    Phone,
    Location,
    Scope,
}

impl EnquiryField {
    pub const ALL: &'static [EnquiryField] = &[
        EnquiryField::Company,
        EnquiryField::ContactName,
        EnquiryField::Email,
        EnquiryField::Phone,
        EnquiryField::Location,
        EnquiryField::Scope,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnquiryField::Company => "Company name",
            EnquiryField::ContactName => "Contact name",
            EnquiryField::Email => "Email",
            EnquiryField::Phone => "Phone (optional)",
            EnquiryField::Location => "Project location / postcode",
            EnquiryField::Scope => "Scope / deliverables / deadlines / constraints",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EnquiryField::Company => "Company Name",
            EnquiryField::ContactName => "Contact Name",
            EnquiryField::Email => "Email Address",
            EnquiryField::Phone => "Phone Number (optional)",
            EnquiryField::Location => "Project Location / Postcode",
            EnquiryField::Scope => {
                "Scope of work, deliverables required, deadline, site constraints"
            }
        }
    }
}

/// Transient state of one in-progress enquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryDraft {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub service: Option<ServiceId>,
    pub duration: Option<DurationCategory>,
    pub scope: String,
}

impl EnquiryDraft {
    pub fn field(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::Company => &self.company,
            EnquiryField::ContactName => &self.contact_name,
            EnquiryField::Email => &self.email,
            EnquiryField::Phone => &self.phone,
            EnquiryField::Location => &self.location,
            EnquiryField::Scope => &self.scope,
        }
    }

    /// Stores `value` verbatim; no validation happens at this layer.
    pub fn update_field(&mut self, field: EnquiryField, value: impl Into<String>) {
        let slot = match field {
            EnquiryField::Company => &mut self.company,
            EnquiryField::ContactName => &mut self.contact_name,
            EnquiryField::Email => &mut self.email,
            EnquiryField::Phone => &mut self.phone,
            EnquiryField::Location => &mut self.location,
            EnquiryField::Scope => &mut self.scope,
        };
        *slot = value.into();
    }

    pub fn choose_service(&mut self, service: Option<ServiceId>) {
        self.service = service;
    }

    pub fn choose_duration(&mut self, duration: Option<DurationCategory>) {
        self.duration = duration;
    }

    /// Loose gate against firing an entirely empty enquiry.
    ///
    /// Any one non-empty text field or a chosen service is enough. Duration alone is not.
    pub fn can_submit(&self) -> bool {
        EnquiryField::ALL
            .iter()
            .any(|field| !self.field(*field).is_empty())
            || self.service.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self == &EnquiryDraft::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEnquiry {
    pub subject: String,
    pub body: String,
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

/// Serializes a draft into the fixed enquiry layout.
///
/// Line order and placeholder text are consumed by email-based workflows downstream and
/// must stay stable.
pub fn compose_enquiry(draft: &EnquiryDraft) -> ComposedEnquiry {
    let service = draft.service.map_or(NOT_SELECTED, ServiceId::title);
    let duration = draft.duration.map_or(NOT_SELECTED, DurationCategory::label);

    let lines = [
        "New Quadrelliot enquiry".to_string(),
        String::new(),
        format!("Company: {}", or_placeholder(&draft.company)),
        format!("Contact name: {}", or_placeholder(&draft.contact_name)),
        format!("Email: {}", or_placeholder(&draft.email)),
        format!("Phone (optional): {}", or_placeholder(&draft.phone)),
        format!("Location / Postcode: {}", or_placeholder(&draft.location)),
        format!("Service: {service}"),
        format!("Estimated duration: {duration}"),
        String::new(),
        "Scope / deliverables / deadlines / constraints:".to_string(),
        or_placeholder(&draft.scope).to_string(),
    ];

    ComposedEnquiry {
        subject: ENQUIRY_SUBJECT.to_string(),
        body: lines.join("\n"),
    }
}

#[cfg(test)]
#[path = "tests/enquiry_tests.rs"]
mod tests;
