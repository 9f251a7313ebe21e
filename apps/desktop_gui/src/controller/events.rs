//! User actions raised by the render pass and the status banner they can produce.

use shared::domain::{DurationCategory, ServiceId, View};
use site_core::EnquiryField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteAction {
    Navigate(View),
    SelectService(ServiceId),
    RequestProposal,
    EditField { field: EnquiryField, value: String },
    ChooseService(Option<ServiceId>),
    ChooseDuration(Option<DurationCategory>),
    SubmitEnquiry,
}

impl SiteAction {
    pub fn name(&self) -> &'static str {
        match self {
            SiteAction::Navigate(_) => "navigate",
            SiteAction::SelectService(_) => "select_service",
            SiteAction::RequestProposal => "request_proposal",
            SiteAction::EditField { .. } => "edit_field",
            SiteAction::ChooseService(_) => "choose_service",
            SiteAction::ChooseDuration(_) => "choose_duration",
            SiteAction::SubmitEnquiry => "submit_enquiry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}
