//! View-state controller: active view, highlighted service and the enquiry draft.

use shared::{
    catalog::ServiceCatalogEntry,
    domain::{DurationCategory, ServiceId, View},
};

use crate::{
    enquiry::{compose_enquiry, ComposedEnquiry, EnquiryDraft, EnquiryField},
    handoff::MailHandler,
    mailto::MailtoLink,
};

/// Single owner of all mutable site state.
///
/// Every transition is total: any view is reachable from any other, and every service id
/// is a catalog member by construction.
#[derive(Debug, Clone, Default)]
pub struct SiteController {
    view: View,
    selected_service: ServiceId,
    draft: EnquiryDraft,
}

impl SiteController {
    pub fn new(start_view: View, selected_service: ServiceId) -> Self {
        Self {
            view: start_view,
            selected_service,
            draft: EnquiryDraft::default(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_service(&self) -> ServiceId {
        self.selected_service
    }

    pub fn selected_entry(&self) -> &'static ServiceCatalogEntry {
        self.selected_service.entry()
    }

    pub fn draft(&self) -> &EnquiryDraft {
        &self.draft
    }

    /// Switches the active view.
    ///
    /// The draft only lives while the contact view is showing: it is discarded on the way
    /// out and starts empty on the way in. Re-selecting contact keeps it.
    pub fn navigate(&mut self, view: View) {
        let from = self.view;
        if from == View::Contact && view != View::Contact {
            if !self.draft.is_empty() {
                tracing::debug!("discarding unsent enquiry draft");
            }
            self.draft = EnquiryDraft::default();
        }
        self.view = view;
        tracing::debug!(from = %from, to = %view, "navigated");
    }

    pub fn select_service(&mut self, id: ServiceId) {
        if self.selected_service != id {
            tracing::debug!(from = %self.selected_service, to = %id, "service selected");
        }
        self.selected_service = id;
    }

    /// Opens the contact view with the highlighted service pre-chosen.
    pub fn request_proposal(&mut self) {
        self.navigate(View::Contact);
        self.draft.choose_service(Some(self.selected_service));
    }

    pub fn update_field(&mut self, field: EnquiryField, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    pub fn choose_service(&mut self, service: Option<ServiceId>) {
        self.draft.choose_service(service);
    }

    pub fn choose_duration(&mut self, duration: Option<DurationCategory>) {
        self.draft.choose_duration(duration);
    }

    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    pub fn compose_enquiry(&self) -> ComposedEnquiry {
        compose_enquiry(&self.draft)
    }

    pub fn enquiry_link(&self) -> MailtoLink {
        MailtoLink::for_enquiry(&self.compose_enquiry())
    }

    /// Hands the composed enquiry to `handler`.
    ///
    /// Skipped while the submit gate is closed. The draft is kept so the same enquiry can
    /// be sent again if no mail client appeared.
    pub fn submit(&self, handler: &dyn MailHandler) {
        if !self.can_submit() {
            tracing::debug!("submit ignored: every enquiry field is empty");
            return;
        }

        let link = self.enquiry_link();
        tracing::info!(
            service = ?self.draft.service,
            duration = ?self.draft.duration,
            "handing enquiry to mail client"
        );
        handler.open(&link);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
