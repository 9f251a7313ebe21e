//! Applies one [`SiteAction`] to the site controller.

use site_core::{MailHandler, SiteController, ENQUIRY_RECIPIENT};

use crate::controller::events::{SiteAction, StatusBanner};

/// Returns a banner when the action produced something the user should be told about.
pub fn reduce(
    site: &mut SiteController,
    action: SiteAction,
    mail: &dyn MailHandler,
) -> Option<StatusBanner> {
    match action {
        SiteAction::Navigate(view) => site.navigate(view),
        SiteAction::SelectService(id) => site.select_service(id),
        SiteAction::RequestProposal => site.request_proposal(),
        SiteAction::EditField { field, value } => site.update_field(field, value),
        SiteAction::ChooseService(service) => site.choose_service(service),
        SiteAction::ChooseDuration(duration) => site.choose_duration(duration),
        SiteAction::SubmitEnquiry => {
            if !site.can_submit() {
                return None;
            }
            site.submit(mail);
            return Some(StatusBanner::info(format!(
                "Your email client should now show a pre-filled enquiry. \
                 If nothing opened, email {ENQUIRY_RECIPIENT} directly."
            )));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use shared::domain::{ServiceId, View};
    use site_core::{EnquiryField, MailtoLink};

    use super::*;

    #[test]
    fn navigation_and_selection_flow_through_to_the_controller() {
        let mut site = SiteController::default();
        let mail = |_: &MailtoLink| {};

        reduce(&mut site, SiteAction::Navigate(View::Services), &mail);
        reduce(&mut site, SiteAction::SelectService(ServiceId::Cinematography), &mail);
        reduce(&mut site, SiteAction::RequestProposal, &mail);

        assert_eq!(site.view(), View::Contact);
        assert_eq!(site.draft().service, Some(ServiceId::Cinematography));
    }

    #[test]
    fn submit_with_closed_gate_neither_opens_mail_nor_reports() {
        let mut site = SiteController::new(View::Contact, ServiceId::Inspection);
        let opened = Cell::new(0);
        let mail = |_: &MailtoLink| opened.set(opened.get() + 1);

        let banner = reduce(&mut site, SiteAction::SubmitEnquiry, &mail);

        assert!(banner.is_none());
        assert_eq!(opened.get(), 0);
    }

    #[test]
    fn submit_opens_mail_once_and_reports_the_hand_off() {
        let mut site = SiteController::new(View::Contact, ServiceId::Inspection);
        let opened = Cell::new(0);
        let mail = |_: &MailtoLink| opened.set(opened.get() + 1);

        reduce(
            &mut site,
            SiteAction::EditField {
                field: EnquiryField::ContactName,
                value: "Jo".to_string(),
            },
            &mail,
        );
        let banner = reduce(&mut site, SiteAction::SubmitEnquiry, &mail).expect("banner");

        assert_eq!(opened.get(), 1);
        assert!(banner.message.contains("quadrelliot@gmail.com"));
    }
}
