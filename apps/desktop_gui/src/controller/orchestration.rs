//! Drains the actions collected during one frame into the site controller.

use site_core::{MailHandler, SiteController};

use crate::controller::{
    events::{SiteAction, StatusBanner},
    reducer::reduce,
};

/// Applies `actions` in the order they were raised and keeps the latest banner.
pub fn dispatch_site_actions(
    site: &mut SiteController,
    actions: Vec<SiteAction>,
    mail: &dyn MailHandler,
    banner: &mut Option<StatusBanner>,
) {
    for action in actions {
        tracing::trace!(action = action.name(), "applying ui action");
        let navigated = matches!(
            action,
            SiteAction::Navigate(_) | SiteAction::RequestProposal
        );
        if let Some(next) = reduce(site, action, mail) {
            *banner = Some(next);
        } else if navigated {
            *banner = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{ServiceId, View};
    use site_core::{EnquiryField, MailtoLink};

    use super::*;

    #[test]
    fn applies_actions_in_order_and_clears_banner_on_navigation() {
        let mut site = SiteController::default();
        let mut banner = None;
        let mail = |_: &MailtoLink| {};

        dispatch_site_actions(
            &mut site,
            vec![
                SiteAction::Navigate(View::Contact),
                SiteAction::EditField {
                    field: EnquiryField::Scope,
                    value: "Roof survey".to_string(),
                },
                SiteAction::SubmitEnquiry,
            ],
            &mail,
            &mut banner,
        );
        assert!(banner.is_some());
        assert_eq!(site.draft().scope, "Roof survey");

        dispatch_site_actions(
            &mut site,
            vec![SiteAction::Navigate(View::Home)],
            &mail,
            &mut banner,
        );
        assert!(banner.is_none());
        assert_eq!(site.view(), View::Home);
        assert_eq!(site.selected_service(), ServiceId::Inspection);
    }
}
