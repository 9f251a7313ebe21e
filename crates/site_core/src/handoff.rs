//! Seam between the composer and whatever opens the user's mail client.

use crate::mailto::MailtoLink;

/// Passes a finished link to the platform.
///
/// Fire-and-forget: implementations cannot report whether a mail client opened or
/// whether the user sent anything, so there is nothing to return.
pub trait MailHandler {
    fn open(&self, link: &MailtoLink);
}

impl<F> MailHandler for F
where
    F: Fn(&MailtoLink),
{
    fn open(&self, link: &MailtoLink) {
        self(link)
    }
}

/// Records the hand-off in the log without contacting any mail client.
pub struct LogOnlyMailHandler;

impl MailHandler for LogOnlyMailHandler {
    fn open(&self, link: &MailtoLink) {
        tracing::info!(
            recipient = %link.recipient,
            uri = %link,
            "mail client hand-off disabled; enquiry link logged only"
        );
    }
}
