//! View-state controller and enquiry composer for the Quadrelliot site.
//!
//! Everything here is synchronous and UI-agnostic: front ends own a [`SiteController`],
//! feed it user actions, and supply a [`MailHandler`] for the final hand-off.

pub mod controller;
pub mod enquiry;
pub mod handoff;
pub mod mailto;

pub use controller::SiteController;
pub use enquiry::{compose_enquiry, ComposedEnquiry, EnquiryDraft, EnquiryField};
pub use handoff::{LogOnlyMailHandler, MailHandler};
pub use mailto::{MailtoError, MailtoLink, ENQUIRY_RECIPIENT, ENQUIRY_SUBJECT};
