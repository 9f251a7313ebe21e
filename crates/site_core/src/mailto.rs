//! `mailto:` link encoding for composed enquiries, and decoding for verification.

use std::{fmt, string::FromUtf8Error};

use thiserror::Error;
use url::Url;

use crate::enquiry::ComposedEnquiry;

pub const ENQUIRY_RECIPIENT: &str = "quadrelliot@gmail.com";
pub const ENQUIRY_SUBJECT: &str = "Quadrelliot — Project Requirements";

#[derive(Debug, Error)]
pub enum MailtoError {
    #[error("invalid mailto uri: {0}")]
    Parse(#[from] url::ParseError),
    #[error("expected a mailto uri, got scheme '{0}'")]
    WrongScheme(String),
    #[error("mailto uri has no recipient")]
    MissingRecipient,
    #[error("mailto uri is missing the '{0}' parameter")]
    MissingParameter(&'static str),
    #[error("'{param}' is not valid percent-encoded utf-8: {source}")]
    InvalidEncoding {
        param: String,
        source: FromUtf8Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn for_enquiry(enquiry: &ComposedEnquiry) -> Self {
        Self {
            recipient: ENQUIRY_RECIPIENT.to_string(),
            subject: enquiry.subject.clone(),
            body: enquiry.body.clone(),
        }
    }

    /// Renders the link; subject and body are percent-encoded independently.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Decodes a link produced by [`MailtoLink::to_uri`] (or any RFC 6068 link carrying
    /// both `subject` and `body`). `+` is kept literal, as RFC 6068 requires.
    pub fn parse(uri: &str) -> Result<Self, MailtoError> {
        let url = Url::parse(uri)?;
        if url.scheme() != "mailto" {
            return Err(MailtoError::WrongScheme(url.scheme().to_string()));
        }

        let recipient = decode_component("recipient", url.path())?;
        if recipient.is_empty() {
            return Err(MailtoError::MissingRecipient);
        }

        let mut subject = None;
        let mut body = None;
        for pair in url.query().unwrap_or_default().split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            match name.to_ascii_lowercase().as_str() {
                "subject" => subject = Some(decode_component(name, value)?),
                "body" => body = Some(decode_component(name, value)?),
                _ => {}
            }
        }

        Ok(Self {
            recipient,
            subject: subject.ok_or(MailtoError::MissingParameter("subject"))?,
            body: body.ok_or(MailtoError::MissingParameter("body"))?,
        })
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

fn decode_component(param: &str, raw: &str) -> Result<String, MailtoError> {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|source| MailtoError::InvalidEncoding {
            param: param.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(subject: &str, body: &str) -> MailtoLink {
        MailtoLink {
            recipient: ENQUIRY_RECIPIENT.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn encodes_spaces_and_newlines_as_percent_escapes() {
        let uri = link("a b", "line one\nline two").to_uri();
        assert_eq!(
            uri,
            "mailto:quadrelliot@gmail.com?subject=a%20b&body=line%20one%0Aline%20two"
        );
    }

    #[test]
    fn escapes_query_delimiters_inside_values() {
        let uri = link("x&body=evil", "1+1=2?").to_uri();
        assert!(uri.contains("subject=x%26body%3Devil&"));
        assert!(uri.ends_with("body=1%2B1%3D2%3F"));

        let parsed = MailtoLink::parse(&uri).expect("parse");
        assert_eq!(parsed.subject, "x&body=evil");
        assert_eq!(parsed.body, "1+1=2?");
    }

    #[test]
    fn encodes_non_ascii_subject_as_utf8_bytes() {
        let uri = link(ENQUIRY_SUBJECT, "-").to_uri();
        assert!(uri.contains("subject=Quadrelliot%20%E2%80%94%20Project%20Requirements"));
    }

    #[test]
    fn keeps_literal_plus_when_decoding() {
        let parsed =
            MailtoLink::parse("mailto:ops@example.com?subject=a+b&body=c").expect("parse");
        assert_eq!(parsed.subject, "a+b");
        assert_eq!(parsed.recipient, "ops@example.com");
    }

    #[test]
    fn rejects_other_schemes() {
        let err = MailtoLink::parse("https://example.com/?subject=a&body=b").expect_err("scheme");
        assert!(matches!(err, MailtoError::WrongScheme(scheme) if scheme == "https"));
    }

    #[test]
    fn rejects_missing_parameters_and_recipient() {
        let err = MailtoLink::parse("mailto:ops@example.com?subject=a").expect_err("body");
        assert!(matches!(err, MailtoError::MissingParameter("body")));

        let err = MailtoLink::parse("mailto:?subject=a&body=b").expect_err("recipient");
        assert!(matches!(err, MailtoError::MissingRecipient));
    }

    #[test]
    fn display_renders_the_uri() {
        let link = link("s", "b");
        assert_eq!(link.to_string(), link.to_uri());
    }
}
