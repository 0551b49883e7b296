//! Mail and telephone intents handed to the platform, plus the clipboard seam.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared::domain::EmployerRecord;
use thiserror::Error;
use tracing::debug;

// RFC 3986 unreserved characters stay literal; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const INQUIRY_SUBJECT_PREFIX: &str = "Job Opportunity Inquiry - ";

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Opens `mailto:`/`tel:` URIs with whatever handler the platform provides.
pub trait UriLauncher {
    fn open_uri(&self, uri: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailIntent {
    pub to: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl MailIntent {
    /// Pre-filled inquiry addressed to the employer's contact person.
    pub fn inquiry(record: &EmployerRecord) -> Self {
        Self {
            to: record.email.clone(),
            subject: Some(format!("{INQUIRY_SUBJECT_PREFIX}{}", record.name)),
            body: Some(format!(
                "Hi {},\n\nI am interested in job opportunities at {}.\n\nBest regards",
                record.contact_first_name, record.name
            )),
        }
    }

    pub fn plain(record: &EmployerRecord) -> Self {
        Self {
            to: record.email.clone(),
            subject: None,
            body: None,
        }
    }

    pub fn to_uri(&self) -> String {
        let mut uri = format!("mailto:{}", self.to.trim());
        let params = [("subject", &self.subject), ("body", &self.body)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|value| format!("{key}={}", utf8_percent_encode(value, URI_COMPONENT)))
            })
            .collect::<Vec<_>>();
        if !params.is_empty() {
            uri.push('?');
            uri.push_str(&params.join("&"));
        }
        uri
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallIntent {
    pub phone: String,
}

impl CallIntent {
    pub fn from_record(record: &EmployerRecord) -> Self {
        Self {
            phone: record.phone.clone(),
        }
    }

    /// `tel:` URI with whitespace separators dropped.
    pub fn to_uri(&self) -> String {
        let dialable: String = self
            .phone
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        format!("tel:{dialable}")
    }
}

pub fn send_mail(launcher: &dyn UriLauncher, intent: &MailIntent) {
    let uri = intent.to_uri();
    debug!(to = %intent.to, "opening mail handler");
    launcher.open_uri(&uri);
}

/// Copies the phone number (best effort) and hands the call to the platform.
/// Returns whether the clipboard write succeeded.
pub fn place_call(
    record: &EmployerRecord,
    clipboard: Option<&mut dyn ClipboardSink>,
    launcher: &dyn UriLauncher,
) -> bool {
    let intent = CallIntent::from_record(record);
    let copied = match clipboard {
        Some(clipboard) => match clipboard.set_text(&intent.phone) {
            Ok(()) => true,
            Err(err) => {
                debug!(employer = %record.id, %err, "phone number not copied");
                false
            }
        },
        None => false,
    };
    launcher.open_uri(&intent.to_uri());
    copied
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
