// Contact form state and client-side validation. Validation runs before
// any request is built; the messages are shown to the visitor verbatim.

use std::sync::LazyLock;

use regex::Regex;

use folio_api::types::ContactMessage;

use crate::error::CoreError;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email.";
pub const MSG_SENT: &str = "Message sent successfully.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("valid email regex"));

/// Raw, untrimmed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Trim every field and check it, producing the request body.
    pub fn validate(&self) -> Result<ContactMessage, CoreError> {
        let msg = ContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };

        if [&msg.name, &msg.email, &msg.subject, &msg.message]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(CoreError::validation(MSG_MISSING_FIELDS));
        }
        if !EMAIL_RE.is_match(&msg.email) {
            return Err(CoreError::validation(MSG_INVALID_EMAIL));
        }
        Ok(msg)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
