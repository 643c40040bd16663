//! Contact form model: validation, submission state and the server-side inbox.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", test))]
use dashmap::DashMap;
#[cfg(any(feature = "ssr", test))]
use std::sync::{
    atomic::{AtomicU64, Ordering},
    LazyLock,
};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;
/// How long the "sent" confirmation stays before the form is usable again.
pub const SENT_CONFIRMATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trims every field and checks it, returning the cleaned message.
    pub fn validate(self) -> Result<Self, ContactError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let message = self.message.trim().to_string();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::TooLong {
                field: "Name",
                max: MAX_NAME_LEN,
            });
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ContactError::TooLong {
                field: "Email",
                max: MAX_EMAIL_LEN,
            });
        }
        if !is_plausible_email(&email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ContactError::TooLong {
                field: "Message",
                max: MAX_MESSAGE_LEN,
            });
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Client-side view of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    Succeeded,
    Failed(String),
    /// The "sent" confirmation timed out.
    Reset,
}

impl SubmissionState {
    pub fn transition(self, event: SubmissionEvent) -> Self {
        match (self, event) {
            (Self::Idle | Self::Failed(_), SubmissionEvent::Submit) => Self::Submitting,
            // a response is only meaningful while a request is in flight
            (Self::Submitting, SubmissionEvent::Succeeded) => Self::Sent,
            (Self::Submitting, SubmissionEvent::Failed(reason)) => Self::Failed(reason),
            // validation failures never leave Idle/Failed as a request
            (Self::Idle | Self::Failed(_), SubmissionEvent::Failed(reason)) => {
                Self::Failed(reason)
            }
            (Self::Sent, SubmissionEvent::Reset) => Self::Idle,
            (state, _) => state,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Submitting => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Idle | Self::Failed(_) => "Send Message",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(any(feature = "ssr", test))]
static INBOX: LazyLock<DashMap<u64, ContactMessage>> = LazyLock::new(DashMap::new);
#[cfg(any(feature = "ssr", test))]
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stores a validated message and returns its id.
#[cfg(any(feature = "ssr", test))]
pub fn record(message: ContactMessage) -> u64 {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    log::info!(
        "contact message #{id} from {} <{}> ({} chars)",
        message.name,
        message.email,
        message.message.len()
    );
    INBOX.insert(id, message);
    id
}

#[cfg(test)]
fn inbox_message(id: u64) -> Option<ContactMessage> {
    INBOX.get(&id).map(|m| m.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        let msg = ContactMessage::new("  Ada ", " ada@example.com\n", " hello ")
            .validate()
            .unwrap();
        assert_eq!(msg, ContactMessage::new("Ada", "ada@example.com", "hello"));
    }

    #[test]
    fn test_validate_rejects() {
        let ok = ContactMessage::new("Ada", "ada@example.com", "hi");

        let mut m = ok.clone();
        m.name = "   ".to_string();
        assert_eq!(m.validate(), Err(ContactError::MissingName));

        let mut m = ok.clone();
        m.message = String::new();
        assert_eq!(m.validate(), Err(ContactError::MissingMessage));

        for email in [
            "",
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@@example.com",
            "ada@.com",
            "ada@example.",
            "a da@example.com",
        ] {
            let mut m = ok.clone();
            m.email = email.to_string();
            assert_eq!(m.validate(), Err(ContactError::InvalidEmail), "{email}");
        }

        let mut m = ok.clone();
        m.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            m.validate(),
            Err(ContactError::TooLong {
                field: "Message",
                max: MAX_MESSAGE_LEN
            })
        );

        let mut m = ok;
        m.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(m.validate(), Err(ContactError::TooLong { .. })));
    }

    #[test]
    fn test_submission_happy_path() {
        let state = SubmissionState::Idle;
        assert!(state.can_submit());
        let state = state.transition(SubmissionEvent::Submit);
        assert_eq!(state, SubmissionState::Submitting);
        assert!(!state.can_submit());
        assert_eq!(state.button_label(), "Sending...");
        let state = state.transition(SubmissionEvent::Succeeded);
        assert_eq!(state, SubmissionState::Sent);
        assert!(!state.can_submit());
        assert_eq!(state.transition(SubmissionEvent::Reset), SubmissionState::Idle);
    }

    #[test]
    fn test_submission_failure_is_retryable() {
        let state = SubmissionState::Idle
            .transition(SubmissionEvent::Submit)
            .transition(SubmissionEvent::Failed("offline".to_string()));
        assert_eq!(state.error(), Some("offline"));
        assert!(state.can_submit());
        assert_eq!(state.button_label(), "Send Message");
        assert_eq!(
            state.transition(SubmissionEvent::Submit),
            SubmissionState::Submitting
        );
    }

    #[test]
    fn test_submission_ignores_stray_events() {
        // double submit while in flight
        let submitting = SubmissionState::Submitting;
        assert_eq!(
            submitting.clone().transition(SubmissionEvent::Submit),
            SubmissionState::Submitting
        );
        // reset only applies to the sent confirmation
        assert_eq!(
            submitting.transition(SubmissionEvent::Reset),
            SubmissionState::Submitting
        );
        assert_eq!(
            SubmissionState::Idle.transition(SubmissionEvent::Succeeded),
            SubmissionState::Idle
        );
        assert_eq!(
            SubmissionState::Sent.transition(SubmissionEvent::Submit),
            SubmissionState::Sent
        );
    }

    #[test]
    fn test_record_in_inbox() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "hello");
        let first = record(msg.clone());
        let second = record(msg.clone());
        assert_ne!(first, second);
        assert_eq!(inbox_message(first), Some(msg));
        assert_eq!(inbox_message(0), None);
    }
}
