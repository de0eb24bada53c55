//! Simulated contact form submission. Nothing leaves the page; the form always
//! "succeeds" after a short delay.

use crate::constants::{CONTACT_CLEAR_DELAY, CONTACT_SEND_DELAY};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Sending,
    Sent,
    Cleared,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Message sent successfully!",
            FormStatus::Cleared => "",
        }
    }

    /// Class list for the status line; `None` keeps the current one.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            FormStatus::Sending => Some("text-blue-600 text-center mt-4"),
            FormStatus::Sent => Some("text-green-600 text-center mt-4"),
            FormStatus::Cleared => None,
        }
    }

    /// The form fields are reset together with the success message.
    pub fn resets_fields(self) -> bool {
        matches!(self, FormStatus::Sent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusStep {
    /// Wait before applying, measured from the previous step.
    pub after: Duration,
    pub status: FormStatus,
}

pub const SUBMISSION_STEPS: [StatusStep; 3] = [
    StatusStep {
        after: Duration::ZERO,
        status: FormStatus::Sending,
    },
    StatusStep {
        after: CONTACT_SEND_DELAY,
        status: FormStatus::Sent,
    },
    StatusStep {
        after: CONTACT_CLEAR_DELAY,
        status: FormStatus::Cleared,
    },
];

/// Hands out submission tickets so a newer submit supersedes pending steps
/// of an older one.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    latest: u64,
}

impl ContactForm {
    pub fn submit(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    pub fn steps(&self) -> &'static [StatusStep] {
        &SUBMISSION_STEPS
    }
}
