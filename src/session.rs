//! Session identity captured by the pre-chat gate.

use thiserror::Error;

/// Channel tag sent with every message so the backend can tell widget traffic
/// from its other inboxes.
pub const CHANNEL_ORIGIN: &str = "web";

const PHONE_MIN_DIGITS: usize = 11;
const PHONE_MAX_DIGITS: usize = 15;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("enter a phone number to start the chat")]
    Empty,
    #[error("phone numbers are digits only, including country code (11-15 digits)")]
    Format,
}

/// Write-once identity for one widget session. Only the gate constructs it,
/// and it is read-only afterwards, so a `Session` in hand means the gate
/// passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user_phone: String,
}

impl Session {
    /// Validate a candidate phone number and open a session on it.
    pub fn open(candidate: &str) -> Result<Self, PhoneError> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(PhoneError::Empty);
        }
        let len = candidate.len();
        if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len)
            || !candidate.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(PhoneError::Format);
        }
        Ok(Self { user_phone: candidate.to_string() })
    }

    pub fn user_phone(&self) -> &str {
        &self.user_phone
    }

    pub fn origin(&self) -> &'static str {
        CHANNEL_ORIGIN
    }

    /// Masked form for display: all but the last four digits hidden.
    pub fn masked_phone(&self) -> String {
        let tail: String = self
            .user_phone
            .chars()
            .skip(self.user_phone.len().saturating_sub(4))
            .collect();
        format!("····{tail}")
    }
}
