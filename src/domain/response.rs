use std::fmt;

/// The JSON object every Textbelt endpoint replies with.
///
/// Each endpoint fills a different subset; absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Envelope {
    pub success: bool,
    pub status: Option<String>,
    pub text_id: Option<String>,
    pub error: Option<String>,
    pub quota_remaining: Option<i64>,
    pub otp: Option<String>,
    pub is_valid_otp: Option<bool>,
}

/// Delivery state reported by `GET /status/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    Delivered,
    Sent,
    Sending,
    Failed,
    /// Textbelt reported `UNKNOWN`, or no status at all.
    Unknown,
    /// Any status string this crate does not know, kept verbatim.
    Other(String),
}

impl MessageStatus {
    /// Map a vendor status string; absent or empty input is [`MessageStatus::Unknown`].
    pub fn from_vendor(value: Option<&str>) -> Self {
        match value {
            None => Self::Unknown,
            Some("") => Self::Unknown,
            Some("DELIVERED") => Self::Delivered,
            Some("SENT") => Self::Sent,
            Some("SENDING") => Self::Sending,
            Some("FAILED") => Self::Failed,
            Some("UNKNOWN") => Self::Unknown,
            Some(other) => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::Sent => "SENT",
            Self::Sending => "SENDING",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
