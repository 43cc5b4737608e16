use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Textbelt API key (`key`).
///
/// Invariant: non-empty after trimming. [`ApiKey::default`] is the shared free-tier key,
/// which allows one message per day.
pub struct ApiKey(String);

impl ApiKey {
    /// Form/query field name used by Textbelt (`key`).
    pub const FIELD: &'static str = "key";

    /// The shared free-tier key.
    pub const FREE: &'static str = "textbelt";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self(Self::FREE.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to Textbelt (`phone`).
///
/// Invariant: non-empty after trimming. No normalization is performed; if you need
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Textbelt (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Textbelt.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Textbelt (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix,
    /// e.g. `Some(country::Id::US)` for ten-digit US numbers.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// For OTP requests this is a template: Textbelt replaces `$OTP` with the generated code.
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Textbelt (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-chosen identifier an OTP is bound to (`userid`).
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// Form/query field name used by Textbelt (`userid`).
    pub const FIELD: &'static str = "userid";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Textbelt message id (`textId`) returned by `POST /text`.
///
/// Invariant: non-empty after trimming.
pub struct TextId(String);

impl TextId {
    /// JSON field name used by Textbelt (`textId`).
    pub const FIELD: &'static str = "textId";

    /// Create a validated [`TextId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated text id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time code (`otp`), either generated by Textbelt or entered by the user.
///
/// Invariant: non-empty after trimming.
pub struct OtpCode(String);

impl OtpCode {
    /// Form/query field name used by Textbelt (`otp`).
    pub const FIELD: &'static str = "otp";

    /// Create a validated [`OtpCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long a generated OTP stays valid, in seconds (`lifetime`).
///
/// Invariant: greater than zero.
pub struct OtpLifetime(u32);

impl OtpLifetime {
    /// Form field name used by Textbelt (`lifetime`).
    pub const FIELD: &'static str = "lifetime";

    /// Create a lifetime from whole seconds.
    pub fn from_secs(secs: u32) -> Result<Self, ValidationError> {
        if secs == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(secs))
    }

    /// Get the lifetime in seconds.
    pub fn as_secs(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of digits in a generated OTP (`length`).
///
/// Invariant: greater than zero.
pub struct OtpLength(u8);

impl OtpLength {
    /// Form field name used by Textbelt (`length`).
    pub const FIELD: &'static str = "length";

    /// Create a validated digit count.
    pub fn new(digits: u8) -> Result<Self, ValidationError> {
        if digits == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(digits))
    }

    /// Get the digit count.
    pub fn value(self) -> u8 {
        self.0
    }
}
