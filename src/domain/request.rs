use crate::domain::value::{
    MessageText, OtpCode, OtpLength, OtpLifetime, RawPhoneNumber, UserId,
};

/// `POST /text`: one message to one recipient.
#[derive(Debug, Clone)]
pub struct SendText {
    phone: RawPhoneNumber,
    message: MessageText,
}

impl SendText {
    pub fn new(phone: RawPhoneNumber, message: MessageText) -> Self {
        Self { phone, message }
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

/// Optional knobs for `POST /otp/generate`.
///
/// Unset fields are left out of the request and Textbelt applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct OtpOptions {
    /// Message template; `$OTP` is replaced with the generated code.
    pub message: Option<MessageText>,
    pub lifetime: Option<OtpLifetime>,
    pub length: Option<OtpLength>,
}

/// `POST /otp/generate`: send a one-time code to `phone`, bound to `userid`.
#[derive(Debug, Clone)]
pub struct GenerateOtp {
    phone: RawPhoneNumber,
    userid: UserId,
    options: OtpOptions,
}

impl GenerateOtp {
    pub fn new(phone: RawPhoneNumber, userid: UserId) -> Self {
        Self::with_options(phone, userid, OtpOptions::default())
    }

    pub fn with_options(phone: RawPhoneNumber, userid: UserId, options: OtpOptions) -> Self {
        Self {
            phone,
            userid,
            options,
        }
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn userid(&self) -> &UserId {
        &self.userid
    }

    pub fn options(&self) -> &OtpOptions {
        &self.options
    }
}

/// `GET /otp/verify`: check a code the user entered.
#[derive(Debug, Clone)]
pub struct VerifyOtp {
    otp: OtpCode,
    userid: UserId,
}

impl VerifyOtp {
    pub fn new(otp: OtpCode, userid: UserId) -> Self {
        Self { otp, userid }
    }

    pub fn otp(&self) -> &OtpCode {
        &self.otp
    }

    pub fn userid(&self) -> &UserId {
        &self.userid
    }
}
