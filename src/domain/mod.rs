//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{GenerateOtp, OtpOptions, SendText, VerifyOtp};
pub(crate) use response::Envelope;
pub use response::MessageStatus;
pub use validation::ValidationError;
pub use value::{
    ApiKey, MessageText, OtpCode, OtpLength, OtpLifetime, PhoneNumber, RawPhoneNumber, TextId,
    UserId,
};
