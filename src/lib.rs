//! Typed Rust client for the Textbelt SMS and OTP HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer orchestrating requests. Every
//! client method is one HTTP round trip bounded by the configured timeout; nothing
//! is retried or cached.
//!
//! ```rust,no_run
//! use textbelt::{ApiKey, MessageText, RawPhoneNumber, SendText, TextbeltClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textbelt::TextbeltError> {
//!     let client = TextbeltClient::builder()
//!         .key(ApiKey::new("...")?)
//!         .build()?;
//!     let phone = RawPhoneNumber::new("+15557727420")?;
//!     let msg = MessageText::new("hello")?;
//!     let id = client.send_text(SendText::new(phone, msg)).await?;
//!     println!("{:?}", client.status(&id).await?);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TextbeltClient, TextbeltClientBuilder, TextbeltError};
pub use domain::{
    ApiKey, GenerateOtp, MessageStatus, MessageText, OtpCode, OtpLength, OtpLifetime, OtpOptions,
    PhoneNumber, RawPhoneNumber, SendText, TextId, UserId, ValidationError, VerifyOtp,
};
