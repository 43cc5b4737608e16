//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod envelope;
mod id;
mod otp;
mod text;

pub use envelope::decode_envelope_json_response;
pub use otp::{encode_generate_otp_form, encode_verify_otp_query};
pub use text::encode_send_text_form;
