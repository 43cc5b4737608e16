use crate::domain::{ApiKey, MessageText, RawPhoneNumber, SendText};

pub fn encode_send_text_form(key: &ApiKey, request: &SendText) -> Vec<(String, String)> {
    vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.phone().raw().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
        (ApiKey::FIELD.to_owned(), key.as_str().to_owned()),
    ]
}
