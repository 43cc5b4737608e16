use crate::domain::{
    ApiKey, GenerateOtp, MessageText, OtpCode, OtpLength, OtpLifetime, RawPhoneNumber, UserId,
    VerifyOtp,
};

pub fn encode_generate_otp_form(key: &ApiKey, request: &GenerateOtp) -> Vec<(String, String)> {
    let mut params = vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.phone().raw().to_owned(),
        ),
        (
            UserId::FIELD.to_owned(),
            request.userid().as_str().to_owned(),
        ),
        (ApiKey::FIELD.to_owned(), key.as_str().to_owned()),
    ];

    let options = request.options();
    if let Some(message) = options.message.as_ref() {
        params.push((MessageText::FIELD.to_owned(), message.as_str().to_owned()));
    }
    if let Some(lifetime) = options.lifetime {
        params.push((
            OtpLifetime::FIELD.to_owned(),
            lifetime.as_secs().to_string(),
        ));
    }
    if let Some(length) = options.length {
        params.push((OtpLength::FIELD.to_owned(), length.value().to_string()));
    }

    params
}

pub fn encode_verify_otp_query(key: &ApiKey, request: &VerifyOtp) -> Vec<(String, String)> {
    vec![
        (OtpCode::FIELD.to_owned(), request.otp().as_str().to_owned()),
        (
            UserId::FIELD.to_owned(),
            request.userid().as_str().to_owned(),
        ),
        (ApiKey::FIELD.to_owned(), key.as_str().to_owned()),
    ]
}

#[cfg(test)]
mod tests {
    use crate::domain::OtpOptions;

    use super::*;

    fn phone() -> RawPhoneNumber {
        RawPhoneNumber::new("5557727420").unwrap()
    }

    fn userid() -> UserId {
        UserId::new("user@example.com").unwrap()
    }

    #[test]
    fn encode_simple_generate_form_has_only_required_params() {
        let request = GenerateOtp::new(phone(), userid());
        let params = encode_generate_otp_form(&ApiKey::default(), &request);

        assert_eq!(
            params,
            vec![
                ("phone".to_owned(), "5557727420".to_owned()),
                ("userid".to_owned(), "user@example.com".to_owned()),
                ("key".to_owned(), "textbelt".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_custom_generate_form_appends_set_options() {
        let options = OtpOptions {
            message: Some(MessageText::new("Your code is $OTP").unwrap()),
            lifetime: Some(OtpLifetime::from_secs(120).unwrap()),
            length: Some(OtpLength::new(4).unwrap()),
        };
        let request = GenerateOtp::with_options(phone(), userid(), options);
        let params = encode_generate_otp_form(&ApiKey::default(), &request);

        assert_eq!(
            &params[3..],
            &[
                ("message".to_owned(), "Your code is $OTP".to_owned()),
                ("lifetime".to_owned(), "120".to_owned()),
                ("length".to_owned(), "4".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_custom_generate_form_skips_unset_options() {
        let options = OtpOptions {
            length: Some(OtpLength::new(8).unwrap()),
            ..Default::default()
        };
        let request = GenerateOtp::with_options(phone(), userid(), options);
        let params = encode_generate_otp_form(&ApiKey::default(), &request);

        assert!(!params.iter().any(|(k, _)| k == "message" || k == "lifetime"));
        assert!(params.iter().any(|(k, v)| k == "length" && v == "8"));
    }

    #[test]
    fn encode_verify_query_params() {
        let request = VerifyOtp::new(OtpCode::new("123456").unwrap(), userid());
        let params = encode_verify_otp_query(&ApiKey::new("abc").unwrap(), &request);

        assert_eq!(
            params,
            vec![
                ("otp".to_owned(), "123456".to_owned()),
                ("userid".to_owned(), "user@example.com".to_owned()),
                ("key".to_owned(), "abc".to_owned()),
            ]
        );
    }
}
