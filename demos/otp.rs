use std::io;

use textbelt::{
    ApiKey, GenerateOtp, MessageText, OtpCode, OtpOptions, RawPhoneNumber, TextbeltClient, UserId,
    VerifyOtp,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = match std::env::var("TEXTBELT_KEY") {
        Ok(value) => ApiKey::new(value)?,
        Err(_) => ApiKey::default(),
    };
    let userid = std::env::var("TEXTBELT_USERID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_USERID environment variable is required",
        )
    })?;
    let userid = UserId::new(userid)?;

    let client = TextbeltClient::builder().key(key).build()?;

    if let Ok(code) = std::env::var("TEXTBELT_OTP") {
        let valid = client
            .verify_otp(VerifyOtp::new(OtpCode::new(code)?, userid))
            .await?;
        println!("otp valid: {valid}");
        return Ok(());
    }

    let phone_raw = std::env::var("TEXTBELT_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_PHONE environment variable is required when TEXTBELT_OTP is not set",
        )
    })?;
    let phone = RawPhoneNumber::new(phone_raw)?;

    let otp = match std::env::var("TEXTBELT_MESSAGE") {
        Ok(template) => {
            let options = OtpOptions {
                message: Some(MessageText::new(template)?),
                ..Default::default()
            };
            client
                .generate_custom_otp(GenerateOtp::with_options(phone, userid, options))
                .await?
        }
        Err(_) => client.generate_otp(phone, userid).await?,
    };
    println!("otp sent: {}", otp.as_str());

    Ok(())
}
