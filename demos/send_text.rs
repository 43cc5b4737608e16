use std::io;

use textbelt::{ApiKey, MessageText, RawPhoneNumber, SendText, TextbeltClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = match std::env::var("TEXTBELT_KEY") {
        Ok(value) => ApiKey::new(value)?,
        Err(_) => ApiKey::default(),
    };
    let phone_raw = std::env::var("TEXTBELT_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("TEXTBELT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textbelt example.".to_owned());

    let client = TextbeltClient::builder().key(key).build()?;
    let request = SendText::new(RawPhoneNumber::new(phone_raw)?, MessageText::new(message)?);

    let text_id = client.send_text(request).await?;
    println!("text id: {}", text_id.as_str());

    Ok(())
}
