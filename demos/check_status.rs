use std::io;

use textbelt::{TextId, TextbeltClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text_id = std::env::var("TEXTBELT_TEXT_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_TEXT_ID environment variable is required",
        )
    })?;

    let client = TextbeltClient::new()?;
    let status = client.status(&TextId::new(text_id)?).await?;
    println!("status: {status}");

    Ok(())
}
