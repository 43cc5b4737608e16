use textbelt::{ApiKey, TextbeltClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = match std::env::var("TEXTBELT_KEY") {
        Ok(value) => ApiKey::new(value)?,
        Err(_) => ApiKey::default(),
    };

    let client = TextbeltClient::builder().key(key).build()?;
    let remaining = client.quota().await?;
    println!("quota remaining: {remaining}");

    Ok(())
}
