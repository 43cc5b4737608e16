//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiKey, Envelope, GenerateOtp, MessageStatus, OtpCode, RawPhoneNumber, SendText, TextId,
    UserId, ValidationError, VerifyOtp,
};

const DEFAULT_BASE_URL: &str = "https://textbelt.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn read(response: reqwest::Response) -> Result<HttpResponse, TextbeltError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>> {
        Box::pin(async move {
            let mut request = self.client.get(url);
            if !query.is_empty() {
                request = request.query(&query);
            }
            let response = request.send().await.map_err(map_reqwest_error)?;
            Self::read(response).await
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TextbeltError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .form(&params)
                .send()
                .await
                .map_err(map_reqwest_error)?;
            Self::read(response).await
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TextbeltError {
    if err.is_timeout() {
        TextbeltError::Timeout(Box::new(err))
    } else {
        TextbeltError::Transport(Box::new(err))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextbeltClient`].
///
/// This error preserves:
/// - transport failures (connect, TLS, timeouts),
/// - HTTP-level failures whose body is not a Textbelt envelope,
/// - API-level failures (`"success": false`) with the vendor's error text,
/// - validation/parse failures.
pub enum TextbeltError {
    /// HTTP client / transport failure (DNS, TLS, connection reset, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code with a body that is not a JSON envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Textbelt answered with `"success": false`; `message` is its `error` text.
    #[error("API error: {message}")]
    Api { message: String },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A successful envelope lacks the field the operation returns.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("invalid base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TextbeltError {
    /// `true` when the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextbeltClient`].
///
/// Every setter overrides the value set before it, so the last call wins.
pub struct TextbeltClientBuilder {
    key: ApiKey,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for TextbeltClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextbeltClientBuilder {
    /// Create a builder with the free-tier key, `https://textbelt.com` and a 5 second timeout.
    pub fn new() -> Self {
        Self {
            key: ApiKey::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Use your own API key instead of the free-tier `textbelt` key.
    pub fn key(mut self, key: ApiKey) -> Self {
        self.key = key;
        self
    }

    /// Override the Textbelt base URL (e.g. a self-hosted instance or a test server).
    ///
    /// Endpoint paths are appended to it, so a path prefix is preserved.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to each entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextbeltClient`].
    pub fn build(self) -> Result<TextbeltClient, TextbeltError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextbeltError::Transport(Box::new(err)))?;

        Ok(TextbeltClient {
            key: self.key,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, TextbeltError> {
    let url = Url::parse(raw.trim()).map_err(|err| TextbeltError::InvalidBaseUrl {
        url: raw.to_owned(),
        source: Some(err),
    })?;
    if url.cannot_be_a_base() {
        return Err(TextbeltError::InvalidBaseUrl {
            url: raw.to_owned(),
            source: None,
        });
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Textbelt client.
///
/// This type orchestrates form/query encoding, the HTTP round trip, and envelope
/// mapping. Each method is a single request; nothing is retried or cached.
///
/// Endpoints, relative to the base URL:
/// - `GET /quota/{key}`
/// - `POST /text`
/// - `GET /status/{id}`
/// - `POST /otp/generate`
/// - `GET /otp/verify`
pub struct TextbeltClient {
    key: ApiKey,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl TextbeltClient {
    /// Create a client with the default key, base URL, and timeout.
    ///
    /// For more customization, use [`TextbeltClient::builder`].
    pub fn new() -> Result<Self, TextbeltError> {
        TextbeltClientBuilder::new().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> TextbeltClientBuilder {
        TextbeltClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Number of messages that can still be sent with the configured key.
    ///
    /// The envelope's `success` flag is not consulted; a missing count reads as `0`.
    pub async fn quota(&self) -> Result<i64, TextbeltError> {
        let url = self.endpoint(&["quota", self.key.as_str()])?;
        let response = self.http.get(&url, Vec::new()).await?;
        let envelope = decode_envelope("quota", response)?;
        Ok(envelope.quota_remaining.unwrap_or(0))
    }

    /// Send an SMS and return the id Textbelt assigned to it.
    ///
    /// Errors:
    /// - [`TextbeltError::Api`] when Textbelt returns `"success": false`,
    /// - [`TextbeltError::MissingField`] when a successful reply has no `textId`.
    pub async fn send_text(&self, request: SendText) -> Result<TextId, TextbeltError> {
        let url = self.endpoint(&["text"])?;
        let params = crate::transport::encode_send_text_form(&self.key, &request);
        let response = self.http.post_form(&url, params).await?;
        let envelope = ensure_success("text", decode_envelope("text", response)?)?;

        envelope
            .text_id
            .and_then(|id| TextId::new(id).ok())
            .ok_or(TextbeltError::MissingField(TextId::FIELD))
    }

    /// Look up the delivery status of a previously sent message.
    ///
    /// Unrecognized status strings come back as [`MessageStatus::Other`].
    pub async fn status(&self, id: &TextId) -> Result<MessageStatus, TextbeltError> {
        let url = self.endpoint(&["status", id.as_str()])?;
        let response = self.http.get(&url, Vec::new()).await?;
        let envelope = decode_envelope("status", response)?;
        Ok(MessageStatus::from_vendor(envelope.status.as_deref()))
    }

    /// Send a one-time code to `phone` using Textbelt's default message, lifetime and length.
    pub async fn generate_otp(
        &self,
        phone: RawPhoneNumber,
        userid: UserId,
    ) -> Result<OtpCode, TextbeltError> {
        self.generate_custom_otp(GenerateOtp::new(phone, userid)).await
    }

    /// Send a one-time code with the given [`crate::OtpOptions`] and return the code.
    ///
    /// Options that are not set are left out of the request.
    pub async fn generate_custom_otp(
        &self,
        request: GenerateOtp,
    ) -> Result<OtpCode, TextbeltError> {
        let url = self.endpoint(&["otp", "generate"])?;
        let params = crate::transport::encode_generate_otp_form(&self.key, &request);
        let response = self.http.post_form(&url, params).await?;
        let envelope = ensure_success("otp/generate", decode_envelope("otp/generate", response)?)?;

        envelope
            .otp
            .and_then(|otp| OtpCode::new(otp).ok())
            .ok_or(TextbeltError::MissingField(OtpCode::FIELD))
    }

    /// Check a code the user entered; `Ok(false)` means the code is wrong or expired.
    pub async fn verify_otp(&self, request: VerifyOtp) -> Result<bool, TextbeltError> {
        let url = self.endpoint(&["otp", "verify"])?;
        let query = crate::transport::encode_verify_otp_query(&self.key, &request);
        let response = self.http.get(&url, query).await?;
        let envelope = ensure_success("otp/verify", decode_envelope("otp/verify", response)?)?;
        Ok(envelope.is_valid_otp.unwrap_or(false))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<String, TextbeltError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TextbeltError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }
}

fn decode_envelope(
    endpoint: &'static str,
    response: HttpResponse,
) -> Result<Envelope, TextbeltError> {
    tracing::debug!(endpoint, status = response.status, "textbelt response");

    match crate::transport::decode_envelope_json_response(&response.body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(TextbeltError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(TextbeltError::Parse(Box::new(err))),
    }
}

fn ensure_success(endpoint: &'static str, envelope: Envelope) -> Result<Envelope, TextbeltError> {
    if envelope.success {
        return Ok(envelope);
    }
    let message = envelope.error.unwrap_or_default();
    tracing::warn!(endpoint, error = %message, "textbelt reported failure");
    Err(TextbeltError::Api { message })
}
