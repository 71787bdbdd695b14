use crate::api::error::ApiError;
use crate::api::models::{Musician, MusicianId, MutationAck, User};
use crate::api::session::Session;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

/// Operations the booking backend offers (allows faking for tests)
#[async_trait::async_trait]
pub trait BookingBackend: Send + Sync {
    async fn list_musicians(&self) -> Result<Vec<Musician>, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn add_to_prospects(&self, musician_id: MusicianId) -> Result<MutationAck, ApiError>;
    async fn remove_musician(&self, musician_id: MusicianId) -> Result<MutationAck, ApiError>;
}

/// Error body shape the API uses for failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// reqwest-backed client for the booking REST API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when the session holds one
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Same as `authorize`, but the endpoint is useless without a user
    fn require_auth(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self.session.token() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ApiError::MissingToken),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body = response.bytes().await?;
            if body.is_empty() {
                // Mutations may answer 204 with no body
                return Ok(serde_json::from_str("{}")?);
            }
            Ok(serde_json::from_slice(&body)?)
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn error_from(status: StatusCode, response: Response) -> ApiError {
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message.or(body.error))
                .filter(|m| !m.trim().is_empty()),
            Err(_) => None,
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("✗ Booking API rejected credentials: {}", status);
            ApiError::Unauthorized { message }
        } else {
            warn!("✗ Booking API error: {} {:?}", status, message);
            ApiError::Server { status, message }
        }
    }
}

#[async_trait::async_trait]
impl BookingBackend for ApiClient {
    async fn list_musicians(&self) -> Result<Vec<Musician>, ApiError> {
        let url = self.url("/musicians");
        debug!("GET {}", url);
        let request = self.authorize(self.client.get(&url));
        self.send(request).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        let url = self.url("/auth/me");
        debug!("GET {}", url);
        let request = self.require_auth(self.client.get(&url))?;
        self.send(request).await
    }

    async fn add_to_prospects(&self, musician_id: MusicianId) -> Result<MutationAck, ApiError> {
        let url = self.url(&format!("/auth/me/musicians/{}", musician_id));
        debug!("POST {}", url);
        let request = self.require_auth(self.client.post(&url))?;
        self.send(request).await
    }

    async fn remove_musician(&self, musician_id: MusicianId) -> Result<MutationAck, ApiError> {
        let url = self.url(&format!("/auth/me/musicians/{}", musician_id));
        debug!("DELETE {}", url);
        let request = self.require_auth(self.client.delete(&url))?;
        self.send(request).await
    }
}
