//! `reqwest` implementation of [`Backend`].
//!
//! Credentials are ambient: on native the client keeps a cookie jar shared by all
//! clones, in the browser every request is sent with `credentials: include` so the
//! session cookie crosses origins.

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{AuthPayload, LoginBody, Note, NoteDraft, NoteId, RegisterBody};

/// Typed HTTP client for the notes API.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let client = builder.build()?;

        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/notes/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of the notes list, with `search` only for a non-empty query.
    pub fn notes_url(&self, query: Option<&str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.endpoint("/notes/"))
            .map_err(|e| ApiError::Unknown(format!("invalid backend URL: {e}")))?;
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("search", q);
        }
        Ok(url)
    }

    fn note_url(&self, id: NoteId) -> String {
        self.endpoint(&format!("/notes/{id}/"))
    }

    fn request(&self, method: Method, url: impl reqwest::IntoUrl) -> RequestBuilder {
        let request = self.client.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Send and turn any non-2xx status into [`ApiError::Http`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!("Request failed before a response: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unknown(format!("could not decode response: {e}")))
    }
}

impl Backend for HttpBackend {
    async fn login(&self, username: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let request = self
            .request(Method::POST, self.endpoint("/auth/login/"))
            .json(&LoginBody { username, password });
        self.json(request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let request = self.request(Method::POST, self.endpoint("/auth/logout/"));
        self.send(request).await?;
        Ok(())
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        let request = self
            .request(Method::POST, self.endpoint("/auth/register/"))
            .json(&RegisterBody {
                username,
                email,
                password,
            });
        self.json(request).await
    }

    async fn fetch_notes(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let url = self.notes_url(query)?;
        self.json(self.request(Method::GET, url)).await
    }

    async fn create_note(&self, note: &NoteDraft) -> Result<Note, ApiError> {
        let request = self
            .request(Method::POST, self.endpoint("/notes/"))
            .json(note);
        self.json(request).await
    }

    async fn update_note(&self, id: NoteId, note: &NoteDraft) -> Result<Note, ApiError> {
        let request = self.request(Method::PUT, self.note_url(id)).json(note);
        self.json(request).await
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, self.note_url(id)))
            .await?;
        Ok(())
    }
}
