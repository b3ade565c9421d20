use crate::domain::model::ErrorBody;
use crate::domain::paging::PageRequest;
use crate::domain::ports::{ConfigProvider, DEFAULT_ACCEPT_LANGUAGE};
use crate::utils::error::{ActError, Result};
use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, IntoUrl, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Client for the engine's runtime REST API, e.g. `http://localhost:8080/v1`.
#[derive(Debug, Clone)]
pub struct ActClient {
    client: Client,
    base_url: Url,
    authorization: HeaderValue,
    accept_language: HeaderValue,
}

impl ActClient {
    pub fn new(token: impl AsRef<str>, base_url: impl AsRef<str>) -> Result<Self> {
        Self::from_parts(Client::new(), token.as_ref(), base_url.as_ref(), DEFAULT_ACCEPT_LANGUAGE)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()?;

        Self::from_parts(
            client,
            config.token(),
            config.base_url(),
            config.accept_language(),
        )
    }

    fn from_parts(
        client: Client,
        token: &str,
        base_url: &str,
        accept_language: &str,
    ) -> Result<Self> {
        if token.trim().is_empty() || base_url.trim().is_empty() {
            return Err(ActError::validation(
                "token and base URL are required to create a client",
            ));
        }

        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ActError::config(format!("base URL cannot carry a path: {}", base_url)));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ActError::config("token contains characters not allowed in a header"))?;
        authorization.set_sensitive(true);

        let accept_language = HeaderValue::from_str(accept_language)
            .map_err(|_| ActError::config(format!("invalid Accept-Language: {}", accept_language)))?;

        Ok(Self {
            client,
            base_url,
            authorization,
            accept_language,
        })
    }

    /// Swap the underlying HTTP client, e.g. one with a proxy or custom TLS roots.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_accept_language(mut self, accept_language: &str) -> Result<Self> {
        self.accept_language = HeaderValue::from_str(accept_language)
            .map_err(|_| ActError::config(format!("invalid Accept-Language: {}", accept_language)))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL of the admin API: `admin` is inserted before the first `v1` path segment.
    pub fn admin_base_url(&self) -> Result<Url> {
        let mut segments: Vec<&str> = self
            .base_url
            .path_segments()
            .map(Iterator::collect)
            .unwrap_or_default();
        let version = segments.iter().position(|s| *s == "v1").ok_or_else(|| {
            ActError::config(format!(
                "base URL has no /v1 segment to derive the admin API from: {}",
                self.base_url
            ))
        })?;
        segments.insert(version, "admin");

        let mut url = self.base_url.clone();
        url.set_path(&format!("/{}", segments.join("/")));
        Ok(url)
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        join_segments(&self.base_url, segments)
    }

    pub(crate) fn admin_endpoint(&self, segments: &[&str]) -> Result<Url> {
        join_segments(&self.admin_base_url()?, segments)
    }

    pub(crate) fn paged_endpoint(&self, collection: &str, page: Option<PageRequest>) -> Result<Url> {
        let mut url = self.endpoint(&[collection])?;
        if let Some(page) = page.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(page.query_pairs());
        }
        Ok(url)
    }

    /// Build a request; a payload is encoded as the JSON body.
    pub fn new_request<U, P>(&self, method: Method, url: U, payload: Option<&P>) -> Result<Request>
    where
        U: IntoUrl,
        P: Serialize + ?Sized,
    {
        let mut builder = self.client.request(method, url);
        if let Some(payload) = payload {
            builder = builder.body(serde_json::to_vec(payload)?);
        }
        Ok(builder.build()?)
    }

    /// Send a JSON request and decode the JSON response. An empty body yields `T::default()`.
    pub async fn send<T>(&self, request: Request) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.dispatch(self.json_headers(request)).await?;
        let body = response.bytes().await?;
        tracing::trace!("Response body: {}", String::from_utf8_lossy(&body));

        if body.is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a JSON request whose success body is of no interest.
    pub async fn send_empty(&self, request: Request) -> Result<()> {
        self.dispatch(self.json_headers(request)).await?;
        Ok(())
    }

    /// Send a request for binary content. The request's own content type is kept.
    pub async fn get_image(&self, mut request: Request) -> Result<Vec<u8>> {
        request
            .headers_mut()
            .insert(ACCEPT_LANGUAGE, self.accept_language.clone());
        let request = self.authorize(request);

        let response = self.dispatch(request).await?;
        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes of image data", body.len());
        Ok(body.to_vec())
    }

    fn json_headers(&self, mut request: Request) -> Request {
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT_LANGUAGE, self.accept_language.clone());
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }
        self.authorize(request)
    }

    fn authorize(&self, mut request: Request) -> Request {
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.authorization.clone());
        request
    }

    async fn dispatch(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(
            "Request: {} {} ({} byte body)",
            method,
            url,
            request
                .body()
                .and_then(|b| b.as_bytes())
                .map_or(0, <[u8]>::len)
        );

        let response = self.client.execute(request).await.inspect_err(|e| {
            tracing::warn!("Request {} {} failed: {}", method, url, e);
        })?;

        let status = response.status();
        tracing::debug!("Response: {} {} -> {}", method, url, status);

        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let body = if raw.trim().is_empty() {
            ErrorBody::default()
        } else {
            serde_json::from_str(&raw).unwrap_or_default()
        };
        tracing::warn!("Engine returned {} for {} {}: {}", status, method, url, raw);

        Err(ActError::ApiError {
            method,
            url,
            status,
            body,
            raw,
        })
    }
}

pub(crate) fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ActError::validation(message));
    }
    Ok(())
}

fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ActError::config(format!("base URL cannot carry a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
