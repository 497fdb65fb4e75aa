//! Core catalog client: request building, dispatch and envelope handling

use moi_api_contract::ApiEnvelope;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::options::CallOptions;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Low-level client for the catalog service.
///
/// Every endpoint method issues exactly one HTTP request, unwraps the
/// response envelope and returns its `data` payload. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RawClient {
    http_client: HttpClient,
    base_url: String,
    credentials: Credentials,
    user_agent: String,
    default_headers: HeaderMap,
    call_options: CallOptions,
}

pub(crate) enum RequestBody {
    /// No body and no JSON content negotiation headers.
    Raw,
    /// JSON request; `None` sends the JSON headers without a body.
    Json(Option<Value>),
    Multipart(Form),
}

impl RawClient {
    /// Create a client with default options
    pub fn new(base_url: impl AsRef<str>, api_key: impl AsRef<str>) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, api_key)?)
    }

    /// Create a client from `MOI_BASE_URL` / `MOI_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http_client = match config.http_client {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = config.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
            user_agent: config.user_agent,
            default_headers: config.default_headers,
            call_options: CallOptions::default(),
        })
    }

    /// Normalized base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn call_options(&self) -> &CallOptions {
        &self.call_options
    }

    /// Return a copy of this client whose requests carry `options`.
    pub fn with_call_options(&self, options: CallOptions) -> Self {
        let mut scoped = self.clone();
        scoped.call_options = self.call_options.merged(&options);
        scoped
    }

    /// Issue a JSON POST request and decode the enveloped response payload
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::POST, path, Some(body)).await
    }

    /// Issue a JSON GET request and decode the enveloped response payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(Method::GET, path, None).await
    }

    /// Issue a multipart/form-data POST request and decode the enveloped
    /// response payload
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let response = self
            .dispatch(Method::POST, path, RequestBody::Multipart(form))
            .await?;
        Self::parse_envelope(response).await
    }

    /// Issue a GET request and return the response once its status is known
    /// to be successful. The body is left unread.
    pub async fn get_raw(&self, path: &str) -> Result<Response> {
        let response = self.dispatch(Method::GET, path, RequestBody::Raw).await?;
        Self::ensure_success(response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.dispatch(method, path, RequestBody::Json(body)).await?;
        Self::parse_envelope(response).await
    }

    /// POST a payload that must not be null.
    pub(crate) async fn send_payload<B, T>(
        &self,
        operation: &str,
        path: &str,
        request: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = require_payload(operation, request)?;
        self.send_json(Method::POST, path, Some(body)).await
    }

    #[instrument(level = "debug", skip(self, body))]
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Response> {
        let url = self.build_url(path)?;
        let json = matches!(body, RequestBody::Json(_));
        let mut headers = self.build_headers(json)?;

        let mut request = self.http_client.request(method, url.clone());
        match body {
            RequestBody::Raw | RequestBody::Json(None) => {}
            RequestBody::Json(Some(value)) => {
                request = request.body(serde_json::to_vec(&value)?);
            }
            RequestBody::Multipart(form) => {
                headers.remove(CONTENT_TYPE);
                request = request.multipart(form);
            }
        }

        debug!(%url, "sending request");
        let response = request.headers(headers).send().await?;
        debug!(status = %response.status(), "received response");
        Ok(response)
    }

    pub(crate) fn build_url(&self, path: &str) -> Result<Url> {
        let mut joined = self.base_url.clone();
        if !path.starts_with('/') {
            joined.push('/');
        }
        joined.push_str(path);

        let mut url = Url::parse(&joined)?;
        if !self.call_options.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.call_options.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub(crate) fn build_headers(&self, json: bool) -> Result<HeaderMap> {
        let mut headers = self.default_headers.clone();
        self.credentials.apply_to_headers(&mut headers)?;

        if !self.user_agent.is_empty() {
            headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        }
        if let Some(request_id) = &self.call_options.request_id {
            headers.insert(
                HeaderName::from_static(REQUEST_ID_HEADER),
                header_value(request_id)?,
            );
        }
        for (name, value) in &self.call_options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidHeader(e.to_string()))?;
            headers.insert(name, header_value(value)?);
        }
        if json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        Ok(headers)
    }

    pub(crate) async fn parse_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!(%status, "catalog request failed");
            return Err(Error::Http {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let envelope: ApiEnvelope = serde_json::from_slice(&body).map_err(|_| Error::Http {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })?;

        if !envelope.is_success() {
            warn!(
                code = envelope.code(),
                request_id = envelope.request_id(),
                "catalog service returned an error"
            );
            return Err(Error::Api {
                code: envelope.code().to_string(),
                message: envelope.message().to_string(),
                request_id: envelope.request_id().to_string(),
                http_status: status,
            });
        }

        serde_json::from_value(envelope.into_data()).map_err(Error::from)
    }

    pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, "catalog request failed");
        Err(Error::Http { status, body })
    }
}

/// Serialize `request`, rejecting a JSON null payload.
pub(crate) fn require_payload<B: Serialize + ?Sized>(operation: &str, request: &B) -> Result<Value> {
    let value = serde_json::to_value(request)?;
    if value.is_null() {
        return Err(Error::NilRequest(format!(
            "{} requires a request payload",
            operation
        )));
    }
    Ok(value)
}

/// Reject an empty path identifier.
pub(crate) fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} cannot be empty", name)));
    }
    Ok(value)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(e.to_string()))
}
