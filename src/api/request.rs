use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::{RequestError, UNKNOWN_ERROR};

/// Body attached to an outgoing request.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// The transport writes the `multipart/form-data; boundary=...` header.
    Multipart(Form),
}

/// Method, headers and body for [`RequestClient::call`]. Defaults to a bare GET.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body)
            .map_err(|err| RequestError::InvalidRequest(format!("unserializable body: {err}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Typed JSON-over-HTTP wrapper shared by every domain client.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct RequestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RequestClient {
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, RequestError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| {
            RequestError::InvalidRequest(format!("bad base url `{base_url}`: {err}"))
        })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> Result<Url, RequestError> {
        let raw = if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        };
        Url::parse(&raw).map_err(|err| RequestError::InvalidRequest(format!("bad url `{raw}`: {err}")))
    }

    /// Issues one request and decodes the JSON answer as `T`.
    ///
    /// A non-2xx status never surfaces as a decode error: when the error body
    /// is unreadable the failure carries [`UNKNOWN_ERROR`] instead.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let url = self.url_for(endpoint)?;
        let RequestOptions {
            method,
            mut headers,
            body,
        } = options;

        log::debug!("{method} {url}");
        let mut request = self.http.request(method.clone(), url.clone());
        request = match body {
            RequestBody::Empty => request.headers(headers),
            RequestBody::Json(value) => request.headers(headers).json(&value),
            RequestBody::Multipart(form) => {
                headers.remove(CONTENT_TYPE);
                request.headers(headers).multipart(form)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        log::debug!("{method} {url} -> {status}");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = error_message(status, &body);
            log::warn!("{method} {url} failed with {status}: {message}");
            return Err(RequestError::Application {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RequestError> {
        self.call(endpoint, RequestOptions::get()).await
    }

    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(endpoint, RequestOptions::post().json(body)?).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T, RequestError> {
        self.call(endpoint, RequestOptions::post().multipart(form)).await
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        return UNKNOWN_ERROR.to_string();
    };

    parsed
        .error
        .filter(|text| !text.is_empty())
        .or(parsed.message.filter(|text| !text.is_empty()))
        .unwrap_or_else(|| {
            format!(
                "API Error: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            )
        })
}
