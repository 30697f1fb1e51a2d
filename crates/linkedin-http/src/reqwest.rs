//! The client implementation for the reqwest HTTP client, which is async by
//! default.

use super::{without_query, BaseHttpClient, ErrorKind, Form, Headers};

use libs::log;
use libs::serde_json::Value;
use maybe_async::async_impl;
use reqwest::{Method, RequestBuilder};

#[derive(thiserror::Error, Debug)]
pub enum ReqwestError {
    /// The request couldn't be completed because there was an error when trying
    /// to do so. The URL is stripped, since its query holds the access token.
    #[error("request: {0}")]
    Client(reqwest::Error),

    /// The request was made, but the server returned an unsuccessful status
    /// code, such as 404 or 503.
    #[error("status code {status}: {body}")]
    StatusCode { status: u16, body: String },
}

impl From<reqwest::Error> for ReqwestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Client(err.without_url())
    }
}

impl ReqwestError {
    /// Category of the failed response, `None` for transport failures.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::StatusCode { status, .. } => Some(ErrorKind::from_status(*status)),
            Self::Client(_) => None,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct ReqwestClient {
    /// reqwest needs an instance of its client to perform requests.
    client: reqwest::Client,
}

impl ReqwestClient {
    async fn request<D>(
        &self,
        method: Method,
        url: &str,
        headers: Option<&Headers>,
        add_data: D,
    ) -> Result<String, ReqwestError>
    where
        D: Fn(RequestBuilder) -> RequestBuilder,
    {
        log::info!("Making request {} {}", method, without_query(url));
        let mut request = self.client.request(method, url);

        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }
        }

        request = add_data(request);

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ReqwestError::StatusCode {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_impl]
impl BaseHttpClient for ReqwestClient {
    type Error = ReqwestError;

    #[inline]
    async fn get(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error> {
        self.request(Method::GET, url, headers, |req| req).await
    }

    #[inline]
    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        self.request(Method::POST, url, headers, |req| req.json(payload))
            .await
    }

    #[inline]
    async fn post_form(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Form<'_>,
    ) -> Result<String, Self::Error> {
        self.request(Method::POST, url, headers, |req| req.form(payload))
            .await
    }

    #[inline]
    async fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        self.request(Method::PUT, url, headers, |req| req.json(payload))
            .await
    }

    #[inline]
    async fn delete(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error> {
        self.request(Method::DELETE, url, headers, |req| req).await
    }
}
