//! The client implementation for the ureq HTTP client, which is blocking.

use super::{without_query, BaseHttpClient, ErrorKind, Form, Headers};

use libs::log;
use libs::serde_json::Value;
use maybe_async::sync_impl;
use ureq::{Request, Response};

#[derive(thiserror::Error, Debug)]
pub enum UreqError {
    /// The request couldn't be completed because there was an error when trying
    /// to do so. Only the kind and message are kept: ureq's own error shows
    /// the URL, and with it the access token.
    #[error("transport: {0}")]
    Transport(String),

    /// There was an error when trying to decode the response
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The request was made, but the server returned an unsuccessful status
    /// code, such as 404 or 503.
    #[error("status code {status}: {body}")]
    StatusCode { status: u16, body: String },
}

impl From<ureq::Transport> for UreqError {
    fn from(transport: ureq::Transport) -> Self {
        let message = match transport.message() {
            Some(message) => format!("{}: {message}", transport.kind()),
            None => transport.kind().to_string(),
        };
        Self::Transport(message)
    }
}

impl UreqError {
    /// Category of the failed response, `None` for transport failures.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::StatusCode { status, .. } => Some(ErrorKind::from_status(*status)),
            Self::Transport(_) | Self::Io(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl UreqClient {
    /// The request handling in ureq is split in three parts:
    ///
    /// * The initial request (POST, GET, ...) is created with the agent
    /// * The headers are set
    /// * The request is sent, with the payload given by the closure
    fn request<D>(
        &self,
        mut request: Request,
        headers: Option<&Headers>,
        send_request: D,
    ) -> Result<String, UreqError>
    where
        D: Fn(Request) -> Result<Response, ureq::Error>,
    {
        if let Some(headers) = headers {
            for (key, val) in headers {
                request = request.set(key, val);
            }
        }

        log::info!(
            "Making request {} {}",
            request.method(),
            without_query(request.url())
        );
        match send_request(request) {
            Ok(response) => response.into_string().map_err(Into::into),
            Err(ureq::Error::Status(status, response)) => Err(UreqError::StatusCode {
                status,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => Err(transport.into()),
        }
    }
}

#[sync_impl]
impl BaseHttpClient for UreqClient {
    type Error = UreqError;

    #[inline]
    fn get(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error> {
        let request = self.agent.get(url);
        self.request(request, headers, Request::call)
    }

    #[inline]
    fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        let request = self.agent.post(url);
        self.request(request, headers, |req| req.send_json(payload))
    }

    #[inline]
    fn post_form(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Form<'_>,
    ) -> Result<String, Self::Error> {
        let request = self.agent.post(url);
        let payload = payload
            .iter()
            .map(|(key, val)| (*key, *val))
            .collect::<Vec<_>>();
        self.request(request, headers, |req| req.send_form(&payload))
    }

    #[inline]
    fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        let request = self.agent.put(url);
        self.request(request, headers, |req| req.send_json(payload))
    }

    #[inline]
    fn delete(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error> {
        let request = self.agent.delete(url);
        self.request(request, headers, Request::call)
    }
}
