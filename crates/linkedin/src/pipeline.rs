//! Authentication of outgoing API requests.
//!
//! LinkedIn does not accept the OAuth2 bearer `Authorization` header. The
//! access token travels as the `oauth2_access_token` query parameter instead,
//! and every request asks for JSON with `x-li-format`, which the API honours
//! over `Content-Type`.

use crate::{http::Headers, ClientError, ClientResult};

use std::fmt;

use libs::serde_json::Value;
use libs::strum::{Display, IntoStaticStr};
use libs::url::Url;

pub const ACCESS_TOKEN_PARAM: &str = "oauth2_access_token";
pub const FORMAT_HEADER: &str = "x-li-format";
pub const FORMAT_JSON: &str = "json";
const AUTHORIZATION_HEADER: &str = "authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An API request before it is handed to the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_owned(), value.to_owned());
        self
    }
}

/// Rewrites every request of a [`LinkedIn`](crate::LinkedIn) client so that
/// it is authenticated with the client's access token.
#[derive(Clone)]
pub struct RequestPipeline {
    access_token: String,
}

impl fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl RequestPipeline {
    /// # Errors
    ///
    /// [`ClientError::InvalidAccessToken`] if `access_token` is empty.
    pub fn new(access_token: impl Into<String>) -> ClientResult<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(ClientError::InvalidAccessToken);
        }
        Ok(Self { access_token })
    }

    /// Applies the rewrite, whatever the verb and body:
    ///
    /// * `oauth2_access_token` is appended to the query string, keeping the
    ///   existing parameters;
    /// * every `Authorization` header is removed, whatever its case;
    /// * `x-li-format: json` is set, replacing a previous value.
    #[must_use]
    pub fn prepare(&self, mut request: ApiRequest) -> ApiRequest {
        request
            .url
            .query_pairs_mut()
            .append_pair(ACCESS_TOKEN_PARAM, &self.access_token);

        request.headers.retain(|name, _| {
            !name.eq_ignore_ascii_case(AUTHORIZATION_HEADER)
                && !name.eq_ignore_ascii_case(FORMAT_HEADER)
        });
        request
            .headers
            .insert(FORMAT_HEADER.to_owned(), FORMAT_JSON.to_owned());

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libs::serde_json::json;

    fn request(url: &str) -> ApiRequest {
        ApiRequest::new(Method::Get, Url::parse(url).unwrap())
    }

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(matches!(
            RequestPipeline::new(""),
            Err(ClientError::InvalidAccessToken)
        ));
    }

    #[test]
    fn test_token_starts_the_query() {
        let pipeline = RequestPipeline::new("T").unwrap();
        let prepared = pipeline.prepare(request("https://api.linkedin.com/v2/me"));
        assert_eq!(
            prepared.url.as_str(),
            "https://api.linkedin.com/v2/me?oauth2_access_token=T"
        );
    }

    #[test]
    fn test_token_is_appended_to_the_query() {
        let pipeline = RequestPipeline::new("T").unwrap();
        let prepared = pipeline.prepare(request(
            "https://api.linkedin.com/v2/people/~/connections?start=0&count=10",
        ));
        assert_eq!(
            prepared.url.query(),
            Some("start=0&count=10&oauth2_access_token=T")
        );
    }

    #[test]
    fn test_authorization_is_removed() {
        let pipeline = RequestPipeline::new("T").unwrap();
        let prepared = pipeline.prepare(
            request("https://api.linkedin.com/v2/me")
                .with_header("Authorization", "Bearer T")
                .with_header("AUTHORIZATION", "Basic abc")
                .with_header("X-LI-FORMAT", "xml")
                .with_header("Accept-Language", "en-US"),
        );

        let mut names = prepared.headers.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, vec!["Accept-Language", "x-li-format"]);
        assert_eq!(prepared.headers["x-li-format"], "json");
    }

    #[test]
    fn test_body_and_method_are_kept() {
        let pipeline = RequestPipeline::new("T").unwrap();
        let body = json!({ "comment": "hi" });
        let original = ApiRequest::new(
            Method::Post,
            Url::parse("https://api.linkedin.com/v2/people/~/shares").unwrap(),
        )
        .with_body(body.clone());

        let prepared = pipeline.prepare(original);
        assert_eq!(prepared.method, Method::Post);
        assert_eq!(prepared.body, Some(body));
        assert_eq!(prepared.headers["x-li-format"], "json");
    }

    #[test]
    fn test_token_is_not_printed() {
        let pipeline = RequestPipeline::new("secret-token").unwrap();
        assert!(!format!("{pipeline:?}").contains("secret-token"));
    }
}
