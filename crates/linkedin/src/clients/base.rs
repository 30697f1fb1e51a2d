use crate::{
    http::{BaseHttpClient, HttpClient, Query},
    pipeline::{ApiRequest, Method, RequestPipeline},
    ClientResult, Config,
};

use std::fmt;

use libs::log;
use libs::serde_json::Value;
use libs::url::Url;
use maybe_async::maybe_async;

/// This trait implements the basic endpoint methods shared by every facade.
///
/// All of them go through [`BaseClient::send`], so there is a single place
/// where requests are authenticated.
#[maybe_async]
pub trait BaseClient
where
    Self: Send + Sync + Clone + fmt::Debug,
{
    fn get_config(&self) -> &Config;
    fn get_http(&self) -> &HttpClient;
    fn get_pipeline(&self) -> &RequestPipeline;

    /// Joins `path` to the API prefix and adds `query`.
    fn api_url(&self, path: &str, query: &Query<'_>) -> ClientResult<Url> {
        let url = format!("{}{}", self.get_config().api_base_url, path);
        let url = if query.is_empty() {
            Url::parse(&url)?
        } else {
            Url::parse_with_params(&url, query)?
        };
        Ok(url)
    }

    /// Authenticates the request and sends it, returning the raw body.
    async fn send(&self, request: ApiRequest) -> ClientResult<String> {
        let request = self.get_pipeline().prepare(request);
        log::info!("{} {}", request.method, request.url.path());

        let http = self.get_http();
        let url = request.url.as_str();
        let headers = Some(&request.headers);
        let body = request.body.as_ref().unwrap_or(&Value::Null);

        let response = match request.method {
            Method::Get => http.get(url, headers).await,
            Method::Post => http.post(url, headers, body).await,
            Method::Put => http.put(url, headers, body).await,
            Method::Delete => http.delete(url, headers).await,
        };
        Ok(response?)
    }

    async fn api_get(&self, path: &str, query: &Query<'_>) -> ClientResult<String> {
        let url = self.api_url(path, query)?;
        self.send(ApiRequest::new(Method::Get, url)).await
    }

    async fn api_post(&self, path: &str, payload: &Value) -> ClientResult<String> {
        let url = self.api_url(path, &Query::new())?;
        self.send(ApiRequest::new(Method::Post, url).with_body(payload.clone()))
            .await
    }

    async fn api_put(&self, path: &str, payload: &Value) -> ClientResult<String> {
        let url = self.api_url(path, &Query::new())?;
        self.send(ApiRequest::new(Method::Put, url).with_body(payload.clone()))
            .await
    }

    async fn api_delete(&self, path: &str) -> ClientResult<String> {
        let url = self.api_url(path, &Query::new())?;
        self.send(ApiRequest::new(Method::Delete, url)).await
    }
}
