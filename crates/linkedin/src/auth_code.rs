use crate::{
    auth_urls,
    clients::convert_result,
    http::{BaseHttpClient, Form, HttpClient},
    join_scopes, params, ClientError, ClientResult, Config, Credentials, OAuth, Token,
};

use std::collections::HashMap;

use libs::log;
use libs::url::Url;
use maybe_async::maybe_async;

/// OAuth2 authorization code flow against LinkedIn.
///
/// The client never keeps the tokens it obtains: they are handed back to the
/// caller, who builds a [`LinkedIn`](crate::LinkedIn) client with them.
/// LinkedIn expects the client id and secret in the form body of token
/// requests, never in an HTTP basic `Authorization` header.
#[derive(Clone, Debug, Default)]
pub struct AuthCodeLinkedIn {
    pub creds: Credentials,
    pub oauth: OAuth,
    pub config: Config,
    pub(crate) http: HttpClient,
}

impl AuthCodeLinkedIn {
    /// Builds a new [`AuthCodeLinkedIn`] given a pair of client credentials and
    /// OAuth information.
    #[must_use]
    pub fn new(creds: Credentials, oauth: OAuth) -> Self {
        Self {
            creds,
            oauth,
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(creds: Credentials, oauth: OAuth, config: Config) -> Self {
        Self {
            creds,
            oauth,
            config,
            ..Default::default()
        }
    }

    /// Joins `path` to the authentication prefix.
    #[must_use]
    pub fn auth_url(&self, path: &str) -> String {
        let mut base = self.config.auth_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + path
    }

    /// Returns the URL needed to authorize the current client as the first step
    /// in the authorization flow.
    pub fn get_authorize_url(&self) -> ClientResult<String> {
        log::info!("Building auth URL");

        if self.oauth.state.is_empty() {
            return Err(ClientError::InvalidState(
                "the state must not be empty".to_owned(),
            ));
        }

        let scopes = join_scopes(&self.oauth.scopes);

        let mut payload: HashMap<&str, &str> = HashMap::new();
        payload.insert(params::CLIENT_ID, &self.creds.id);
        payload.insert(params::RESPONSE_TYPE, params::RESPONSE_TYPE_CODE);
        payload.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        payload.insert(params::SCOPE, &scopes);
        payload.insert(params::STATE, &self.oauth.state);

        let request_url = self.auth_url(auth_urls::AUTHORIZE);
        let parsed = Url::parse_with_params(&request_url, payload)?;
        Ok(parsed.into())
    }

    /// Parse the response code in the given response url. If the URL cannot be
    /// parsed or the `code` parameter is not present, this will return `None`.
    ///
    /// As the [RFC 6749 indicates](https://datatracker.ietf.org/doc/html/rfc6749#section-4.1),
    /// the state should be the same between the request and the callback. This
    /// will also return `None` if this is not true.
    #[must_use]
    pub fn parse_response_code(&self, url: &str) -> Option<String> {
        let url = Url::parse(url.trim()).ok()?;
        let params = url.query_pairs().collect::<HashMap<_, _>>();
        let code = params.get("code")?;

        // Making sure the state is the same
        let state = params.get("state").map(|state| &**state);
        if state != Some(self.oauth.state.as_str()) {
            log::error!("Request state does not match the callback state");
            return None;
        }

        Some(code.to_string())
    }

    /// Sends a request to the token endpoint and parses its answer.
    #[maybe_async]
    async fn fetch_access_token(&self, payload: &Form<'_>) -> ClientResult<Token> {
        let request_url = self.auth_url(auth_urls::TOKEN);
        let response = self.http.post_form(&request_url, None, payload).await?;

        let mut token: Token = convert_result(&response)?;
        token.stamp_expiration();
        Ok(token)
    }

    /// Obtains a user access token given a code, as part of the OAuth
    /// authentication.
    #[maybe_async]
    pub async fn request_token(&self, code: &str) -> ClientResult<Token> {
        log::info!("Requesting Auth Code token");

        let mut data = Form::new();
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_AUTH_CODE);
        data.insert(params::CODE, code);
        data.insert(params::REDIRECT_URI, &self.oauth.redirect_uri);
        data.insert(params::CLIENT_ID, &self.creds.id);
        data.insert(params::CLIENT_SECRET, &self.creds.secret);

        self.fetch_access_token(&data).await
    }

    /// Exchanges a refresh token for a new access token. Only available to
    /// applications with programmatic refresh tokens enabled.
    ///
    /// The returned token keeps `refresh_token` if LinkedIn doesn't send a
    /// new one.
    #[maybe_async]
    pub async fn refresh_token(&self, refresh_token: &str) -> ClientResult<Token> {
        log::info!("Refreshing access token");

        let mut data = Form::new();
        data.insert(params::GRANT_TYPE, params::GRANT_TYPE_REFRESH_TOKEN);
        data.insert(params::REFRESH_TOKEN, refresh_token);
        data.insert(params::CLIENT_ID, &self.creds.id);
        data.insert(params::CLIENT_SECRET, &self.creds.secret);

        let mut token = self.fetch_access_token(&data).await?;
        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token.to_owned());
        }
        Ok(token)
    }

    /// Tries to open the authorization URL in the user's browser, and return
    /// the obtained code.
    ///
    /// Note: this method requires the `cli` feature.
    #[cfg(feature = "cli")]
    pub fn get_code_from_user(&self, url: &str) -> ClientResult<String> {
        log::info!("Opening browser with auth URL");
        match webbrowser::open(url) {
            Ok(_) => println!("Opened {url} in your browser."),
            Err(why) => eprintln!(
                "Error when trying to open an URL in your browser: {why:?}. \
                 Please navigate here manually: {url}"
            ),
        }

        log::info!("Prompting user for code");
        println!("Please enter the URL you were redirected to: ");
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let code = self
            .parse_response_code(&input)
            .ok_or_else(|| ClientError::Cli("unable to parse the response code".to_string()))?;

        Ok(code)
    }

    /// Opens up the authorization URL in the user's browser so that it can
    /// authenticate. It reads from the standard input the redirect URI
    /// in order to obtain the access token.
    ///
    /// Note: this method requires the `cli` feature.
    #[cfg(feature = "cli")]
    #[maybe_async]
    pub async fn prompt_for_token(&self, url: &str) -> ClientResult<Token> {
        let code = self.get_code_from_user(url)?;
        self.request_token(&code).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scopes;

    fn client() -> AuthCodeLinkedIn {
        let oauth = OAuth {
            state: "fdsafdsfa".to_owned(),
            redirect_uri: "http://localhost/callback".to_owned(),
            scopes: scopes!("r_liteprofile"),
        };
        AuthCodeLinkedIn::new(Credentials::new("id", "secret"), oauth)
    }

    #[test]
    fn test_auth_url() {
        let linkedin = client();
        assert_eq!(
            linkedin.auth_url(auth_urls::TOKEN),
            "https://www.linkedin.com/oauth/v2/accessToken"
        );
    }

    #[test]
    fn test_parse_response_code() {
        let linkedin = client();
        assert_eq!(
            linkedin.parse_response_code("http://localhost/callback?code=abc&state=fdsafdsfa\n"),
            Some("abc".to_owned())
        );
        assert_eq!(
            linkedin.parse_response_code("http://localhost/callback?code=abc&state=other"),
            None
        );
        assert_eq!(
            linkedin.parse_response_code("http://localhost/callback?state=fdsafdsfa"),
            None
        );
    }

    #[test]
    fn test_empty_state_is_refused() {
        let mut linkedin = client();
        linkedin.oauth.state.clear();
        assert!(matches!(
            linkedin.get_authorize_url(),
            Err(ClientError::InvalidState(_))
        ));
    }
}
