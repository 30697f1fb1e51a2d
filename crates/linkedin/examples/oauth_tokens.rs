//! Obtains an access token through the authorization code flow, with the
//! scopes the facades need.
//!
//! Set LINKEDIN_CLIENT_ID, LINKEDIN_CLIENT_SECRET and LINKEDIN_REDIRECT_URI in
//! an .env file or export them manually as environmental variables for this to
//! work.

use linkedin::{scopes, Credentials, LinkedInServiceProvider, OAuth};

#[tokio::main]
async fn main() {
    // You can use any logger for debugging.
    libs::env_logger::init();

    // The credentials must be available in the environment. Enable the
    // `env-file` feature in order to read them from an `.env` file.
    let creds = Credentials::from_env().unwrap();

    let scopes = scopes!("r_liteprofile", "r_emailaddress", "w_member_social");
    let oauth = OAuth::from_env(scopes).unwrap();

    let provider = LinkedInServiceProvider::new(creds, oauth);

    let url = provider.oauth().get_authorize_url().unwrap();
    // This function requires the `cli` feature enabled.
    let token = provider.oauth().prompt_for_token(&url).await.unwrap();

    println!("Access token: {}", token.access_token);
    if let Some(expires_at) = token.expires_at {
        println!("Expires at: {expires_at}");
    }

    // Programmatic refresh tokens are available for a limited set of
    // partners. If this feature has been enabled for your application,
    // see Programmatic Refresh Tokens for instructions.
    // link: https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow?tabs=HTTPS1
    if let Some(refresh_token) = &token.refresh_token {
        println!("Refresh token: {refresh_token}");
    }
}
