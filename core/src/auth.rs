//! The authorization endpoint group.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::client::Config;
use crate::envelope;
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::scopes::Scopes;
use crate::user::User;

/// Dispatcher for the `/auth` endpoints. Obtained from
/// [`GrowStocks::auth`](crate::GrowStocks::auth); builds requests and parses
/// responses without touching the network.
#[derive(Debug)]
pub struct Auth<'a> {
    config: &'a Config,
    base: String,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        let base = format!("{}/auth", config.api_base());
        Self { config, base }
    }

    /// Build the URL to send a user to for authorization.
    ///
    /// `redirect_uri` falls back to the configured `auth` redirect template
    /// (with `{0}` substituted by the site value); with neither, this fails
    /// with [`Error::MissingRedirectUri`]. `scopes` falls back to the client
    /// default. The redirect URI is base64-encoded (standard alphabet)
    /// before being form-encoded into the query string.
    ///
    /// Pure string construction; no request is issued.
    pub fn authorization_url(
        &self,
        redirect_uri: Option<&str>,
        scopes: Option<&Scopes>,
    ) -> Result<String, Error> {
        let redirect = self
            .config
            .resolve_redirect(redirect_uri, self.config.default_redirects.auth.as_deref())?;
        let scopes = scopes.copied().unwrap_or(self.config.default_scopes);
        let params = serde_urlencoded::to_string([
            ("client", self.config.client.to_string()),
            ("scopes", scopes.to_string()),
            ("redirect_uri", STANDARD.encode(redirect.as_bytes())),
        ])?;
        Ok(format!("{}?{}", self.config.authorize_url, params))
    }

    /// Build the request exchanging an authorization `token` for the user's
    /// profile: POST `{auth}/user` with `secret`, `token` and `scopes`.
    ///
    /// The `scopes` key is omitted entirely when no scopes resolve; with a
    /// configured default scope set that branch is never taken, but the
    /// payload contract allows it.
    pub fn build_fetch_user(
        &self,
        token: &str,
        scopes: Option<&Scopes>,
    ) -> Result<HttpRequest, Error> {
        let scopes = scopes.copied().or(Some(self.config.default_scopes));
        let mut pairs = vec![
            ("secret", self.config.secret.clone()),
            ("token", token.to_string()),
        ];
        if let Some(scopes) = scopes {
            pairs.push(("scopes", scopes.to_string()));
        }
        let body = serde_urlencoded::to_string(pairs)?;
        Ok(HttpRequest::post_form(format!("{}/user", self.base), body))
    }

    /// Decode the `fetch_user` response: envelope check, then the `user`
    /// object.
    pub fn parse_fetch_user(&self, response: &HttpResponse) -> Result<User, Error> {
        let body = envelope::decode(response)?;
        let user = body.get("user").ok_or(Error::Decode { field: "user" })?;
        if !matches!(user, Value::Object(_)) {
            return Err(Error::Decode { field: "user" });
        }
        User::from_response(user)
    }
}
