//! Client configuration and the network-free dispatch core.
//!
//! # Design
//! `GrowStocks` holds only the immutable [`Config`] and carries no mutable
//! state between calls. It hands out one dispatcher per endpoint group —
//! [`Auth`] and [`Pay`] — whose operations are split into `build_*` methods
//! producing an [`HttpRequest`] and `parse_*` methods consuming an
//! [`HttpResponse`]. The executors in [`blocking`] and [`aio`] run the
//! round-trip in between, so every decode and error-classification path is
//! shared between both execution modes by construction.
//!
//! [`HttpRequest`]: crate::HttpRequest
//! [`HttpResponse`]: crate::HttpResponse
//! [`blocking`]: crate::blocking
//! [`aio`]: crate::aio

use crate::auth::Auth;
use crate::error::Error;
use crate::pay::Pay;
use crate::scopes::Scopes;

pub const DEFAULT_API_URL: &str = "https://api.growstocks.xyz/v1";
pub const DEFAULT_AUTHORIZE_URL: &str = "https://auth.growstocks.xyz/user/authorize";
pub const DEFAULT_PAYMENT_URL: &str = "https://pay.growstocks.xyz/pay";

/// Default redirect targets for the authorization and payment flows.
///
/// `auth` and `pay` are URL templates; a `{0}` placeholder in them is
/// substituted with `site` at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultRedirects {
    pub site: String,
    pub auth: Option<String>,
    pub pay: Option<String>,
}

/// Client configuration: credentials, defaults, and endpoint URLs.
///
/// Treated as immutable for the duration of any in-flight call. The
/// endpoint URLs default to the production API and are overridable, which
/// is how the integration tests point the client at a local server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application/account id.
    pub client: i64,
    /// Client secret. Keep it out of logs and version control.
    pub secret: String,
    /// Scopes used by endpoints that take scopes when none are passed.
    pub default_scopes: Scopes,
    pub default_redirects: DefaultRedirects,
    pub api_url: String,
    pub authorize_url: String,
    pub payment_url: String,
}

impl Config {
    pub fn new(client: i64, secret: impl Into<String>) -> Self {
        Self {
            client,
            secret: secret.into(),
            default_scopes: Scopes::default(),
            default_redirects: DefaultRedirects::default(),
            api_url: DEFAULT_API_URL.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            payment_url: DEFAULT_PAYMENT_URL.to_string(),
        }
    }

    /// Resolve a redirect URI: the explicit argument wins, else the given
    /// template with `{0}` substituted by the configured site.
    pub(crate) fn resolve_redirect(
        &self,
        explicit: Option<&str>,
        template: Option<&str>,
    ) -> Result<String, Error> {
        match explicit {
            Some(uri) => Ok(uri.to_string()),
            None => {
                let template = template.ok_or(Error::MissingRedirectUri)?;
                Ok(template.replace("{0}", &self.default_redirects.site))
            }
        }
    }

    pub(crate) fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

/// The network-free GrowStocks client.
///
/// Owns the configuration and hands out the per-group dispatchers. Use
/// [`blocking::Client`] or [`aio::Client`] to actually issue requests, or
/// drive the `build_*` / `parse_*` pairs with any transport of your own.
///
/// [`blocking::Client`]: crate::blocking::Client
/// [`aio::Client`]: crate::aio::Client
#[derive(Debug, Clone)]
pub struct GrowStocks {
    config: Config,
}

impl GrowStocks {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The authorization endpoint group.
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.config)
    }

    /// The pay endpoint group.
    pub fn pay(&self) -> Pay<'_> {
        Pay::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_point_at_production() {
        let config = Config::new(913, "hunter2");
        assert_eq!(config.api_url, "https://api.growstocks.xyz/v1");
        assert_eq!(config.authorize_url, "https://auth.growstocks.xyz/user/authorize");
        assert_eq!(config.payment_url, "https://pay.growstocks.xyz/pay");
        assert_eq!(config.default_scopes, Scopes::default());
        assert_eq!(config.default_redirects, DefaultRedirects::default());
    }

    #[test]
    fn explicit_redirect_wins_over_template() {
        let mut config = Config::new(1, "s");
        config.default_redirects.auth = Some("https://{0}/cb".to_string());
        config.default_redirects.site = "example.com".to_string();
        let uri = config
            .resolve_redirect(Some("https://other/done"), config.default_redirects.auth.as_deref())
            .unwrap();
        assert_eq!(uri, "https://other/done");
    }

    #[test]
    fn template_substitutes_site_placeholder() {
        let mut config = Config::new(1, "s");
        config.default_redirects.site = "example.com".to_string();
        let uri = config
            .resolve_redirect(None, Some("https://{0}/cb"))
            .unwrap();
        assert_eq!(uri, "https://example.com/cb");
    }

    #[test]
    fn no_redirect_at_all_is_a_config_error() {
        let config = Config::new(1, "s");
        let err = config.resolve_redirect(None, None).unwrap_err();
        assert!(matches!(err, Error::MissingRedirectUri));
    }

    #[test]
    fn trailing_slash_is_stripped_from_api_base() {
        let mut config = Config::new(1, "s");
        config.api_url = "http://127.0.0.1:3000/v1/".to_string();
        assert_eq!(config.api_base(), "http://127.0.0.1:3000/v1");
    }
}
