//! Async execution of the client operations, over reqwest.
//!
//! The exact mirror of [`blocking`](crate::blocking): each method builds
//! through the same sans-IO dispatchers and parses through the same
//! routines, so a resolved future yields the identical value or the
//! identical classified error as the blocking call. Suspension happens only
//! at the transport call and the body read.

use serde_json::Value;
use tracing::debug;

use crate::client::{Config, GrowStocks};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::scopes::Scopes;
use crate::transaction::Transaction;
use crate::user::User;

/// Asynchronous GrowStocks client.
///
/// The reqwest client is cheaply cloneable and safe for concurrent
/// independent requests.
#[derive(Debug, Clone)]
pub struct Client {
    core: GrowStocks,
    http: reqwest::Client,
}

impl Client {
    /// Build a client with a default reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized or the system root
    /// certificates cannot be loaded (the documented behavior of
    /// [`reqwest::Client::new`]). Use [`Client::with_http`] with a client
    /// from [`reqwest::Client::builder`] to handle that failure instead.
    pub fn new(config: Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Use a caller-configured reqwest client (proxies, timeouts, ...).
    pub fn with_http(config: Config, http: reqwest::Client) -> Self {
        Self {
            core: GrowStocks::new(config),
            http,
        }
    }

    /// The underlying network-free client, for direct build/parse access.
    pub fn core(&self) -> &GrowStocks {
        &self.core
    }

    /// See [`Auth::authorization_url`](crate::auth::Auth::authorization_url).
    /// Pure construction; not async because nothing here suspends.
    pub fn authorization_url(
        &self,
        redirect_uri: Option<&str>,
        scopes: Option<&Scopes>,
    ) -> Result<String, Error> {
        self.core.auth().authorization_url(redirect_uri, scopes)
    }

    /// See [`Pay::payment_url`](crate::pay::Pay::payment_url). Pure
    /// construction; not async because nothing here suspends.
    pub fn payment_url(
        &self,
        transaction: &Transaction,
        redirect_uri: Option<&str>,
    ) -> Result<String, Error> {
        self.core.pay().payment_url(transaction, redirect_uri)
    }

    /// Exchange an authorization token for the user's profile.
    pub async fn fetch_user(&self, token: &str, scopes: Option<&Scopes>) -> Result<User, Error> {
        let request = self.core.auth().build_fetch_user(token, scopes)?;
        let response = self.execute(request).await?;
        self.core.auth().parse_fetch_user(&response)
    }

    /// Create a transaction requesting `amount` World Locks from `user`.
    pub async fn create_transaction(
        &self,
        user: &User,
        amount: i64,
        notes: Option<&str>,
    ) -> Result<Transaction, Error> {
        let request = self.core.pay().build_create_transaction(user, amount, notes)?;
        let response = self.execute(request).await?;
        self.core.pay().parse_create_transaction(&response)
    }

    /// Fetch the full record of `transaction`.
    pub async fn fetch_transaction(&self, transaction: &Transaction) -> Result<Transaction, Error> {
        let request = self.core.pay().build_fetch_transaction(transaction)?;
        let response = self.execute(request).await?;
        self.core.pay().parse_fetch_transaction(&response)
    }

    /// Send `amount` World Locks to `user`. Returns the raw response
    /// envelope.
    pub async fn send(
        &self,
        user: &User,
        amount: i64,
        notes: Option<&str>,
    ) -> Result<Value, Error> {
        let request = self.core.pay().build_send(user, amount, notes)?;
        let response = self.execute(request).await?;
        self.core.pay().parse_send(&response)
    }

    /// The developer account's current balance, in World Locks.
    pub async fn balance(&self) -> Result<i64, Error> {
        let request = self.core.pay().build_balance()?;
        let response = self.execute(request).await?;
        self.core.pay().parse_balance(&response)
    }

    /// One HTTP round-trip. The only suspension point in the async path.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        debug!(method = ?request.method, url = %request.url, "issuing request");
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(Box::new(e)))?;
        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}
