//! Blocking execution of the client operations, over ureq.
//!
//! # Design
//! A thin executor: every method builds the request through the sans-IO
//! dispatchers, runs exactly one HTTP round-trip, and hands the response
//! back to the matching `parse_*` method. No decode logic lives here, so
//! this client and [`aio::Client`](crate::aio::Client) cannot drift apart.
//!
//! The agent is built with `http_status_as_error(false)`: the API reports
//! failures in-band through the envelope, so 4xx/5xx bodies must come back
//! as data for the parse layer to classify.

use serde_json::Value;
use tracing::debug;

use crate::client::{Config, GrowStocks};
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::scopes::Scopes;
use crate::transaction::Transaction;
use crate::user::User;

/// Synchronous GrowStocks client.
///
/// Owns the shared configuration and a ureq agent; the agent reuses
/// connections across calls and is safe for concurrent independent
/// requests.
pub struct Client {
    core: GrowStocks,
    agent: ureq::Agent,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            core: GrowStocks::new(config),
            agent,
        }
    }

    /// The underlying network-free client, for direct build/parse access.
    pub fn core(&self) -> &GrowStocks {
        &self.core
    }

    /// See [`Auth::authorization_url`](crate::auth::Auth::authorization_url).
    /// Pure construction; never touches the network.
    pub fn authorization_url(
        &self,
        redirect_uri: Option<&str>,
        scopes: Option<&Scopes>,
    ) -> Result<String, Error> {
        self.core.auth().authorization_url(redirect_uri, scopes)
    }

    /// See [`Pay::payment_url`](crate::pay::Pay::payment_url). Pure
    /// construction; never touches the network.
    pub fn payment_url(
        &self,
        transaction: &Transaction,
        redirect_uri: Option<&str>,
    ) -> Result<String, Error> {
        self.core.pay().payment_url(transaction, redirect_uri)
    }

    /// Exchange an authorization token for the user's profile.
    pub fn fetch_user(&self, token: &str, scopes: Option<&Scopes>) -> Result<User, Error> {
        let request = self.core.auth().build_fetch_user(token, scopes)?;
        let response = self.execute(request)?;
        self.core.auth().parse_fetch_user(&response)
    }

    /// Create a transaction requesting `amount` World Locks from `user`.
    /// Returns a partial [`Transaction`]; pass it to
    /// [`fetch_transaction`](Client::fetch_transaction) for the full record.
    pub fn create_transaction(
        &self,
        user: &User,
        amount: i64,
        notes: Option<&str>,
    ) -> Result<Transaction, Error> {
        let request = self.core.pay().build_create_transaction(user, amount, notes)?;
        let response = self.execute(request)?;
        self.core.pay().parse_create_transaction(&response)
    }

    /// Fetch the full record of `transaction`.
    pub fn fetch_transaction(&self, transaction: &Transaction) -> Result<Transaction, Error> {
        let request = self.core.pay().build_fetch_transaction(transaction)?;
        let response = self.execute(request)?;
        self.core.pay().parse_fetch_transaction(&response)
    }

    /// Send `amount` World Locks to `user`. Returns the raw response
    /// envelope.
    pub fn send(&self, user: &User, amount: i64, notes: Option<&str>) -> Result<Value, Error> {
        let request = self.core.pay().build_send(user, amount, notes)?;
        let response = self.execute(request)?;
        self.core.pay().parse_send(&response)
    }

    /// The developer account's current balance, in World Locks.
    pub fn balance(&self) -> Result<i64, Error> {
        let request = self.core.pay().build_balance()?;
        let response = self.execute(request)?;
        self.core.pay().parse_balance(&response)
    }

    /// One HTTP round-trip. The only place in the blocking path that does
    /// I/O.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        debug!(method = ?request.method, url = %request.url, "issuing request");
        let result = match request.method {
            HttpMethod::Get => self.agent.get(&request.url).call(),
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(request.body.as_deref().unwrap_or_default().as_bytes())
            }
        };
        let mut response = result.map_err(|e| Error::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Transport(Box::new(e)))?;
        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}
