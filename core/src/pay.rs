//! The pay endpoint group.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::client::Config;
use crate::envelope::{self, as_i64};
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::transaction::Transaction;
use crate::user::User;

/// Dispatcher for the `/pay` endpoints. Obtained from
/// [`GrowStocks::pay`](crate::GrowStocks::pay); builds requests and parses
/// responses without touching the network.
#[derive(Debug)]
pub struct Pay<'a> {
    config: &'a Config,
    base: String,
}

impl<'a> Pay<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        let base = format!("{}/pay", config.api_base());
        Self { config, base }
    }

    /// Build the request creating a transaction requesting `amount` World
    /// Locks from `user`: POST `{pay}/transaction/create`.
    ///
    /// `notes` is omitted from the payload when `None`. The API caps notes
    /// at 50 characters; the client sends them as-is and lets the server
    /// enforce the cap.
    pub fn build_create_transaction(
        &self,
        user: &User,
        amount: i64,
        notes: Option<&str>,
    ) -> Result<HttpRequest, Error> {
        let mut pairs = vec![
            ("secret", self.config.secret.clone()),
            ("user", user.id.to_string()),
            ("amount", amount.to_string()),
        ];
        if let Some(notes) = notes {
            pairs.push(("notes", notes.to_string()));
        }
        let body = serde_urlencoded::to_string(pairs)?;
        Ok(HttpRequest::post_form(
            format!("{}/transaction/create", self.base),
            body,
        ))
    }

    /// Decode the create response. The `transaction` key is a bare id, so
    /// the result is a partial [`Transaction`] pending a fetch.
    pub fn parse_create_transaction(&self, response: &HttpResponse) -> Result<Transaction, Error> {
        let body = envelope::decode(response)?;
        let id = body
            .get("transaction")
            .and_then(as_i64)
            .ok_or(Error::Decode { field: "transaction" })?;
        Ok(Transaction::partial(id))
    }

    /// Build the URL to send a user to for paying `transaction`.
    ///
    /// Same redirect resolution and base64 encoding as
    /// [`Auth::authorization_url`](crate::auth::Auth::authorization_url),
    /// using the `pay` redirect template. Pure string construction.
    pub fn payment_url(
        &self,
        transaction: &Transaction,
        redirect_uri: Option<&str>,
    ) -> Result<String, Error> {
        let redirect = self
            .config
            .resolve_redirect(redirect_uri, self.config.default_redirects.pay.as_deref())?;
        let params = serde_urlencoded::to_string([
            ("client", self.config.client.to_string()),
            ("redirect_uri", STANDARD.encode(redirect.as_bytes())),
            ("transaction", transaction.id.to_string()),
        ])?;
        Ok(format!("{}?{}", self.config.payment_url, params))
    }

    /// Build the request fetching the full record of `transaction`.
    ///
    /// The upstream API serves fetches from the same
    /// `{pay}/transaction/create` path as creation, keyed on the payload
    /// shape. Preserved exactly for wire compatibility.
    pub fn build_fetch_transaction(&self, transaction: &Transaction) -> Result<HttpRequest, Error> {
        let body = serde_urlencoded::to_string([
            ("secret", self.config.secret.clone()),
            ("transaction", transaction.id.to_string()),
        ])?;
        Ok(HttpRequest::post_form(
            format!("{}/transaction/create", self.base),
            body,
        ))
    }

    /// Decode the fetch response into a complete [`Transaction`].
    pub fn parse_fetch_transaction(&self, response: &HttpResponse) -> Result<Transaction, Error> {
        let body = envelope::decode(response)?;
        let transaction = body
            .get("transaction")
            .ok_or(Error::Decode { field: "transaction" })?;
        Transaction::from_response(transaction)
    }

    /// Build the request sending `amount` World Locks to `user`: POST
    /// `{pay}/send`. Unlike creation, `notes` is always present in the
    /// payload, as an empty string when not given.
    pub fn build_send(
        &self,
        user: &User,
        amount: i64,
        notes: Option<&str>,
    ) -> Result<HttpRequest, Error> {
        let body = serde_urlencoded::to_string([
            ("secret", self.config.secret.clone()),
            ("party", user.id.to_string()),
            ("amount", amount.to_string()),
            ("notes", notes.unwrap_or_default().to_string()),
        ])?;
        Ok(HttpRequest::post_form(format!("{}/send", self.base), body))
    }

    /// Decode the send response. The API's answer is free-form beyond the
    /// envelope, so the whole decoded body is returned.
    pub fn parse_send(&self, response: &HttpResponse) -> Result<Value, Error> {
        envelope::decode(response)
    }

    /// Build the request querying the developer account's balance: POST
    /// `{pay}/balance`.
    pub fn build_balance(&self) -> Result<HttpRequest, Error> {
        let body = serde_urlencoded::to_string([("secret", self.config.secret.clone())])?;
        Ok(HttpRequest::post_form(format!("{}/balance", self.base), body))
    }

    /// Decode the balance response. The wire value may be a numeric string.
    pub fn parse_balance(&self, response: &HttpResponse) -> Result<i64, Error> {
        let body = envelope::decode(response)?;
        body.get("balance")
            .and_then(as_i64)
            .ok_or(Error::Decode { field: "balance" })
    }
}
