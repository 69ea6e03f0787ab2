//! The user profile value object.
//!
//! # Design
//! One struct covers both the "partial" user (only an id, e.g. a transaction
//! counterparty) and the complete profile decoded from an API response; the
//! `Option` fields are the completeness indicator. Decoding is manual over
//! `serde_json::Value` because the wire mixes encodings: the discord id is a
//! numeric string under the key `discordID`, while everything else is plain.
//! Missing optional keys decode to `None`, never to a sentinel.

use serde_json::{Map, Value};

use crate::envelope::as_i64;
use crate::error::Error;

/// A GrowStocks user profile.
///
/// Which optional fields are populated depends on the [`Scopes`] the user
/// authorized and on how the value was obtained: [`User::partial`] carries
/// only the id, [`User::from_response`] carries whatever the API returned.
///
/// [`Scopes`]: crate::Scopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub growid: Option<String>,
    pub balance: Option<i64>,
    pub discord_id: Option<i64>,
}

impl User {
    /// A user known only by id, pending a full fetch.
    pub fn partial(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
            growid: None,
            balance: None,
            discord_id: None,
        }
    }

    /// Decode a user object from an API response body.
    ///
    /// `id` is required and must be integer-coercible; all other keys are
    /// optional. The wire key for the discord id is `discordID` and its
    /// value is normalized from a numeric string to an integer.
    pub fn from_response(obj: &Value) -> Result<Self, Error> {
        let id = obj
            .get("id")
            .and_then(as_i64)
            .ok_or(Error::Decode { field: "id" })?;

        let string_field = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .map(|s| s.to_string())
        };

        Ok(Self {
            id,
            name: string_field("name"),
            email: string_field("email"),
            growid: string_field("growid"),
            balance: obj.get("balance").and_then(as_i64),
            discord_id: obj.get("discordID").and_then(as_i64),
        })
    }

    /// Encode this user back into the wire shape.
    ///
    /// Inverse of [`User::from_response`]: absent fields are omitted, and
    /// `discord_id` is stringified under `discordID`, matching how the API
    /// carries it.
    pub fn to_response(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".to_string(), Value::from(self.id));
        if let Some(name) = &self.name {
            obj.insert("name".to_string(), Value::from(name.clone()));
        }
        if let Some(email) = &self.email {
            obj.insert("email".to_string(), Value::from(email.clone()));
        }
        if let Some(growid) = &self.growid {
            obj.insert("growid".to_string(), Value::from(growid.clone()));
        }
        if let Some(balance) = self.balance {
            obj.insert("balance".to_string(), Value::from(balance));
        }
        if let Some(discord_id) = self.discord_id {
            obj.insert("discordID".to_string(), Value::from(discord_id.to_string()));
        }
        Value::Object(obj)
    }

    /// The user's fields as ordered `(name, value)` pairs, for dict-like
    /// export. The order is fixed: id, name, email, growid, balance,
    /// discord_id. Absent fields render as `null`.
    pub fn entries(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::from(self.id)),
            ("name", self.name.clone().map(Value::from).unwrap_or(Value::Null)),
            ("email", self.email.clone().map(Value::from).unwrap_or(Value::Null)),
            ("growid", self.growid.clone().map(Value::from).unwrap_or(Value::Null)),
            ("balance", self.balance.map(Value::from).unwrap_or(Value::Null)),
            ("discord_id", self.discord_id.map(Value::from).unwrap_or(Value::Null)),
        ]
    }
}
