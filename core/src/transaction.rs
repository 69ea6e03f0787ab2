//! The payment transaction value object.
//!
//! # Design
//! Like [`User`], one struct covers both the partial transaction handed back
//! by a create call (only the id) and the complete record from a fetch. The
//! nested user is exclusively owned and is always built from the bare
//! numeric id the wire carries — a transaction never embeds a full profile.
//! There is no back-reference to the client; URL construction and fetching
//! live on the `Pay` dispatcher and take the transaction by reference.

use serde_json::Value;
use time::macros::format_description;
use time::PrimitiveDateTime;

use crate::envelope::as_i64;
use crate::error::Error;
use crate::user::User;

/// Creation timestamps come as `YYYY-MM-DD HH:MM:SS`, with no offset.
const DATE_TIME_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A GrowStocks payment transaction, denominated in World Locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    /// The paying user. Populated from the bare user id on decode.
    pub user: Option<User>,
    /// The developer account's user id (the counterparty).
    pub party: Option<i64>,
    /// Amount in World Locks.
    pub amount: Option<i64>,
    /// Raw payment status code; see [`Transaction::paid`].
    pub status: Option<i64>,
    /// Creation time, parsed from the API's fixed format.
    pub datetime: Option<PrimitiveDateTime>,
}

impl Transaction {
    /// A transaction known only by id, as returned by a create call.
    pub fn partial(id: i64) -> Self {
        Self {
            id,
            user: None,
            party: None,
            amount: None,
            status: None,
            datetime: None,
        }
    }

    /// Decode a complete transaction from an API response body.
    ///
    /// All six wire keys (`id`, `user`, `party`, `amount`, `status`,
    /// `date_time`) are required. `user` is a bare numeric id and becomes a
    /// partial [`User`]; `status` accepts a numeric string.
    pub fn from_response(obj: &Value) -> Result<Self, Error> {
        let field = |key: &'static str| obj.get(key).ok_or(Error::Decode { field: key });

        let id = as_i64(field("id")?).ok_or(Error::Decode { field: "id" })?;
        let user = as_i64(field("user")?).ok_or(Error::Decode { field: "user" })?;
        let party = as_i64(field("party")?).ok_or(Error::Decode { field: "party" })?;
        let amount = as_i64(field("amount")?).ok_or(Error::Decode { field: "amount" })?;
        let status = as_i64(field("status")?).ok_or(Error::Decode { field: "status" })?;
        let date_time = field("date_time")?
            .as_str()
            .ok_or(Error::Decode { field: "date_time" })?;

        Ok(Self {
            id,
            user: Some(User::partial(user)),
            party: Some(party),
            amount: Some(amount),
            status: Some(status),
            datetime: Some(parse_date_time(date_time)?),
        })
    }

    /// Whether the transaction is paid: `Some(status != 0)` when the status
    /// is known, `None` for a partial transaction.
    pub fn paid(&self) -> Option<bool> {
        self.status.map(|status| status != 0)
    }
}

/// Parse the API's `YYYY-MM-DD HH:MM:SS` timestamp.
pub(crate) fn parse_date_time(value: &str) -> Result<PrimitiveDateTime, Error> {
    PrimitiveDateTime::parse(value, DATE_TIME_FORMAT).map_err(|source| Error::DateParse {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn partial_transaction_has_unknown_paid_state() {
        let tx = Transaction::partial(99);
        assert_eq!(tx.id, 99);
        assert!(tx.user.is_none());
        assert_eq!(tx.paid(), None);
    }

    #[test]
    fn decodes_documented_example() {
        let tx = Transaction::from_response(&json!({
            "id": 1,
            "user": 42,
            "party": 7,
            "amount": 5,
            "status": "1",
            "date_time": "2021-05-01 12:00:00",
        }))
        .unwrap();

        assert_eq!(tx.id, 1);
        assert_eq!(tx.user, Some(User::partial(42)));
        assert_eq!(tx.party, Some(7));
        assert_eq!(tx.amount, Some(5));
        assert_eq!(tx.status, Some(1));
        assert_eq!(tx.paid(), Some(true));
        assert_eq!(tx.datetime, Some(datetime!(2021-05-01 12:00:00)));
    }

    #[test]
    fn status_zero_means_unpaid() {
        let tx = Transaction::from_response(&json!({
            "id": 2,
            "user": 42,
            "party": 7,
            "amount": 5,
            "status": 0,
            "date_time": "2021-05-01 12:00:00",
        }))
        .unwrap();
        assert_eq!(tx.paid(), Some(false));
    }

    #[test]
    fn each_missing_key_names_itself() {
        let complete = json!({
            "id": 1,
            "user": 42,
            "party": 7,
            "amount": 5,
            "status": 1,
            "date_time": "2021-05-01 12:00:00",
        });
        for key in ["id", "user", "party", "amount", "status", "date_time"] {
            let mut obj = complete.clone();
            obj.as_object_mut().unwrap().remove(key);
            let err = Transaction::from_response(&obj).unwrap_err();
            match err {
                Error::Decode { field } => assert_eq!(field, key),
                other => panic!("expected Decode for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_date_time_is_a_parse_error() {
        let err = Transaction::from_response(&json!({
            "id": 1,
            "user": 42,
            "party": 7,
            "amount": 5,
            "status": 1,
            "date_time": "May 1st 2021, noon",
        }))
        .unwrap_err();
        assert!(matches!(err, Error::DateParse { .. }));
    }

    #[test]
    fn date_time_must_be_a_string() {
        let err = Transaction::from_response(&json!({
            "id": 1,
            "user": 42,
            "party": 7,
            "amount": 5,
            "status": 1,
            "date_time": 1619870400,
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Decode { field: "date_time" }));
    }

    #[test]
    fn parse_date_time_rejects_partial_dates() {
        assert!(parse_date_time("2021-05-01").is_err());
        assert!(parse_date_time("2021-05-01 12:00").is_err());
        assert!(parse_date_time("").is_err());
    }
}
