//! Client library for the GrowStocks HTTP API: OAuth-style user
//! authorization and a World-Lock-denominated payment system.
//!
//! # Overview
//! Construct authorization URLs, exchange authorization tokens for user
//! profiles, create/fetch/send payment transactions, and query the account
//! balance. Every remote operation is a single POST against the REST API,
//! answered with a `{"success": bool, ...}` JSON envelope.
//!
//! # Design
//! - The core is sans-IO: each operation is split into a `build_*` method
//!   producing an [`HttpRequest`] and a `parse_*` method consuming an
//!   [`HttpResponse`], neither touching the network.
//! - [`blocking::Client`] (ureq) and [`aio::Client`] (reqwest) are thin
//!   executors over the same build/parse pairs, so both execution modes
//!   decode and classify errors identically by construction.
//! - Value objects ([`Scopes`], [`User`], [`Transaction`]) use `Option`
//!   fields as the completeness indicator instead of a partial/full type
//!   split; `partial(id)` constructs the id-only form.
//!
//! # Example
//! ```no_run
//! use growstocks::{blocking, Config, Scopes};
//!
//! let mut config = Config::new(1916, "client-secret");
//! config.default_scopes = Scopes::new(true, false, true, true);
//! let client = blocking::Client::new(config);
//!
//! let url = client.authorization_url(Some("https://example.com/callback"), None)?;
//! // ...send the user to `url`, receive the token on the callback...
//! let user = client.fetch_user("31G4k57rG3asdyyi5Lqk", None)?;
//! println!("{:?} has {:?} World Locks", user.name, user.balance);
//! # Ok::<(), growstocks::Error>(())
//! ```

pub mod aio;
pub mod auth;
pub mod blocking;
pub mod client;
mod envelope;
pub mod error;
pub mod http;
pub mod pay;
pub mod scopes;
pub mod transaction;
pub mod user;

pub use auth::Auth;
pub use client::{Config, DefaultRedirects, GrowStocks};
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use pay::Pay;
pub use scopes::Scopes;
pub use transaction::Transaction;
pub use user::User;
