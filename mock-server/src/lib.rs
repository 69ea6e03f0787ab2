//! In-process replica of the GrowStocks REST API, for tests.
//!
//! Mirrors the upstream wire format: every endpoint is a POST taking a
//! form-encoded body and answering a `{"success": bool, ...}` JSON
//! envelope, with the upstream's numeric-string quirks (`balance`,
//! `status` and `discordID` are strings on the wire). Failures are
//! reported in-band with `success: false`, never through status codes.

use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, routing::post, Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// The client secret the mock accepts.
pub const SECRET: &str = "test-secret";
/// An authorization token the mock resolves to the seeded user.
pub const TOKEN: &str = "31G4k57rG3asdyyi5Lqk";
/// Id of the user behind [`TOKEN`].
pub const USER_ID: i64 = 1916;
/// Id of a pre-seeded, already-paid transaction.
pub const PAID_TRANSACTION: i64 = 7001;
/// The developer account's starting balance.
pub const STARTING_BALANCE: i64 = 100;

const CREATED_AT: &str = "2021-05-01 12:00:00";

#[derive(Clone)]
struct StoredTransaction {
    user: i64,
    party: i64,
    amount: i64,
    status: i64,
    date_time: String,
}

struct Ledger {
    transactions: HashMap<i64, StoredTransaction>,
    next_id: i64,
    balance: i64,
}

impl Ledger {
    fn seeded() -> Self {
        let mut transactions = HashMap::new();
        transactions.insert(
            PAID_TRANSACTION,
            StoredTransaction {
                user: USER_ID,
                party: 7,
                amount: 5,
                status: 1,
                date_time: CREATED_AT.to_string(),
            },
        );
        Self {
            transactions,
            next_id: PAID_TRANSACTION + 1,
            balance: STARTING_BALANCE,
        }
    }
}

type Db = Arc<RwLock<Ledger>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Ledger::seeded()));
    Router::new()
        .route("/v1/auth/user", post(auth_user))
        .route("/v1/pay/transaction/create", post(transaction_create))
        .route("/v1/pay/send", post(send))
        .route("/v1/pay/balance", post(balance))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(error: &str) -> Json<Value> {
    Json(json!({"success": false, "error": error}))
}

#[derive(Deserialize)]
struct AuthUserForm {
    secret: String,
    token: String,
    #[allow(dead_code)]
    scopes: Option<String>,
}

async fn auth_user(Form(form): Form<AuthUserForm>) -> Json<Value> {
    if form.secret != SECRET {
        return failure("Invalid secret");
    }
    if form.token != TOKEN {
        return failure("Invalid token");
    }
    Json(json!({
        "success": true,
        "user": {
            "id": USER_ID,
            "name": "BobDotCom",
            "growid": "Bob430",
            "balance": 3,
            "discordID": "690420846774321221",
        },
    }))
}

#[derive(Deserialize)]
struct TransactionForm {
    secret: String,
    // Create shape.
    user: Option<i64>,
    amount: Option<i64>,
    #[allow(dead_code)]
    notes: Option<String>,
    // Fetch shape — upstream serves fetches from the create path, keyed on
    // the payload.
    transaction: Option<i64>,
}

async fn transaction_create(
    State(db): State<Db>,
    Form(form): Form<TransactionForm>,
) -> Json<Value> {
    if form.secret != SECRET {
        return failure("Invalid secret");
    }

    if let Some(id) = form.transaction {
        let ledger = db.read().await;
        let Some(tx) = ledger.transactions.get(&id) else {
            return failure("Unknown transaction");
        };
        return Json(json!({
            "success": true,
            "transaction": {
                "id": id,
                "user": tx.user,
                "party": tx.party,
                "amount": tx.amount,
                "status": tx.status.to_string(),
                "date_time": tx.date_time,
            },
        }));
    }

    let (Some(user), Some(amount)) = (form.user, form.amount) else {
        return failure("Missing user or amount");
    };
    let mut ledger = db.write().await;
    let id = ledger.next_id;
    ledger.next_id += 1;
    ledger.transactions.insert(
        id,
        StoredTransaction {
            user,
            party: 7,
            amount,
            status: 0,
            date_time: CREATED_AT.to_string(),
        },
    );
    Json(json!({"success": true, "transaction": id}))
}

#[derive(Deserialize)]
struct SendForm {
    secret: String,
    party: i64,
    amount: i64,
    #[allow(dead_code)]
    notes: Option<String>,
}

async fn send(State(db): State<Db>, Form(form): Form<SendForm>) -> Json<Value> {
    if form.secret != SECRET {
        return failure("Invalid secret");
    }
    let mut ledger = db.write().await;
    if form.amount > ledger.balance {
        return failure("Insufficient balance");
    }
    ledger.balance -= form.amount;
    let id = ledger.next_id;
    ledger.next_id += 1;
    ledger.transactions.insert(
        id,
        StoredTransaction {
            user: form.party,
            party: form.party,
            amount: form.amount,
            status: 1,
            date_time: CREATED_AT.to_string(),
        },
    );
    Json(json!({"success": true, "transaction": id}))
}

#[derive(Deserialize)]
struct BalanceForm {
    secret: String,
}

async fn balance(State(db): State<Db>, Form(form): Form<BalanceForm>) -> Json<Value> {
    if form.secret != SECRET {
        return failure("Invalid secret");
    }
    let ledger = db.read().await;
    // Upstream sends the balance as a numeric string.
    Json(json!({"success": true, "balance": ledger.balance.to_string()}))
}
