use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use log::{debug, warn};

use super::models::{
    AppState, MempoolResponse, TransactionsResponse, ValidateTxRequest, ValidateTxResponse,
};
use crate::transaction::{Transaction, validate_transaction};

/// Current mempool (pending transactions only).
#[get("/mempool/")]
pub async fn get_mempool(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    let pending = sim.pending();
    HttpResponse::Ok().json(MempoolResponse {
        size: pending.len(),
        transactions: pending,
    })
}

/// Full transaction history, confirmed and pending.
#[get("/transactions/")]
pub async fn get_transactions(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(TransactionsResponse {
        total: sim.transactions.len(),
        transactions: sim.transactions.clone(),
    })
}

/// Run the four-rule validator over a supplied transaction draft. Failure
/// is data, not an error status: every rule reports its own verdict.
#[post("/transactions/validate/")]
pub async fn post_validate_tx(body: web::Json<ValidateTxRequest>) -> impl Responder {
    let draft = Transaction::new(
        "tx-draft".to_string(),
        body.from.clone(),
        body.to.clone(),
        body.amount,
        body.gas,
        body.gas_price,
        body.nonce,
        Utc::now().timestamp_millis(),
    );
    let results = validate_transaction(&draft);
    let is_valid = results.iter().all(|r| r.is_valid);
    if is_valid {
        debug!("VALIDATE - draft from {} passed all rules", draft.from);
    } else {
        warn!(
            "VALIDATE - draft from {} failed {} rule(s)",
            draft.from,
            results.iter().filter(|r| !r.is_valid).count()
        );
    }
    HttpResponse::Ok().json(ValidateTxResponse { is_valid, results })
}
