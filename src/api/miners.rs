use actix_web::{HttpResponse, Responder, get};

use super::models::MinersResponse;
use crate::miner;

/// The static miner registry.
#[get("/miners/")]
pub async fn get_miners() -> impl Responder {
    let miners = miner::registry();
    HttpResponse::Ok().json(MinersResponse {
        total: miners.len(),
        miners,
    })
}
