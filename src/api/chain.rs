use actix_web::{HttpResponse, Responder, get, post, web};

use super::models::{AppState, ChainResponse, ConsensusResponse, TickResponse};

/// Get the full chain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        height: sim.height(),
        blocks: sim.blocks.clone(),
    })
}

/// Verdicts of the latest consensus replay, one per block.
#[get("/consensus/")]
pub async fn get_consensus(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ConsensusResponse {
        height: sim.height(),
        validations: sim.validations.clone(),
    })
}

/// Advance the simulation one step: admit a transaction, mine a block,
/// replay the chain, refresh the stats.
#[post("/tick/")]
pub async fn post_tick(state: web::Data<AppState>) -> impl Responder {
    let mut sim = state.simulation.lock().expect("mutex poisoned");
    let block = sim.tick();
    HttpResponse::Ok().json(TickResponse {
        number: block.number,
        hash: block.hash.clone(),
        nonce: block.nonce,
        difficulty: block.difficulty,
        transactions_count: block.transactions_count,
    })
}
