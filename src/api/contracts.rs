use actix_web::{HttpResponse, Responder, get, post, web};
use log::warn;

use super::models::{AppState, ContractsResponse};
use crate::contract::ContractDescriptor;

/// List all deployed contracts.
#[get("/contracts/")]
pub async fn get_contracts(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ContractsResponse {
        total: sim.contracts.len(),
        contracts: sim.contracts.clone(),
    })
}

/// Deploy a contract from a {name, type, creator} descriptor.
#[post("/contracts/")]
pub async fn deploy_contract(
    state: web::Data<AppState>,
    body: web::Json<ContractDescriptor>,
) -> impl Responder {
    let descriptor = body.into_inner();
    if descriptor.name.trim().is_empty() || descriptor.creator.trim().is_empty() {
        warn!("DEPLOY - rejected descriptor with empty name or creator");
        return HttpResponse::BadRequest().body("name and creator required");
    }
    let mut sim = state.simulation.lock().expect("mutex poisoned");
    let contract = sim.deploy_contract(&descriptor).clone();
    HttpResponse::Ok().json(contract)
}
