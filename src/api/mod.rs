mod chain;
mod contracts;
mod health;
mod miners;
pub mod models;
mod stats;
mod tx;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::get_consensus)
            .service(chain::post_tick)
            .service(tx::get_mempool)
            .service(tx::get_transactions)
            .service(tx::post_validate_tx)
            .service(contracts::get_contracts)
            .service(contracts::deploy_contract)
            .service(stats::get_stats)
            .service(miners::get_miners),
    );
}
