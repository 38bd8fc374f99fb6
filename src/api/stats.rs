use actix_web::{HttpResponse, Responder, get, web};

use super::models::AppState;

/// Latest network stats snapshot (recomputed on every tick).
#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let sim = state.simulation.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(sim.stats.clone())
}
