mod api;
mod blockchain;
mod contract;
mod hash;
mod miner;
mod transaction;

use std::env;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    // 0 disables the in-process ticker; the UI then drives POST /tick/.
    let tick_interval_ms: u64 = env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    println!("⛓️ Starting chain simulator at http://{host}:{port}");

    let state = web::Data::new(AppState::default());

    if tick_interval_ms > 0 {
        info!("TICKER - mining every {tick_interval_ms} ms");
        let ticker_state = state.clone();
        actix_web::rt::spawn(async move {
            let mut interval =
                actix_web::rt::time::interval(Duration::from_millis(tick_interval_ms));
            loop {
                interval.tick().await;
                let mut sim = ticker_state.simulation.lock().expect("mutex poisoned");
                sim.tick();
            }
        });
    }

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
