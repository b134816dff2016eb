mod api;
mod auth;
mod bus;
mod dto;
mod state;

use crate::{bus::BroadcastBus, state::AppState};
use axum::routing::{get, patch, post};
use fleetline::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

const PORT: u32 = 3000;
const THRESHOLD_ENV: &str = "FLEETLINE_PROXIMITY_KM";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match std::env::var(THRESHOLD_ENV) {
        Ok(value) => {
            let km: f64 = value.parse().unwrap_or_else(|_| {
                error!("{THRESHOLD_ENV} is not a number: {value}");
                std::process::exit(1);
            });
            Config::with_threshold(Distance::from_kilometers(km)).unwrap_or_else(|err| {
                error!("Invalid proximity threshold: {err}");
                std::process::exit(1);
            })
        }
        Err(_) => Config::default(),
    };
    info!(
        "Proximity threshold is {} km",
        config.proximity_threshold.as_kilometers()
    );

    let store = Arc::new(MemoryStore::new());
    let bus = Arc::new(BroadcastBus::new());
    let state = Arc::new(AppState::new(store, bus, config));

    let app = axum::Router::new()
        .route("/trips", post(api::create_trip).get(api::list_trips))
        .route("/trips/my", get(api::my_trips))
        .route("/trips/{id}", get(api::get_trip))
        .route("/trips/{id}/start", patch(api::start_trip))
        .route("/trips/{id}/end", patch(api::end_trip))
        .route("/trips/{id}/cancel", patch(api::cancel_trip))
        .route("/trips/{id}/delay", patch(api::delay_trip))
        .route("/trips/{id}/location", patch(api::update_location))
        .route(
            "/trips/{id}/passengers/{student_id}",
            patch(api::update_passenger),
        )
        .route("/events", get(api::events))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
