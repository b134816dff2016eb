use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fleetline::prelude::*;
use uuid::Uuid;

use crate::{
    api::status_for,
    auth::Actor,
    dto::{CreateTripRequest, LocationRequest, PassengerAction, PassengerActionRequest, TripDto},
    state::AppState,
};

pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(request): Json<CreateTripRequest>,
) -> Result<Response, StatusCode> {
    actor.require_dispatcher()?;
    let trip = state
        .tracker
        .create_trip(request.into_spec())
        .map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn list_trips(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
    _actor: Actor,
) -> Result<Response, StatusCode> {
    let mut filter = TripFilter::default();
    if let Some(driver) = params.get("driver") {
        filter.driver = Some(driver.parse().map_err(|_| StatusCode::BAD_REQUEST)?);
    }
    if let Some(date) = params.get("date") {
        filter.date = Some(date.parse().map_err(|_| StatusCode::BAD_REQUEST)?);
    }
    if let Some(status) = params.get("status") {
        let status: TripStatus = status.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        filter.status = Some(status);
    }
    let trips: Vec<_> = state
        .query
        .list(filter)
        .iter()
        .map(TripDto::from)
        .collect();
    Ok(Json(trips).into_response())
}

pub async fn my_trips(
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Response, StatusCode> {
    let trips: Vec<_> = state
        .query
        .list_for_driver(actor.id)
        .iter()
        .map(TripDto::from)
        .collect();
    Ok(Json(trips).into_response())
}

pub async fn get_trip(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    _actor: Actor,
) -> Result<Response, StatusCode> {
    let trip = state.query.get(id).map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn start_trip(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Response, StatusCode> {
    let trip = state.tracker.start(id, actor.id).map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn end_trip(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Response, StatusCode> {
    let trip = state.tracker.end(id, actor.id).map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn cancel_trip(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Response, StatusCode> {
    actor.require_dispatcher()?;
    let trip = state.tracker.cancel(id).map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn delay_trip(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
) -> Result<Response, StatusCode> {
    actor.require_dispatcher()?;
    let trip = state.tracker.mark_delayed(id).map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}

pub async fn update_location(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(request): Json<LocationRequest>,
) -> Result<Response, StatusCode> {
    let location = Coordinate {
        latitude: request.lat,
        longitude: request.lng,
    };
    let outcome = state
        .tracker
        .ingest(id, location, request.timestamp, actor.id)
        .map_err(status_for)?;
    // Rejected pings are expected no-ops, not failures the device must handle.
    let accepted = matches!(outcome, IngestOutcome::Accepted { .. });
    Ok(Json(serde_json::json!({ "accepted": accepted })).into_response())
}

pub async fn update_passenger(
    Path((id, student_id)): Path<(Uuid, Uuid)>,
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(request): Json<PassengerActionRequest>,
) -> Result<Response, StatusCode> {
    let trip = match request.action {
        PassengerAction::Pickup => state.tracker.record_pickup(id, student_id, actor.id),
        PassengerAction::Drop => state.tracker.record_drop(id, student_id, actor.id),
        PassengerAction::Absent => state.tracker.mark_absent(id, student_id, actor.id),
    }
    .map_err(status_for)?;
    Ok(Json(TripDto::from(&trip)).into_response())
}
