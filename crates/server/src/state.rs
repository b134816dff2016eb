use crate::bus::BroadcastBus;
use fleetline::prelude::*;
use std::sync::Arc;

pub struct AppState {
    pub bus: Arc<BroadcastBus>,
    pub tracker: Tracker,
    pub query: TripQuery,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>, bus: Arc<BroadcastBus>, config: Config) -> Self {
        Self {
            tracker: Tracker::new(store.clone(), bus.clone()).with_config(config),
            query: TripQuery::new(store),
            bus,
        }
    }
}
