use fleetline::bus::{Event, NotificationBus};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 256;

/// Notification bus backed by a tokio broadcast channel.
///
/// One channel carries every topic, which keeps per-topic publish order
/// intact. Slow subscribers lag and lose events rather than slow down the
/// publisher.
pub struct BroadcastBus {
    tx: broadcast::Sender<Event>,
}

impl BroadcastBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl NotificationBus for BroadcastBus {
    fn publish(&self, event: Event) {
        // Send only fails when nobody is subscribed, which is fine.
        let _ = self.tx.send(event);
    }
}
