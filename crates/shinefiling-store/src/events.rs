// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-process event bus.
//
// When an admin flips a service's visibility, every mounted view that shows
// the catalog must re-reconcile. The bus is a plain tokio broadcast channel
// handed to each subsystem at construction time; nothing reaches for a
// global.

use tokio::sync::broadcast;
use tracing::debug;

/// Broadcast channel capacity. Events are tiny and consumers drain fast;
/// a lagging receiver only misses refresh hints, never data.
const CHANNEL_CAPACITY: usize = 64;

/// App-wide change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The set of visible services changed (remote edit or local override).
    ServiceStatusChanged,
    /// The signed-in user changed (sign-in, sign-out, profile update).
    UserUpdated,
    /// The user's notification list changed (e.g. one was marked read).
    NotificationsChanged,
}

/// Cheaply cloneable handle to the app's broadcast channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Fire-and-forget: a bus
    /// with no listeners swallows the event silently.
    pub fn emit(&self, event: AppEvent) {
        if self.sender.receiver_count() > 0 {
            debug!(?event, "broadcasting app event");
            let _ = self.sender.send(event);
        }
    }

    /// Subscribe to events emitted after this call. Earlier events are not
    /// replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_receives_emitted_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        bus.emit(AppEvent::ServiceStatusChanged);
        assert_eq!(rx.try_recv(), Ok(AppEvent::ServiceStatusChanged));
    }

    #[test]
    fn emit_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.emit(AppEvent::UserUpdated);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn every_subscriber_sees_the_event() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        bus.emit(AppEvent::ServiceStatusChanged);
        assert_eq!(rx1.try_recv(), Ok(AppEvent::ServiceStatusChanged));
        assert_eq!(rx2.try_recv(), Ok(AppEvent::ServiceStatusChanged));
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let bus = EventBus::new();
        let mut early = bus.subscribe();
        bus.emit(AppEvent::UserUpdated);
        let mut late = bus.subscribe();
        assert_eq!(early.try_recv(), Ok(AppEvent::UserUpdated));
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn clones_share_the_same_channel() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let mut rx = bus.subscribe();
        clone.emit(AppEvent::ServiceStatusChanged);
        assert_eq!(rx.try_recv(), Ok(AppEvent::ServiceStatusChanged));
    }
}
