//! Core domain types for the track-play log.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the raw play event, the identifier aliases, and the `EventLog`
//! that groups events by listener.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up listeners with tracks

/// Unique identifier for a listener; acts as the group key for the whole run
pub type ListenerId = String;

/// Unique identifier for a played track
pub type TrackId = u32;

// =============================================================================
// Play Events
// =============================================================================

/// One track-play record from the input log.
///
/// Created once per input line and owned by its listener's group in the
/// `EventLog` until it is folded into a profile. The timestamp stays a raw
/// string here; the summarizer is the only consumer of its hour component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub track_id: TrackId,
    /// Local date and time of play, `"YYYY-MM-DD HH:MM:SS"`
    pub timestamp: String,
    /// 1 if playback happened on a mobile device, 0 otherwise
    pub is_mobile: u8,
    /// Listener's geographic code at play time; carried through, never aggregated
    pub zip_code: String,
}

// =============================================================================
// EventLog - Events Grouped by Listener
// =============================================================================

/// All play events of a run, grouped by listener.
///
/// This is the heart of the data-loader crate: a single-pass group-by over
/// the parsed `(ListenerId, PlayEvent)` pairs. A listener only exists as a
/// key if at least one of their events was seen, so every group is non-empty
/// by construction.
#[derive(Debug, Default)]
pub struct EventLog {
    pub(crate) listener_events: HashMap<ListenerId, Vec<PlayEvent>>,
}

impl EventLog {
    /// Creates a new, empty EventLog
    pub fn new() -> Self {
        Self {
            listener_events: HashMap::new(),
        }
    }

    /// Append one event to its listener's group.
    ///
    /// Amortized O(1): the entry API grows the listener's Vec in place
    /// instead of rebuilding the group on every insert.
    pub fn insert_event(&mut self, listener: ListenerId, event: PlayEvent) {
        self.listener_events.entry(listener).or_default().push(event);
    }

    /// Get all events for a listener, in input order.
    ///
    /// Returns an empty slice if the listener was never seen.
    pub fn listener_events(&self, listener: &str) -> &[PlayEvent] {
        self.listener_events
            .get(listener)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over every listener and their event group.
    ///
    /// Iteration order is unspecified; nothing downstream depends on it.
    pub fn iter(&self) -> impl Iterator<Item = (&ListenerId, &[PlayEvent])> {
        self.listener_events
            .iter()
            .map(|(id, events)| (id, events.as_slice()))
    }

    /// Number of distinct listeners in the log
    pub fn listener_count(&self) -> usize {
        self.listener_events.len()
    }

    /// Total number of events across all listeners
    pub fn event_count(&self) -> usize {
        self.listener_events.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listener_events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(track_id: TrackId) -> PlayEvent {
        PlayEvent {
            track_id,
            timestamp: "2021-01-01 09:00:00".to_string(),
            is_mobile: 0,
            zip_code: "10001".to_string(),
        }
    }

    #[test]
    fn test_insert_groups_by_listener() {
        let mut log = EventLog::new();
        log.insert_event("alice".to_string(), event(100));
        log.insert_event("bob".to_string(), event(200));
        log.insert_event("alice".to_string(), event(101));

        assert_eq!(log.listener_count(), 2);
        assert_eq!(log.event_count(), 3);
        assert_eq!(log.listener_events("alice").len(), 2);
        assert_eq!(log.listener_events("bob").len(), 1);
    }

    #[test]
    fn test_events_keep_input_order() {
        let mut log = EventLog::new();
        log.insert_event("alice".to_string(), event(3));
        log.insert_event("alice".to_string(), event(1));
        log.insert_event("alice".to_string(), event(2));

        let tracks: Vec<TrackId> = log
            .listener_events("alice")
            .iter()
            .map(|e| e.track_id)
            .collect();
        assert_eq!(tracks, vec![3, 1, 2]);
    }

    #[test]
    fn test_unknown_listener_is_empty() {
        let log = EventLog::new();
        assert!(log.listener_events("nobody").is_empty());
        assert!(log.is_empty());
        assert_eq!(log.event_count(), 0);
    }
}
