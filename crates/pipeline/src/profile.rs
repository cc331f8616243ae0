//! Per-listener summarization.
//!
//! This module folds each listener's event group into a fixed-shape
//! `UserProfile`: distinct-track count, a four-way time-of-day histogram
//! and a mobile-play count.

use crate::error::{ProfileError, Result};
use data_loader::{EventLog, ListenerId, PlayEvent, TrackId};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Time-of-day bucket for one play event.
///
/// The four buckets are mutually exclusive and cover all 24 hours; night
/// wraps midnight, so it is the union of [0,5) and [22,24).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Classify an hour of day (0-23).
    ///
    /// The branches are checked in this order with a catch-all at the end,
    /// which is what makes night wrap midnight. Do not reorder them.
    pub fn from_hour(hour: u32) -> DayPart {
        if hour < 5 {
            DayPart::Night
        } else if hour < 12 {
            DayPart::Morning
        } else if hour < 17 {
            DayPart::Afternoon
        } else if hour < 22 {
            DayPart::Evening
        } else {
            DayPart::Night
        }
    }
}

/// Derived summary for one listener.
///
/// Field order matters: serialized rows in `live_table.csv` follow the
/// declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UserProfile {
    /// Count of distinct tracks this listener played
    pub unique_track_count: u32,
    pub morning_count: u32,
    pub afternoon_count: u32,
    pub evening_count: u32,
    pub night_count: u32,
    /// Count of plays made on a mobile device
    pub mobile_count: u32,
}

impl UserProfile {
    /// Total number of events behind this profile.
    ///
    /// The buckets are exhaustive, so this equals the listener's event count.
    pub fn event_count(&self) -> u32 {
        self.morning_count + self.afternoon_count + self.evening_count + self.night_count
    }
}

/// Extract the hour component from a `"YYYY-MM-DD HH:MM:SS"` timestamp.
fn extract_hour(listener: &str, timestamp: &str) -> Result<u32> {
    let parts: Vec<&str> = timestamp.split(' ').collect();
    if parts.len() != 2 {
        return Err(ProfileError::MalformedTimestamp {
            listener: listener.to_string(),
            timestamp: timestamp.to_string(),
            reason: "expected exactly a date and a time".to_string(),
        });
    }

    let time = parts[1];
    let hour_str = time.split(':').next().unwrap_or(time);
    let hour: u32 = hour_str
        .parse()
        .map_err(|e| ProfileError::MalformedTimestamp {
            listener: listener.to_string(),
            timestamp: timestamp.to_string(),
            reason: format!("invalid hour: {}", e),
        })?;

    if hour > 23 {
        return Err(ProfileError::MalformedTimestamp {
            listener: listener.to_string(),
            timestamp: timestamp.to_string(),
            reason: format!("hour {} out of range", hour),
        });
    }
    Ok(hour)
}

/// Fold one listener's event group into a profile.
///
/// The group is non-empty by construction (a listener without events never
/// exists as an `EventLog` key), and a single event still yields a valid
/// profile with exactly one bucket incremented.
pub fn summarize_listener(listener: &str, events: &[PlayEvent]) -> Result<UserProfile> {
    let mut profile = UserProfile::default();
    let mut seen_tracks: HashSet<TrackId> = HashSet::new();

    for event in events {
        seen_tracks.insert(event.track_id);
        profile.mobile_count += u32::from(event.is_mobile);

        match DayPart::from_hour(extract_hour(listener, &event.timestamp)?) {
            DayPart::Morning => profile.morning_count += 1,
            DayPart::Afternoon => profile.afternoon_count += 1,
            DayPart::Evening => profile.evening_count += 1,
            DayPart::Night => profile.night_count += 1,
        }
    }

    profile.unique_track_count = seen_tracks.len() as u32;
    Ok(profile)
}

/// Computes profiles for all listeners in parallel.
///
/// ## Performance Note
/// Listener groups are fully independent, so the fold runs on Rayon with no
/// shared mutable state. Callers that want an explicit execution context can
/// scope this inside `rayon::ThreadPool::install`.
pub struct ProfileEngine;

impl ProfileEngine {
    /// Create a new ProfileEngine.
    pub fn new() -> Self {
        Self
    }

    /// Summarize every listener in the log.
    ///
    /// # Returns
    /// One `(listener, profile)` pair per distinct listener, in unspecified
    /// order. The first malformed timestamp aborts the whole pass.
    pub fn summarize_all(&self, log: &EventLog) -> Result<Vec<(ListenerId, UserProfile)>> {
        let groups: Vec<(&ListenerId, &[PlayEvent])> = log.iter().collect();

        let profiles: Vec<(ListenerId, UserProfile)> = groups
            .into_par_iter()
            .map(|(listener, events)| {
                let profile = summarize_listener(listener, events)?;
                Ok((listener.clone(), profile))
            })
            .collect::<Result<_>>()?;

        debug!(profiles = profiles.len(), "summarized all listeners");
        Ok(profiles)
    }
}

impl Default for ProfileEngine {
    fn default() -> Self {
        Self::new()
    }
}
