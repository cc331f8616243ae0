//! EventLog building: the group-by-listener step.
//!
//! This is the only synchronization point of the whole pipeline: every
//! event of a listener has to land in that listener's group before the
//! group can be summarized. The build is one pass over the parsed pairs
//! with amortized-linear appends.

use crate::error::Result;
use crate::parser;
use crate::types::EventLog;
use std::path::Path;
use tracing::info;

impl EventLog {
    /// Load the play log from `tracks.csv` and group it by listener.
    ///
    /// This is the main entry point for loading data. Any malformed record
    /// aborts the load with a `DataLoadError` naming the offending line.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let pairs = parser::parse_tracks(path)?;

        let mut log = EventLog::new();
        for (listener, event) in pairs {
            log.insert_event(listener, event);
        }

        info!(
            listeners = log.listener_count(),
            events = log.event_count(),
            "loaded play log from {}",
            path.display()
        );
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_groups_and_drops_nothing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,alice,100,2021-01-01 04:30:00,0,10001").unwrap();
        writeln!(file, "2,bob,200,2021-01-01 06:00:00,1,94110").unwrap();
        writeln!(file, "3,alice,101,2021-01-01 23:00:00,0,10001").unwrap();

        let log = EventLog::load_from_file(file.path()).unwrap();

        assert_eq!(log.listener_count(), 2);
        assert_eq!(log.event_count(), 3);
        assert_eq!(log.listener_events("alice").len(), 2);
        assert_eq!(log.listener_events("bob").len(), 1);
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let log = EventLog::load_from_file(file.path()).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EventLog::load_from_file(Path::new("no/such/tracks.csv")).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
