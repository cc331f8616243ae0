//! Parser for the raw play log.
//!
//! The input is `tracks.csv`, one record per line, no header:
//!
//! ```text
//! rowId,listenerId,trackId,timestamp,isMobile,zipCode
//! ```
//!
//! Fields are comma-separated with no escaping. `trackId` and `isMobile`
//! must be integers; the timestamp and zip code are carried through as-is
//! and validated no further here. A malformed record aborts the whole run,
//! there is no per-record recovery path.

use crate::error::{DataLoadError, Result};
use crate::types::{ListenerId, PlayEvent};
use std::fs;
use std::path::Path;

/// Number of comma-separated fields in one record
const FIELD_COUNT: usize = 6;

/// Parse the full play log into `(listener, event)` pairs, in file order.
///
/// Blank lines are skipped. The leading `rowId` is a storage artifact of
/// the upstream export and is dropped after the field count check.
pub fn parse_tracks(path: &Path) -> Result<Vec<(ListenerId, PlayEvent)>> {
    let content = fs::read_to_string(path)?;
    let file = path.display().to_string();
    let mut pairs = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }
        pairs.push(parse_line(&file, line_no, line_trimmed)?);
    }

    Ok(pairs)
}

/// Parse one record into a `(listener, event)` pair.
pub fn parse_line(file: &str, line_no: usize, line: &str) -> Result<(ListenerId, PlayEvent)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: fields.len(),
            line: line_no,
        });
    }

    // fields[0] is rowId, unused beyond the count check
    let listener = fields[1].to_string();

    let track_id = fields[2].parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid trackId: {}", e),
    })?;

    let is_mobile = fields[4].parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Invalid isMobile: {}", e),
    })?;

    let event = PlayEvent {
        track_id,
        timestamp: fields[3].to_string(),
        is_mobile,
        zip_code: fields[5].to_string(),
    };

    Ok((listener, event))
}
