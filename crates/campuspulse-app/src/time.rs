// Rust guideline compliant 2026-10-16

//! Clock access for submission and status-change timestamps.

use crate::error::{AppError, Result};
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in seconds.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the host clock reads before the Unix epoch.
pub fn unix_timestamp() -> Result<i64> {
    seconds_since_epoch(SystemTime::now())
}

/// Converts a wall-clock reading to whole seconds since the Unix epoch.
///
/// A reading before the epoch surfaces as an IO error.
fn seconds_since_epoch(reading: SystemTime) -> Result<i64> {
    let elapsed = reading.duration_since(UNIX_EPOCH).map_err(|err| {
        AppError::Io(io::Error::other(format!(
            "system clock reads {}s before the Unix epoch",
            err.duration().as_secs()
        )))
    })?;

    i64::try_from(elapsed.as_secs())
        .map_err(|_| AppError::Io(io::Error::other("system clock out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::time::Duration;

    #[test]
    fn test_epoch_offset_in_seconds() {
        let reading = UNIX_EPOCH + Duration::from_millis(1_700_000_000_900);
        assert_eq!(seconds_since_epoch(reading).unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_clock_before_epoch_is_io_error() {
        let reading = UNIX_EPOCH - Duration::from_secs(30);
        let err = seconds_since_epoch(reading).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IoError);
    }

    #[test]
    fn test_current_time_is_after_epoch() {
        assert!(unix_timestamp().unwrap() > 0);
    }
}
