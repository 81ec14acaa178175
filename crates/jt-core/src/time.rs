//! Wall-clock timestamps as stored on jobs and contacts.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the UNIX epoch, UTC.
pub type EpochMs = i64;

/// Current wall-clock time. A clock set before 1970 reads as 0.
pub fn now_ms() -> EpochMs {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
    EpochMs::try_from(since_epoch.as_millis()).unwrap_or(EpochMs::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2024_and_monotone_enough() {
        let a = now_ms();
        let b = now_ms();
        assert!(a > 1_704_067_200_000);
        assert!(b >= a);
    }
}
