//! Time-derived issue IDs.
//!
//! An issue ID is the creation instant in milliseconds since the Unix epoch,
//! rendered in decimal. Collisions within the same millisecond are resolved by
//! counting upwards until a free ID is found, so IDs stay unique and increase
//! with creation order.

use chrono::{DateTime, SubsecRound, Utc};

/// Generate an ID for an issue created at `now`.
///
/// `is_taken` reports whether a candidate ID already exists in the collection.
#[must_use]
pub fn next_issue_id(now: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !is_taken(&id) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

/// Creation timestamp as stored on an issue: UTC, millisecond precision.
#[must_use]
pub fn issue_timestamp(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap()
    }

    #[test]
    fn id_is_epoch_millis() {
        let id = next_issue_id(fixed_now(), |_| false);
        assert_eq!(id, fixed_now().timestamp_millis().to_string());
    }

    #[test]
    fn bumps_past_taken_ids() {
        let base = fixed_now().timestamp_millis();
        let taken: HashSet<String> = [base, base + 1].iter().map(ToString::to_string).collect();

        let id = next_issue_id(fixed_now(), |candidate| taken.contains(candidate));
        assert_eq!(id, (base + 2).to_string());
    }

    #[test]
    fn timestamp_keeps_millisecond_precision() {
        let now = fixed_now() + chrono::Duration::nanoseconds(123_456_789);
        let stamped = issue_timestamp(now);
        assert_eq!(stamped.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            "\"2026-02-08T12:00:00.123Z\""
        );
    }
}
