//! Entity id generation

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Generate a fresh entity id.
///
/// Ids are millisecond-epoch strings. A process-local floor keeps ids
/// distinct when several are issued within the same millisecond.
pub fn next_id() -> String {
    static LAST: AtomicI64 = AtomicI64::new(0);

    let now = Utc::now().timestamp_millis();
    let prev = LAST
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(prev + 1).to_string()
}
