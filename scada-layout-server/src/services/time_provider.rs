use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub trait TimeProvider: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the host's local offset.
///
/// The offset is captured on construction. `time` refuses to read it once
/// other threads exist, so build this before starting the runtime.
#[derive(Debug, Clone)]
pub struct LocalTimeProvider {
    offset: UtcOffset,
}

impl LocalTimeProvider {
    pub fn new() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|_| {
            tracing::warn!("local utc offset is indeterminate, falling back to utc");
            UtcOffset::UTC
        });

        Self { offset }
    }

    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl Default for LocalTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for LocalTimeProvider {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// `YYYY-MM-DD HH:MM:SS`, second precision.
pub fn format_timestamp(datetime: OffsetDateTime) -> String {
    datetime
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap_or_else(|e| {
            tracing::warn!("failed to format timestamp {}: {}", datetime, e);
            String::new()
        })
}
