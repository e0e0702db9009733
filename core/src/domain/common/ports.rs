use chrono::{DateTime, Utc};

/// Source of the current time, injected so retention can be tested at exact boundaries.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
