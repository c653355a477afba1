use chrono::{DateTime, Local};

/// Source of the current local time for message timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Local> {
        (*self).now()
    }
}
