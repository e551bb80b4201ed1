use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// The current calendar date in the user's local time zone.
    fn today(&self) -> NaiveDate;
}
