use chrono::NaiveDateTime;

/// Wall-clock source. Date filters and streaks use the local calendar, so
/// the port hands out local naive time rather than an instant.
pub trait ClockPort: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;
}
