use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Truncates a timestamp to midnight of its calendar day.
pub fn start_of_day(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(NaiveTime::MIN)
}

/// Whole calendar days from `from`'s day to `to`'s day. Negative when
/// `from` is later than `to`.
pub fn day_gap(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
