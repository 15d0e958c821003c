use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

/// Quiz generations allowed per user per local calendar day.
pub const DAILY_QUIZ_LIMIT: u32 = 3;

/// In-memory daily quota, reset at the local calendar-day boundary.
/// Counts reset implicitly when a consume arrives on a new day.
pub struct DailyQuota {
    limit: u32,
    used: Mutex<HashMap<i32, (NaiveDate, u32)>>,
}

impl DailyQuota {
    pub fn new(limit: u32) -> Self {
        DailyQuota {
            limit,
            used: Mutex::new(HashMap::new()),
        }
    }

    /// Takes one unit of today's quota. Returns false once the day's
    /// allowance is spent.
    pub fn try_consume(&self, user_id: i32, today: NaiveDate) -> bool {
        let mut used = self.used.lock().unwrap();
        let entry = used.entry(user_id).or_insert((today, 0));
        if entry.0 != today {
            *entry = (today, 0);
        }
        if entry.1 >= self.limit {
            return false;
        }
        entry.1 += 1;
        true
    }
}
