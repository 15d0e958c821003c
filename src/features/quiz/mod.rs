pub mod proxy;
pub mod quota;

pub use proxy::{QuizClient, QuizError, MAX_QUIZ_ITEMS};
pub use quota::{DailyQuota, DAILY_QUIZ_LIMIT};
