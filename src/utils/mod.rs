pub mod dates;
pub mod session;

pub use dates::{day_gap, start_of_day};
pub use session::{get_current_user_id, is_logged_in, set_user_session};
