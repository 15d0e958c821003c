pub mod data;
pub mod features;
pub mod handlers;
pub mod schema;
pub mod utils;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
