//! Reminder database bootstrap.
//!
//! Connections handed out here already carry the latest reminders schema;
//! the store refuses any connection that does not.

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::{latest_schema_version, schema_version};
