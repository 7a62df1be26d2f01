//! Infrastructure - port traits and their SQLite adapters.

pub mod clock;
pub mod ports;
pub mod sqlite;
