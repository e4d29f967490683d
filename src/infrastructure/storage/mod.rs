//! Storage infrastructure - connection pooling and migrations

pub mod migrations;
mod postgres;

pub use migrations::{run_content_migrations, Migration, PostgresMigrator};
pub use postgres::{connect_pool, PostgresConfig};
