//! Language infrastructure - PostgreSQL repository

mod postgres_repository;

pub use postgres_repository::PostgresLanguageRepository;
