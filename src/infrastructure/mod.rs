//! Infrastructure layer - External service implementations

pub mod blob;
pub mod cache;
pub mod item;
pub mod language;
pub mod logging;
pub mod module;
pub mod sentence;
pub mod services;
pub mod storage;
