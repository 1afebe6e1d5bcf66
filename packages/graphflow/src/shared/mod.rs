//! Shared value objects consumed by every feature

pub mod models;
