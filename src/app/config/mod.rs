//! Collector directory configuration.

mod collector_paths;

pub use collector_paths::CollectorPaths;
