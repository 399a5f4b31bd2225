pub mod aggregator;
pub mod classifier;
pub mod cleaner;
pub mod config;
pub mod dashboard;
pub mod log;
pub mod pipeline;
pub mod resolver;
pub mod roster;
pub mod timestamp;
