//! Real-time lint quality monitoring with improvement tracking.

pub mod config;
pub mod display;
pub mod extractor;
pub mod history;
pub mod improvement;
pub mod logger;
pub mod monitor;
pub mod runner;
