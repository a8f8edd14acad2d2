//! Statistical timing comparison between two input classes

pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
