//! Shared harness code for the workspace integration tests

pub mod suites;
