//! Constant values for the mlkem workspace
//!
//! Every number that defines the wire format lives here so the algorithm
//! crates never hard-code sizes.

#![no_std]

pub mod pqc;
pub mod utils;
