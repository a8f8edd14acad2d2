//! Internal utilities for the mlkem workspace
//!
//! Nothing in this crate is part of the public ML-KEM surface. It holds the
//! constant-time building blocks the KEM layer relies on for implicit
//! rejection and randomness sanity checks.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero, ct_select_array};
