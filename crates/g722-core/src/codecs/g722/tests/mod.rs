//! G.722 Test Modules
//!
//! This module organizes the codec-level test suite. Per-module unit tests
//! live next to the code they cover.

pub mod utils;
pub mod decoder_tests;
