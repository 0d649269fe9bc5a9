//! Test helpers module
//!
//! This module provides utilities and helpers for testing the AIFactory application.
//! It includes mock servers, in-process backends and test context setup.

#![allow(dead_code)]

pub mod openai_mock;
pub mod telegram_mock;
pub mod test_context;
pub mod test_data;

pub use openai_mock::*;
pub use telegram_mock::*;
pub use test_context::*;
pub use test_data::*;
