//! Common test utilities and helpers
//!
//! - `app` - in-process server backed by an in-memory database
//! - `assertions` - assertion macros with readable failure output

#![allow(dead_code)]

pub mod app;
#[macro_use]
pub mod assertions;

pub use app::TestApp;
