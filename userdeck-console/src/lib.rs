//! Userdeck console library.
//!
//! The binary in `main.rs` is a thin wrapper; everything lives here so the
//! integration tests can drive the reducers and services directly.

pub mod app;
pub mod common;
pub mod domains;
pub mod infrastructure;
pub mod state;
pub mod update;
pub mod view;
