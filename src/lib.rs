//! inspforge - Build INSP stereoscopic containers from side-by-side JPEGs
//!
//! This library crate exposes the core functionality for integration testing.

pub mod batch;
pub mod config;
pub mod convert;
pub mod validator;

pub use inspforge_container as container;
