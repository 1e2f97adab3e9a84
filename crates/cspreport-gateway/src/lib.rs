//! cspreport gateway library entry.
//!
//! This crate wires config, the metrics registry, and the HTTP handlers into
//! the reporter's two routers. It is intended to be consumed by the binaries
//! (`main.rs`, `bin/demo_page.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod demo;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
