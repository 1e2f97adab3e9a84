//! Transport layer (HTTP).
//!
//! Exposes the report endpoint handlers that decode browser bodies once
//! before classification and counting.

pub mod report;
