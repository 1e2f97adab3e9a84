//! cspreport core: CSP directive classification, report model, and errors.
//!
//! This crate holds the parts of the reporter that do not care about HTTP:
//! the bounded directive/disposition classifier used for metric labels, the
//! serde model of a browser `csp-report` body, and the error surface shared
//! with the gateway. It carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every input string
//! classifies to a known label, and malformed bodies surface as
//! `CspReportError::BadRequest`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod directive;
pub mod error;
pub mod report;

pub use directive::{classify, Directive, Disposition, UNKNOWN};
/// Shared result type.
pub use error::{CspReportError, Result};
pub use report::{ContentSecurityPolicyReport, ViolationReport};
