//! Top-level facade crate for cspreport.
//!
//! Re-exports the classifier/report model and the HTTP gateway library so
//! users can depend on a single crate.

pub mod core {
    pub use cspreport_core::*;
}

pub mod gateway {
    pub use cspreport_gateway::*;
}
