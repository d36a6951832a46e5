//! Observability setup for TrimTime.

pub mod tracing_setup;
