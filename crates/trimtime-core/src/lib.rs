//! Booking logic for TrimTime.
//!
//! This crate owns the [`store::BookingStore`] and the input normalization
//! helpers it relies on. Its only dependencies are `trimtime-types`, `chrono`
//! and `tracing` -- never a terminal or IO crate.

pub mod format;
pub mod store;
pub mod validate;
