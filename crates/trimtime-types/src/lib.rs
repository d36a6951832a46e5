//! Shared domain types for TrimTime.
//!
//! This crate contains the core domain types used across the TrimTime booking
//! utility: Customer, Service, Appointment, the shop configuration, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod appointment;
pub mod config;
pub mod customer;
pub mod error;
pub mod service;
