//! Tally Types - Shared billing domain types
//!
//! This crate contains domain types used across tally services:
//! - Billing plans and their cadence pricing
//! - Subscribers and their lifecycle status
//! - Invoices and their payment state

pub mod invoice;
pub mod plan;
pub mod subscriber;

pub use invoice::*;
pub use plan::*;
pub use subscriber::*;
