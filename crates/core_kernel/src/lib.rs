//! Core Kernel - Foundational types for the MONI settlement engine
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money as integer currency units with checked arithmetic
//! - Strongly typed participant, expense, and group identifiers
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{ExpenseId, GroupId, ParticipantId};
pub use money::{Money, MoneyError};
