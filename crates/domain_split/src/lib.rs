//! Expense Splitting Domain
//!
//! This crate converts a split specification plus an expense amount into a
//! per-participant breakdown of owed amounts, for shared-expense groups.
//!
//! # Key Concepts
//!
//! - **SplitInput**: how one expense is divided - equally, by percentage,
//!   or by exact amounts
//! - **CalculatedSplit**: the resolved per-participant owed amounts
//!
//! # Rounding
//!
//! Amounts are integer currency units, so splits cannot always be exact
//! fractions. Equal splits hand the leftover units to the first participants
//! in input order; percentage splits use the largest-remainder method. In
//! both cases the calculated shares sum to the expense amount exactly.

pub mod calculator;
pub mod error;
pub mod split;

pub use calculator::calculate_split;
pub use error::SplitError;
pub use split::{CalculatedSplit, ExactShare, PercentageShare, SplitEntry, SplitInput, SplitType};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Allowed deviation of a percentage split's total from 100
///
/// Covers drift from percentages entered with two decimal places
/// (e.g. 33.33 + 33.33 + 33.34).
pub const PERCENT_SUM_TOLERANCE: Decimal = dec!(0.01);

/// The total a percentage split must reach
pub const PERCENT_TOTAL: Decimal = dec!(100);
