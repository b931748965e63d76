//! Debt Settlement Domain
//!
//! This crate reduces a group's expense history to "who owes whom":
//!
//! 1. [`compute_balances`] folds every expense into a net balance per
//!    participant (total paid minus total owed). Balances always sum to
//!    zero - money is conserved across a group.
//! 2. [`simplify_debts`] matches the largest debtor against the largest
//!    creditor until everyone is settled, emitting at most
//!    `debtors + creditors - 1` transfers.
//!
//! Balances and debts are pure functions of the expense set; they carry no
//! identity or storage of their own and are recomputed whenever expenses
//! change.

pub mod balance;
pub mod error;
pub mod expense;
pub mod settlement;

pub use balance::{compute_balances, BalanceEntry, Balances};
pub use error::SettlementError;
pub use expense::Expense;
pub use settlement::{simplify_debts, Debt};
