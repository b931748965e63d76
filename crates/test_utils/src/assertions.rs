//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use std::collections::HashMap;

use core_kernel::{Money, ParticipantId};
use domain_settlement::{Balances, Debt};
use domain_split::CalculatedSplit;

/// Asserts that a calculated split's entries sum exactly to the amount
pub fn assert_split_totals(split: &CalculatedSplit, amount: Money) {
    assert_eq!(
        split.total(),
        amount,
        "split totals {} but the expense amount is {}",
        split.total(),
        amount
    );
}

/// Asserts that balances sum to zero
pub fn assert_zero_sum(balances: &Balances) {
    assert!(
        balances.residual().is_zero(),
        "balances have residual {}",
        balances.residual()
    );
}

/// Asserts that replaying the debts settles every participant exactly
///
/// Subtracts each debt from the payer and credits the receiver, then checks
/// that every net balance reaches zero.
pub fn assert_settlement_clears(balances: &Balances, debts: &[Debt]) {
    let mut nets: HashMap<ParticipantId, Money> = balances.iter().collect();

    for debt in debts {
        assert!(
            debt.amount.is_positive(),
            "settlement emitted a non-positive transfer of {}",
            debt.amount
        );
        assert_ne!(debt.from, debt.to, "settlement emitted a self-transfer");

        *nets.get_mut(&debt.from).expect("unknown debtor") += debt.amount;
        *nets.get_mut(&debt.to).expect("unknown creditor") -= debt.amount;
    }

    for (participant, net) in nets {
        assert!(
            net.is_zero(),
            "participant {} left with residual balance {}",
            participant,
            net
        );
    }
}

/// Asserts the greedy transfer-count bound: at most
/// `debtors + creditors - 1` debts, or none when already settled
pub fn assert_debt_count_bound(balances: &Balances, debts: &[Debt]) {
    let debtors = balances.iter().filter(|(_, net)| net.is_negative()).count();
    let creditors = balances.iter().filter(|(_, net)| net.is_positive()).count();

    let bound = if debtors == 0 && creditors == 0 {
        0
    } else {
        debtors + creditors - 1
    };
    assert!(
        debts.len() <= bound,
        "{} transfers exceed the bound of {} for {} debtors and {} creditors",
        debts.len(),
        bound,
        debtors,
        creditors
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
