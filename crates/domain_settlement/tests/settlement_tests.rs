//! Comprehensive tests for domain_settlement

use core_kernel::{Money, ParticipantId};
use domain_settlement::{compute_balances, simplify_debts, SettlementError};
use domain_split::SplitInput;
use test_utils::{
    assert_debt_count_bound, assert_settlement_clears, assert_zero_sum, ExpenseBuilder,
    IdFixtures,
};

// ============================================================================
// Balance Computation Tests
// ============================================================================

mod balance_tests {
    use super::*;

    #[test]
    fn test_single_expense_balances() {
        let participants = IdFixtures::participants(3);
        let expense = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(90000))
            .with_paid_by(participants[0])
            .build();

        let balances = compute_balances(&[expense], &participants).unwrap();

        // Payer fronted 90000 and owes their own 30000 share
        assert_eq!(
            balances.net_for(&participants[0]),
            Some(Money::new(60000))
        );
        assert_eq!(
            balances.net_for(&participants[1]),
            Some(Money::new(-30000))
        );
        assert_eq!(
            balances.net_for(&participants[2]),
            Some(Money::new(-30000))
        );
        assert_zero_sum(&balances);
    }

    #[test]
    fn test_no_expenses_means_settled() {
        let participants = IdFixtures::participants(4);
        let balances = compute_balances(&[], &participants).unwrap();

        assert!(balances.is_settled());
    }

    #[test]
    fn test_balances_sum_to_zero_across_many_expenses() {
        let participants = IdFixtures::participants(5);
        let expenses: Vec<_> = (0..10)
            .map(|i| {
                ExpenseBuilder::new(&participants)
                    .with_amount(Money::new(1000 + i * 137))
                    .with_paid_by(participants[(i % 5) as usize])
                    .build()
            })
            .collect();

        let balances = compute_balances(&expenses, &participants).unwrap();
        assert_zero_sum(&balances);
    }

    #[test]
    fn test_expense_with_unknown_payer_rejected() {
        let participants = IdFixtures::participants(2);
        let expense = ExpenseBuilder::new(&participants).build();

        let others = IdFixtures::participants(2);
        let result = compute_balances(&[expense], &others);

        assert_eq!(
            result,
            Err(SettlementError::UnknownParticipant(participants[0]))
        );
    }

    #[test]
    fn test_removing_an_expense_changes_recomputed_balances() {
        let participants = IdFixtures::participants(3);
        let first = ExpenseBuilder::new(&participants)
            .with_paid_by(participants[0])
            .build();
        let second = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(30000))
            .with_paid_by(participants[1])
            .build();

        let all = compute_balances(&[first.clone(), second], &participants).unwrap();
        let without_second = compute_balances(&[first], &participants).unwrap();

        assert_ne!(all, without_second);
        assert_zero_sum(&without_second);
    }
}

// ============================================================================
// End-to-End Settlement Tests
// ============================================================================

mod end_to_end_tests {
    use super::*;

    /// The canonical three-person MoneyTag scenario: A fronts dinner, B
    /// fronts the taxi, settlement flows everything back to A in two
    /// transfers.
    #[test]
    fn test_three_person_group_settles_in_two_transfers() {
        let [a, b, c] = IdFixtures::trio();
        let participants = vec![a, b, c];

        let dinner = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(90000))
            .with_paid_by(a)
            .build();
        let taxi = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(30000))
            .with_paid_by(b)
            .build();

        let balances = compute_balances(&[dinner, taxi], &participants).unwrap();

        assert_eq!(balances.net_for(&a), Some(Money::new(50000)));
        assert_eq!(balances.net_for(&b), Some(Money::new(-10000)));
        assert_eq!(balances.net_for(&c), Some(Money::new(-40000)));

        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!((debts[0].from, debts[0].to), (c, a));
        assert_eq!(debts[0].amount, Money::new(40000));
        assert_eq!((debts[1].from, debts[1].to), (b, a));
        assert_eq!(debts[1].amount, Money::new(10000));

        let total_transferred: Money = debts.iter().map(|d| d.amount).sum();
        assert_eq!(total_transferred, Money::new(50000));

        assert_settlement_clears(&balances, &debts);
    }

    #[test]
    fn test_mutual_expenses_cancel_out() {
        let participants = IdFixtures::participants(2);
        let first = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(5000))
            .with_paid_by(participants[0])
            .build();
        let second = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(5000))
            .with_paid_by(participants[1])
            .build();

        let balances = compute_balances(&[first, second], &participants).unwrap();

        assert!(balances.is_settled());
        assert_eq!(simplify_debts(&balances).unwrap(), vec![]);
    }

    #[test]
    fn test_exact_split_settlement() {
        let participants = IdFixtures::participants(3);
        let expense = ExpenseBuilder::new(&participants)
            .with_amount(Money::new(1000))
            .with_paid_by(participants[2])
            .with_split(SplitInput::Exact {
                shares: vec![
                    domain_split::ExactShare {
                        participant: participants[0],
                        amount: Money::new(600),
                    },
                    domain_split::ExactShare {
                        participant: participants[1],
                        amount: Money::new(400),
                    },
                ],
            })
            .build();

        let balances = compute_balances(&[expense], &participants).unwrap();
        let debts = simplify_debts(&balances).unwrap();

        assert_eq!(debts.len(), 2);
        assert_settlement_clears(&balances, &debts);
        assert_debt_count_bound(&balances, &debts);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use domain_split::calculate_split;
    use proptest::prelude::*;
    use test_utils::{
        equal_split_strategy, percentage_split_strategy, positive_amount_strategy,
        zero_sum_balances_strategy,
    };

    proptest! {
        #[test]
        fn settlement_clears_any_zero_sum_balances(
            balances in zero_sum_balances_strategy(20)
        ) {
            let debts = simplify_debts(&balances).unwrap();

            assert_settlement_clears(&balances, &debts);
            assert_debt_count_bound(&balances, &debts);
        }

        #[test]
        fn settlement_never_emits_self_debt(
            balances in zero_sum_balances_strategy(20)
        ) {
            let debts = simplify_debts(&balances).unwrap();

            for debt in &debts {
                prop_assert_ne!(debt.from, debt.to);
                prop_assert!(debt.amount.is_positive());
            }
        }

        #[test]
        fn balances_from_equal_splits_sum_to_zero(
            amount in positive_amount_strategy(),
            (participants, input) in equal_split_strategy(15)
        ) {
            let splits = calculate_split(amount, &input, &participants).unwrap();
            let expense = domain_settlement::Expense::new(
                amount,
                participants[0],
                splits,
                test_utils::TemporalFixtures::expense_date(),
            )
            .unwrap();

            let balances = compute_balances(&[expense], &participants).unwrap();
            prop_assert!(balances.residual().is_zero());
        }

        #[test]
        fn full_pipeline_settles_percentage_splits(
            amount in positive_amount_strategy(),
            (participants, input) in percentage_split_strategy(10)
        ) {
            let splits = calculate_split(amount, &input, &participants).unwrap();
            let expense = domain_settlement::Expense::new(
                amount,
                participants[0],
                splits,
                test_utils::TemporalFixtures::expense_date(),
            )
            .unwrap();

            let balances = compute_balances(&[expense], &participants).unwrap();
            let debts = simplify_debts(&balances).unwrap();

            assert_settlement_clears(&balances, &debts);
        }
    }
}
