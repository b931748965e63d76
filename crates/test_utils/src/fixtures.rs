//! Test Fixtures
//!
//! Pre-built test data for common entities.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Money, ParticipantId};

/// Identifier fixtures
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh participant set of the given size
    pub fn participants(n: usize) -> Vec<ParticipantId> {
        (0..n).map(|_| ParticipantId::new()).collect()
    }

    /// A three-person group, the most common MoneyTag size in tests
    pub fn trio() -> [ParticipantId; 3] {
        [
            ParticipantId::new(),
            ParticipantId::new(),
            ParticipantId::new(),
        ]
    }
}

/// Money fixtures for typical group expenses
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A dinner split three ways without remainder
    pub fn dinner() -> Money {
        Money::new(90000)
    }

    /// A shared taxi ride
    pub fn taxi() -> Money {
        Money::new(30000)
    }

    /// An amount that does not divide evenly by three
    pub fn awkward() -> Money {
        Money::new(100)
    }
}

/// Temporal fixtures
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed expense date so tests are reproducible
    pub fn expense_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }
}
