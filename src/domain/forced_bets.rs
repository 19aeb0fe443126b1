use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Блайнды стола. Инвариант: big >= small.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl Blinds {
    pub fn new(small: Chips, big: Chips) -> Self {
        debug_assert!(small <= big, "малый блайнд больше большого");
        Self { small, big }
    }

    /// Игра с одним блайндом: small == big.
    pub fn single(amount: Chips) -> Self {
        Self {
            small: amount,
            big: amount,
        }
    }
}

/// Форсированные ставки раздачи: анте (может быть нулевым) и блайнды.
///
/// В хедз-апе малый блайнд ставит кнопка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForcedBets {
    pub ante: Chips,
    pub blinds: Blinds,
}

impl ForcedBets {
    pub fn new(blinds: Blinds) -> Self {
        Self {
            ante: Chips::ZERO,
            blinds,
        }
    }

    pub fn with_ante(blinds: Blinds, ante: Chips) -> Self {
        Self { ante, blinds }
    }
}
