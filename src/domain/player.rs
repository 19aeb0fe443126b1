use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Игрок на месте за столом. Только учёт фишек:
///   - `stack` – сколько осталось за спиной;
///   - `bet_size` – сколько выставлено в текущем раунде ставок.
///
/// Инвариант: total_chips = stack + bet_size, и ставка никогда
/// не превышает total_chips.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    stack: Chips,
    bet_size: Chips,
}

impl Player {
    /// Посадить игрока с данным бай-ином.
    pub fn new(stack: Chips) -> Self {
        Self {
            stack,
            bet_size: Chips::ZERO,
        }
    }

    pub fn stack(&self) -> Chips {
        self.stack
    }

    pub fn bet_size(&self) -> Chips {
        self.bet_size
    }

    /// Все фишки игрока: стек + уже выставленная ставка.
    pub fn total_chips(&self) -> Chips {
        self.stack + self.bet_size
    }

    /// Игрок в олл-ине: стек пуст, но он остаётся в раздаче.
    pub fn is_all_in(&self) -> bool {
        self.stack.is_zero()
    }

    /// Выставить ставку раунда: `bet_size` становится равным `amount`
    /// (не добавка!), остальное возвращается в стек.
    ///
    /// Требование: 0 <= amount <= total_chips. Нарушение – ошибка
    /// вызывающего кода.
    pub fn bet(&mut self, amount: Chips) {
        let total = self.total_chips();
        debug_assert!(amount <= total, "ставка больше всех фишек игрока");
        self.bet_size = amount.min(total);
        self.stack = total - self.bet_size;
    }

    /// Забрать часть выставленной ставки в банк (стек не меняется).
    pub(crate) fn take_from_bet(&mut self, amount: Chips) -> Chips {
        let taken = amount.min(self.bet_size);
        self.bet_size -= taken;
        taken
    }

    /// Зачислить выигрыш в стек.
    pub(crate) fn award(&mut self, amount: Chips) {
        self.stack += amount;
    }
}
