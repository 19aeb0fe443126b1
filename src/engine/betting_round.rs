use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Seats, MAX_SEATS};
use crate::engine::errors::EngineError;
use crate::engine::round::{ActionFlags, Round};

/// Закрытый диапазон допустимых размеров ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipRange {
    pub min: Chips,
    pub max: Chips,
}

impl ChipRange {
    pub fn contains(&self, amount: Chips) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Что может сделать текущий ходящий: фолд и уравнивание доступны всегда,
/// рейз – только если фишек больше текущей ставки (тогда приложено окно
/// допустимых размеров).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRange {
    pub can_raise: bool,
    pub raise_range: Option<ChipRange>,
}

/// Действие в терминах раунда ставок.
///
/// `Match` покрывает и check (доплата 0), и call, и олл-ин колл;
/// `Raise` несёт общий размер ставки (не добавку).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAction {
    Leave,
    Match,
    Raise(Chips),
}

/// Раунд ставок: очередность ходов плюс правила фишек.
///
/// Поверх [`Round`] следит за текущей ставкой (`biggest_bet`) и
/// минимальным шагом повышения (`min_raise`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    round: Round,
    biggest_bet: Chips,
    min_raise: Chips,
}

impl BettingRound {
    /// Префлоп: biggest_bet = min_raise = BB; постфлоп: biggest_bet = 0,
    /// min_raise = BB. Маску активных и первого ходящего готовит дилер.
    pub fn new(
        active: [bool; MAX_SEATS],
        first_to_act: SeatIndex,
        biggest_bet: Chips,
        min_raise: Chips,
    ) -> Self {
        Self {
            round: Round::new(active, first_to_act),
            biggest_bet,
            min_raise,
        }
    }

    pub fn in_progress(&self) -> bool {
        self.round.in_progress()
    }

    pub fn player_to_act(&self) -> SeatIndex {
        self.round.player_to_act()
    }

    pub fn biggest_bet(&self) -> Chips {
        self.biggest_bet
    }

    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    pub fn num_active(&self) -> usize {
        self.round.num_active()
    }

    pub fn active(&self) -> &[bool; MAX_SEATS] {
        self.round.active()
    }

    pub fn is_active(&self, seat: SeatIndex) -> bool {
        self.round.is_active(seat)
    }

    /// Допустимые действия текущего ходящего.
    pub fn legal_actions(&self, seats: &Seats) -> ActionRange {
        let player = seats[self.round.player_to_act()]
            .as_ref()
            .expect("ходящий всегда сидит за столом");
        let total = player.total_chips();
        let can_raise = total > self.biggest_bet;

        if can_raise {
            let min_bet = self.biggest_bet + self.min_raise;
            ActionRange {
                can_raise,
                raise_range: Some(ChipRange {
                    min: min_bet.min(total),
                    max: total,
                }),
            }
        } else {
            ActionRange {
                can_raise,
                raise_range: None,
            }
        }
    }

    /// Применить действие текущего ходящего.
    ///
    /// Рейз проверяется по окну из `legal_actions`; короткий олл-ин
    /// (меньше полного минимального рейза) двигает `biggest_bet`, но не
    /// обновляет `min_raise` и не переоткрывает торговлю: очередь
    /// получает его как пассивное действие.
    pub fn action_taken(
        &mut self,
        seats: &mut Seats,
        action: RoundAction,
    ) -> Result<(), EngineError> {
        if !self.round.in_progress() {
            return Err(EngineError::NoBettingRound);
        }

        let seat = self.round.player_to_act();
        let player = seats[seat]
            .as_mut()
            .ok_or(EngineError::Internal("пустое место в очереди раунда"))?;

        match action {
            RoundAction::Raise(amount) => {
                let total = player.total_chips();
                if total <= self.biggest_bet {
                    return Err(EngineError::CannotRaise);
                }

                let min_bet = self.biggest_bet + self.min_raise;
                let valid = if total < min_bet {
                    // Фишек на полный рейз не хватает: единственный
                    // допустимый размер – весь стек.
                    amount == total
                } else {
                    amount >= min_bet && amount <= total
                };
                if !valid {
                    return Err(EngineError::RaiseOutOfRange {
                        amount,
                        min: min_bet.min(total),
                        max: total,
                    });
                }

                let full_raise = amount >= min_bet;
                player.bet(amount);
                if full_raise {
                    self.min_raise = amount - self.biggest_bet;
                }
                self.biggest_bet = amount;

                let mut flags = if full_raise {
                    ActionFlags::AGGRESSIVE
                } else {
                    ActionFlags::PASSIVE
                };
                if player.is_all_in() {
                    flags = flags | ActionFlags::LEAVE;
                }
                self.round.action_taken(flags);
            }

            RoundAction::Match => {
                let amount = self.biggest_bet.min(player.total_chips());
                player.bet(amount);

                let mut flags = ActionFlags::PASSIVE;
                if player.is_all_in() {
                    flags = flags | ActionFlags::LEAVE;
                }
                self.round.action_taken(flags);
            }

            RoundAction::Leave => {
                self.round.action_taken(ActionFlags::LEAVE);
            }
        }

        Ok(())
    }

    /// Убрать место из раунда вне очереди (см. [`Round::retire`]).
    pub fn retire(&mut self, seat: SeatIndex) {
        self.round.retire(seat);
    }
}
