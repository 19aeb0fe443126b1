use core::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::domain::{SeatIndex, MAX_SEATS};

/// Флаги действия с точки зрения очерёдности ходов.
///
/// Комбинируются через `|`: например, олл-ин коллом будет
/// `ActionFlags::PASSIVE | ActionFlags::LEAVE` – игрок уравнял и больше
/// не ходит в этом раунде, хотя остаётся в раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionFlags(u8);

impl ActionFlags {
    /// Check/call – ничего не меняет в агрессии раунда.
    pub const PASSIVE: ActionFlags = ActionFlags(0b001);
    /// Bet/raise – игрок становится последним агрессором.
    pub const AGGRESSIVE: ActionFlags = ActionFlags(0b010);
    /// Игрок выбывает из очереди раунда (фолд или олл-ин).
    pub const LEAVE: ActionFlags = ActionFlags(0b100);

    pub fn is_aggressive(&self) -> bool {
        self.0 & Self::AGGRESSIVE.0 != 0
    }

    pub fn is_leave(&self) -> bool {
        self.0 & Self::LEAVE.0 != 0
    }
}

impl BitOr for ActionFlags {
    type Output = ActionFlags;

    fn bitor(self, rhs: ActionFlags) -> ActionFlags {
        ActionFlags(self.0 | rhs.0)
    }
}

/// Очерёдность ходов внутри одного раунда ставок.
///
/// Хранит маску активных мест (те, кто ещё может ходить: не сфолдил и
/// не в олл-ине), текущего ходящего и последнего агрессора. Раунд
/// завершается, когда ход должен был бы вернуться к последнему агрессору
/// (полный круг без повышений) либо когда активных ≤ 1.
///
/// Важно: "достаточно ли повышение, чтобы переоткрыть торговлю" – не
/// забота этого модуля. BettingRound сам решает, передавать ли флаг
/// AGGRESSIVE (короткий олл-ин его не получает).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    active: [bool; MAX_SEATS],
    player_to_act: SeatIndex,
    last_aggressor: SeatIndex,
    num_active: usize,
    in_progress: bool,
}

impl Round {
    /// Новый раунд: маска активных и первый ходящий.
    ///
    /// `last_aggressor` изначально равен первому ходящему: круг без
    /// повышений заканчивает раунд. Если первый ходящий не активен
    /// (например, в олл-ине с блайнда), очередь сдвигается к следующему
    /// активному месту.
    pub fn new(active: [bool; MAX_SEATS], first_to_act: SeatIndex) -> Self {
        let num_active = active.iter().filter(|a| **a).count();

        let mut first = first_to_act % MAX_SEATS;
        for _ in 0..MAX_SEATS {
            if active[first] {
                break;
            }
            first = (first + 1) % MAX_SEATS;
        }

        Round {
            active,
            player_to_act: first,
            last_aggressor: first,
            num_active,
            in_progress: num_active >= 2,
        }
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn player_to_act(&self) -> SeatIndex {
        self.player_to_act
    }

    pub fn last_aggressor(&self) -> SeatIndex {
        self.last_aggressor
    }

    pub fn active(&self) -> &[bool; MAX_SEATS] {
        &self.active
    }

    pub fn is_active(&self, seat: SeatIndex) -> bool {
        seat < MAX_SEATS && self.active[seat]
    }

    pub fn num_active(&self) -> usize {
        self.num_active
    }

    /// Оспаривается ли раунд (активных хотя бы двое).
    pub fn contested(&self) -> bool {
        self.num_active >= 2
    }

    /// Текущий ходящий сделал действие с данными флагами.
    pub fn action_taken(&mut self, flags: ActionFlags) {
        debug_assert!(self.in_progress, "действие в завершённом раунде");

        if flags.is_aggressive() {
            self.last_aggressor = self.player_to_act;
        }
        if flags.is_leave() {
            self.active[self.player_to_act] = false;
            self.num_active -= 1;
        }

        self.advance();
    }

    /// Убрать место из раунда вне очереди (фолд вставшего из-за стола).
    /// Текущего ходящего так убирать нельзя – его фолд идёт через
    /// `action_taken`.
    pub fn retire(&mut self, seat: SeatIndex) {
        debug_assert!(
            !self.in_progress || seat != self.player_to_act,
            "ходящий выбывает только через action_taken"
        );

        if seat >= MAX_SEATS || !self.active[seat] {
            return;
        }
        self.active[seat] = false;
        self.num_active -= 1;

        if self.num_active <= 1 {
            self.in_progress = false;
        }
    }

    /// Передать ход следующему активному месту. Идём место за местом:
    /// как только индекс совпал с последним агрессором – круг замкнулся
    /// и раунд окончен (даже если сам агрессор уже не активен).
    fn advance(&mut self) {
        if self.num_active <= 1 {
            self.in_progress = false;
            return;
        }

        let mut idx = self.player_to_act;
        loop {
            idx = (idx + 1) % MAX_SEATS;
            if idx == self.last_aggressor {
                self.in_progress = false;
                return;
            }
            if self.active[idx] {
                self.player_to_act = idx;
                return;
            }
        }
    }
}
