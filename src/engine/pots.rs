use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Seats, MAX_SEATS};

/// Банк: сумма и места, имеющие на него право.
///
/// Банки упорядочены по возрастанию порога ставки: главный банк первым,
/// за ним сайд-поты от коротких олл-инов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    amount: Chips,
    eligible: Vec<SeatIndex>,
}

impl Pot {
    fn empty() -> Self {
        Self {
            amount: Chips::ZERO,
            eligible: Vec::new(),
        }
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn eligible(&self) -> &[SeatIndex] {
        &self.eligible
    }
}

/// Сборщик банков. В конце каждого раунда ставок забирает `bet_size`
/// игроков в главный банк и сайд-поты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    pub fn new() -> Self {
        Self {
            pots: vec![Pot::empty()],
        }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Сумма всех банков.
    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Собрать выставленные ставки в банки.
    ///
    /// `in_hand` – участники раздачи, ещё не сфолдившие: только они
    /// получают право на собираемые банки. Остатки ставок сфолдивших
    /// поглощает верхний банк без права на него.
    ///
    /// Инвариант: сумма фишек не меняется – всё, что ушло из `bet_size`,
    /// оказалось в банках.
    pub fn collect_bets(&mut self, seats: &mut Seats, in_hand: &[bool; MAX_SEATS]) {
        let has_bets = seats
            .iter()
            .flatten()
            .any(|p| !p.bet_size().is_zero());
        if !has_bets {
            return;
        }

        // Верхний банк уже ограничен чьим-то олл-ином? Новые ставки в него
        // доливать нельзя – они пойдут в свежий банк поверх.
        let top_is_capped = self.top().eligible.iter().any(|&s| {
            in_hand[s]
                && seats[s]
                    .as_ref()
                    .map(|p| p.is_all_in())
                    .unwrap_or(false)
        });
        if top_is_capped && !self.top().amount.is_zero() {
            self.pots.push(Pot::empty());
        }

        loop {
            // Уровень сбора: минимальная ненулевая ставка среди участников.
            let level = (0..MAX_SEATS)
                .filter(|&s| in_hand[s])
                .filter_map(|s| seats[s].as_ref())
                .map(|p| p.bet_size())
                .filter(|b| !b.is_zero())
                .min();

            let Some(level) = level else {
                // Участникам добирать нечего; хвосты ставок сфолдивших –
                // в верхний банк.
                let mut rest = Chips::ZERO;
                for seat in seats.iter_mut().flatten() {
                    let bet = seat.bet_size();
                    rest += seat.take_from_bet(bet);
                }
                if !rest.is_zero() {
                    self.top_mut().amount += rest;
                }
                return;
            };

            // Снимаем уровень со всех, у кого есть ставка (со сфолдивших
            // тоже, но без права на банк).
            let mut collected = Chips::ZERO;
            let mut eligible = Vec::new();

            for s in 0..MAX_SEATS {
                let Some(player) = seats[s].as_mut() else {
                    continue;
                };
                if player.bet_size().is_zero() {
                    continue;
                }

                collected += player.take_from_bet(level);
                if in_hand[s] {
                    eligible.push(s);
                }
            }

            let top = self.top_mut();
            top.amount += collected;
            top.eligible = eligible;

            // Уровень равен минимальной ставке, так что хотя бы один
            // участник закрыл свою. Если у других ставки остались, круг
            // претендентов сузился – открываем сайд-пот.
            let still_betting = (0..MAX_SEATS).any(|s| {
                in_hand[s]
                    && seats[s]
                        .as_ref()
                        .map(|p| !p.bet_size().is_zero())
                        .unwrap_or(false)
            });
            if still_betting {
                self.pots.push(Pot::empty());
            }
        }
    }

    fn top(&self) -> &Pot {
        self.pots.last().expect("всегда есть главный банк")
    }

    fn top_mut(&mut self) -> &mut Pot {
        self.pots.last_mut().expect("всегда есть главный банк")
    }
}

impl Default for PotManager {
    fn default() -> Self {
        Self::new()
    }
}
