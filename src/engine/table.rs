use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, ForcedBets, Player, SeatIndex, Seats, MAX_SEATS};
use crate::engine::actions::Action;
use crate::engine::auto_actions::{
    legal_automatic_actions, AutomaticAction, AutomaticActionFlags,
};
use crate::engine::betting_round::ActionRange;
use crate::engine::dealer::Dealer;
use crate::engine::errors::EngineError;
use crate::engine::positions::next_set_seat;
use crate::engine::pots::Pot;
use crate::engine::RandomSource;

/// Стол: публичный фасад движка.
///
/// Владеет местами, кнопкой, форсированными ставками и автоматическими
/// действиями; на время раздачи создаёт [`Dealer`]. Все операции
/// синхронные: каждый вызов возвращается после полного применения
/// эффектов, включая сработавшие автоматические действия.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    forced_bets: ForcedBets,
    seats: Seats,
    button: SeatIndex,
    dealer: Option<Dealer>,
    auto_actions: [Option<AutomaticAction>; MAX_SEATS],
    /// Места, которые освободятся по окончании раздачи (встали во время).
    pending_leave: [bool; MAX_SEATS],
}

impl Table {
    pub fn new(forced_bets: ForcedBets) -> Self {
        Self {
            forced_bets,
            seats: Default::default(),
            button: 0,
            dealer: None,
            auto_actions: [None; MAX_SEATS],
            pending_leave: [false; MAX_SEATS],
        }
    }

    //
    // Наблюдатели
    //

    pub fn forced_bets(&self) -> ForcedBets {
        self.forced_bets
    }

    pub fn button(&self) -> SeatIndex {
        self.button
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    pub fn hand_in_progress(&self) -> bool {
        self.dealer.is_some()
    }

    pub fn betting_round_in_progress(&self) -> bool {
        self.dealer
            .as_ref()
            .map(|d| d.betting_round_in_progress())
            .unwrap_or(false)
    }

    pub fn player_to_act(&self) -> Option<SeatIndex> {
        self.dealer.as_ref().and_then(|d| d.player_to_act())
    }

    /// Сколько игроков ещё могут ходить в текущем раунде ставок.
    pub fn num_active_players(&self) -> usize {
        match &self.dealer {
            Some(d) if d.betting_round_in_progress() => d.num_active(),
            Some(d) => d.in_hand_count(),
            None => 0,
        }
    }

    /// Участники раздачи, ещё не сфолдившие (None – место вне раздачи).
    pub fn hand_players(&self) -> [Option<&Player>; MAX_SEATS] {
        let mut out = [None; MAX_SEATS];
        if let Some(d) = &self.dealer {
            for (s, slot) in out.iter_mut().enumerate() {
                if d.in_hand(s) {
                    *slot = self.seats[s].as_ref();
                }
            }
        }
        out
    }

    /// Допустимые действия текущего ходящего (None – торговли нет).
    pub fn legal_actions(&self) -> Option<ActionRange> {
        self.dealer.as_ref().and_then(|d| d.legal_actions(&self.seats))
    }

    pub fn automatic_actions(&self) -> &[Option<AutomaticAction>; MAX_SEATS] {
        &self.auto_actions
    }

    /// Набор автоматических действий, доступных месту прямо сейчас.
    pub fn legal_automatic_actions(&self, seat: SeatIndex) -> AutomaticActionFlags {
        let Some(d) = &self.dealer else {
            return AutomaticActionFlags::EMPTY;
        };
        if !d.betting_round_in_progress() || !d.is_active_in_round(seat) {
            return AutomaticActionFlags::EMPTY;
        }
        match &self.seats[seat] {
            Some(p) => legal_automatic_actions(p, d.biggest_bet()),
            None => AutomaticActionFlags::EMPTY,
        }
    }

    pub fn pots(&self) -> &[Pot] {
        self.dealer.as_ref().map(|d| d.pots()).unwrap_or(&[])
    }

    pub fn community_cards(&self) -> &[Card] {
        self.dealer
            .as_ref()
            .map(|d| d.community_cards())
            .unwrap_or(&[])
    }

    /// Карманные карты участника (None – место вне раздачи или сфолдило).
    pub fn hole_cards(&self, seat: SeatIndex) -> Option<[Card; 2]> {
        self.dealer.as_ref().and_then(|d| d.hole_cards(seat))
    }

    //
    // Рассадка и настройки
    //

    /// Посадить игрока с бай-ином. Место должно быть свободно; в текущую
    /// раздачу новый игрок не попадает.
    pub fn sit_down(&mut self, seat: SeatIndex, buy_in: Chips) -> Result<(), EngineError> {
        if seat >= MAX_SEATS {
            return Err(EngineError::InvalidSeat(seat));
        }
        if buy_in.is_zero() {
            return Err(EngineError::InvalidBuyIn);
        }
        if self.seats[seat].is_some() {
            return Err(EngineError::SeatTaken(seat));
        }
        self.seats[seat] = Some(Player::new(buy_in));
        Ok(())
    }

    /// Убрать игрока с места.
    ///
    /// Между раздачами место освобождается сразу. Во время раздачи игрок
    /// считается сфолдившим (ходящий – немедленно, остальные – вне
    /// очереди с пометкой fold в автоматических действиях), а место
    /// освобождается по окончании раздачи: его выставленные фишки ещё
    /// должны уйти в банк.
    pub fn stand_up(&mut self, seat: SeatIndex) -> Result<(), EngineError> {
        if seat >= MAX_SEATS {
            return Err(EngineError::InvalidSeat(seat));
        }
        if self.seats[seat].is_none() {
            return Err(EngineError::EmptySeat);
        }

        let participant = self
            .dealer
            .as_ref()
            .map(|d| d.is_participant(seat))
            .unwrap_or(false);
        if !participant {
            self.seats[seat] = None;
            return Ok(());
        }

        let in_hand = self.dealer.as_ref().map(|d| d.in_hand(seat)).unwrap_or(false);
        if in_hand {
            let is_actor = self
                .dealer
                .as_ref()
                .map(|d| d.betting_round_in_progress() && d.player_to_act() == Some(seat))
                .unwrap_or(false);

            if is_actor {
                self.apply_action(Action::Fold)?;
                self.resolve_automatic_actions();
            } else {
                let d = self.dealer.as_mut().expect("раздача идёт");
                d.retire_seat(seat);
                self.auto_actions[seat] = Some(AutomaticAction::Fold);
            }
        }

        self.pending_leave[seat] = true;
        Ok(())
    }

    /// Сменить форсированные ставки. Только между раздачами.
    pub fn set_forced_bets(&mut self, forced_bets: ForcedBets) -> Result<(), EngineError> {
        if self.dealer.is_some() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        self.forced_bets = forced_bets;
        Ok(())
    }

    //
    // Жизненный цикл раздачи
    //

    /// Начать раздачу. Нужно хотя бы два занятых места с фишками.
    /// Кнопка встаёт на первое занятое место, начиная с прошлой позиции.
    pub fn start_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        if self.dealer.is_some() {
            return Err(EngineError::HandAlreadyInProgress);
        }

        let mut with_chips = [false; MAX_SEATS];
        for (s, seat) in self.seats.iter().enumerate() {
            if let Some(p) = seat {
                if !p.total_chips().is_zero() {
                    with_chips[s] = true;
                }
            }
        }
        if with_chips.iter().filter(|b| **b).count() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        self.button = next_set_seat(&with_chips, self.button, true)
            .expect("есть хотя бы два места с фишками");
        self.auto_actions = [None; MAX_SEATS];
        self.pending_leave = [false; MAX_SEATS];

        self.dealer = Some(Dealer::new(
            &mut self.seats,
            self.button,
            self.forced_bets,
            rng,
        ));
        Ok(())
    }

    /// Действие текущего ходящего. После него отыгрываются назревшие
    /// автоматические действия, пока очередной ходящий без намерения
    /// или раунд не кончился.
    pub fn action_taken(&mut self, action: Action) -> Result<(), EngineError> {
        if self.dealer.is_none() {
            return Err(EngineError::NoHandInProgress);
        }
        self.apply_action(action)?;
        self.resolve_automatic_actions();
        Ok(())
    }

    /// Завершить раунд ставок и продвинуть раздачу (следующая улица,
    /// добор борда или готовность к шоудауну).
    pub fn end_betting_round(&mut self) -> Result<(), EngineError> {
        let Some(d) = self.dealer.as_mut() else {
            return Err(EngineError::NoHandInProgress);
        };
        d.end_betting_round(&mut self.seats)?;
        self.resolve_automatic_actions();
        Ok(())
    }

    /// Вскрытие и раздача банков; закрывает раздачу: стол очищает дилера,
    /// двигает кнопку и освобождает места вставших во время раздачи.
    pub fn showdown(&mut self) -> Result<(), EngineError> {
        let Some(d) = self.dealer.as_mut() else {
            return Err(EngineError::NoHandInProgress);
        };
        d.showdown(&mut self.seats)?;
        self.dealer = None;

        for s in 0..MAX_SEATS {
            if self.pending_leave[s] {
                self.seats[s] = None;
                self.pending_leave[s] = false;
            }
        }
        self.auto_actions = [None; MAX_SEATS];

        let mut occupied = [false; MAX_SEATS];
        for (s, seat) in self.seats.iter().enumerate() {
            occupied[s] = seat.is_some();
        }
        if let Some(next) = next_set_seat(&occupied, (self.button + 1) % MAX_SEATS, true) {
            self.button = next;
        }
        Ok(())
    }

    //
    // Автоматические действия
    //

    /// Сохранить намерение для места (не текущего ходящего).
    pub fn set_automatic_action(
        &mut self,
        seat: SeatIndex,
        action: AutomaticAction,
    ) -> Result<(), EngineError> {
        if seat >= MAX_SEATS {
            return Err(EngineError::InvalidSeat(seat));
        }
        let Some(d) = &self.dealer else {
            return Err(EngineError::NoHandInProgress);
        };
        let player = self.seats[seat].as_ref().ok_or(EngineError::EmptySeat)?;

        if !d.betting_round_in_progress() {
            return Err(EngineError::NoBettingRound);
        }
        if !d.is_active_in_round(seat) || d.player_to_act() == Some(seat) {
            return Err(EngineError::IllegalAutomaticAction);
        }
        if !legal_automatic_actions(player, d.biggest_bet()).contains(action.flag()) {
            return Err(EngineError::IllegalAutomaticAction);
        }

        self.auto_actions[seat] = Some(action);
        Ok(())
    }

    /// Применить одно действие текущего ходящего и обновить намерения
    /// остальных по новой обстановке.
    fn apply_action(&mut self, action: Action) -> Result<(), EngineError> {
        let d = self.dealer.as_mut().ok_or(EngineError::NoHandInProgress)?;
        let seat = d.player_to_act().ok_or(EngineError::NoBettingRound)?;
        let bet_before = d.biggest_bet();

        d.action_taken(&mut self.seats, action)?;

        // Игрок походил сам – его намерение сгорает.
        self.auto_actions[seat] = None;
        self.refresh_intents_after(seat, bet_before);
        Ok(())
    }

    /// Пересмотр намерений после выросшей ставки:
    ///   check_fold → fold, check → снимается, call_any → call, если
    ///   рейзер ушёл в олл-ин и перерейзить больше некому (сумма колла
    ///   уже известна).
    fn refresh_intents_after(&mut self, acted_seat: SeatIndex, bet_before: Chips) {
        let Some(d) = &self.dealer else { return };
        let bet_after = d.biggest_bet();
        if bet_after <= bet_before {
            return;
        }

        let raiser_all_in = self.seats[acted_seat]
            .as_ref()
            .map(|p| p.is_all_in())
            .unwrap_or(false);

        for s in 0..MAX_SEATS {
            if s == acted_seat || !d.is_active_in_round(s) {
                continue;
            }
            let Some(intent) = self.auto_actions[s] else {
                continue;
            };
            let updated = match intent {
                AutomaticAction::CheckFold => Some(AutomaticAction::Fold),
                AutomaticAction::Check => None,
                AutomaticAction::CallAny => {
                    if raiser_all_in && !self.anyone_can_reraise(s, bet_after) {
                        Some(AutomaticAction::Call)
                    } else {
                        Some(AutomaticAction::CallAny)
                    }
                }
                other => Some(other),
            };
            self.auto_actions[s] = updated;
        }
    }

    /// Может ли кто-то, кроме самого носителя намерения, ещё поднять
    /// ставку выше текущей.
    fn anyone_can_reraise(&self, except: SeatIndex, biggest_bet: Chips) -> bool {
        let Some(d) = &self.dealer else { return false };
        (0..MAX_SEATS).any(|s| {
            s != except
                && d.is_active_in_round(s)
                && self.seats[s]
                    .as_ref()
                    .map(|p| p.total_chips() > biggest_bet)
                    .unwrap_or(false)
        })
    }

    /// Отыграть намерения: пока у очередного ходящего есть легальное
    /// намерение, оно срабатывает как обычное действие и снимается.
    fn resolve_automatic_actions(&mut self) {
        loop {
            let Some(d) = &self.dealer else { return };
            if !d.betting_round_in_progress() {
                return;
            }
            let Some(seat) = d.player_to_act() else { return };
            let Some(intent) = self.auto_actions[seat] else {
                return;
            };
            let Some(player) = &self.seats[seat] else { return };

            let biggest_bet = d.biggest_bet();
            let owes = biggest_bet > player.bet_size();

            let action = match intent {
                AutomaticAction::Fold => Action::Fold,
                AutomaticAction::Check | AutomaticAction::CheckFold => {
                    if owes {
                        // Сюда не попадаем: рейз снял бы/понизил намерение.
                        return;
                    }
                    Action::Check
                }
                AutomaticAction::Call | AutomaticAction::CallAny => {
                    if owes {
                        Action::Call
                    } else {
                        Action::Check
                    }
                }
                AutomaticAction::AllIn => {
                    let total = player.total_chips();
                    if total > biggest_bet {
                        if biggest_bet.is_zero() {
                            Action::Bet(total)
                        } else {
                            Action::Raise(total)
                        }
                    } else if owes {
                        Action::Call
                    } else {
                        Action::Check
                    }
                }
            };

            self.auto_actions[seat] = None;
            if self.apply_action(action).is_err() {
                debug_assert!(false, "автоматическое действие оказалось нелегальным");
                return;
            }
        }
    }
}
