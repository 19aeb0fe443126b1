use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Deck, ForcedBets, HandStage, SeatIndex, Seats, MAX_SEATS};
use crate::engine::actions::Action;
use crate::engine::betting_round::{ActionRange, BettingRound, RoundAction};
use crate::engine::errors::EngineError;
use crate::engine::positions::{clockwise_distance, collect_set_seats_from, next_set_seat};
use crate::engine::pots::{Pot, PotManager};
use crate::engine::RandomSource;
use crate::eval::evaluate_best_hand;

/// Дилер одной раздачи: гонит стадии preflop → flop → turn → river →
/// showdown, раздаёт карты, держит банки и маску участников.
///
/// Живёт от `start_hand` до конца `showdown`. На игроков ссылается только
/// по индексам мест – контейнер мест передаётся в каждый вызов.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dealer {
    button: SeatIndex,
    forced_bets: ForcedBets,
    stage: HandStage,
    deck: Deck,
    community_cards: Vec<Card>,
    hole_cards: [Option<[Card; 2]>; MAX_SEATS],
    /// Кто был сдан в раздачу.
    participants: [bool; MAX_SEATS],
    /// Кто ещё не сфолдил (подмножество participants).
    in_hand: [bool; MAX_SEATS],
    betting_round: Option<BettingRound>,
    pots: PotManager,
}

impl Dealer {
    /// Начать раздачу: анте, блайнды, карманные карты, префлоп-раунд.
    ///
    /// Вызывающий код гарантирует, что мест с фишками хотя бы два и что
    /// `button` указывает на участника.
    pub fn new<R: RandomSource>(
        seats: &mut Seats,
        button: SeatIndex,
        forced_bets: ForcedBets,
        rng: &mut R,
    ) -> Self {
        let mut participants = [false; MAX_SEATS];
        for (s, seat) in seats.iter().enumerate() {
            if let Some(p) = seat {
                if !p.total_chips().is_zero() {
                    participants[s] = true;
                }
            }
        }
        debug_assert!(participants[button], "кнопка должна стоять на участнике");

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        let mut dealer = Dealer {
            button,
            forced_bets,
            stage: HandStage::Preflop,
            deck,
            community_cards: Vec::with_capacity(5),
            hole_cards: [None; MAX_SEATS],
            participants,
            in_hand: participants,
            betting_round: None,
            pots: PotManager::new(),
        };

        dealer.post_antes(seats);
        let big_blind_seat = dealer.post_blinds(seats);
        dealer.deal_hole_cards();
        dealer.start_preflop_round(seats, big_blind_seat);
        dealer
    }

    //
    // Наблюдатели
    //

    pub fn stage(&self) -> HandStage {
        self.stage
    }

    pub fn button(&self) -> SeatIndex {
        self.button
    }

    pub fn betting_round_in_progress(&self) -> bool {
        self.betting_round
            .as_ref()
            .map(|br| br.in_progress())
            .unwrap_or(false)
    }

    pub fn player_to_act(&self) -> Option<SeatIndex> {
        self.betting_round
            .as_ref()
            .filter(|br| br.in_progress())
            .map(|br| br.player_to_act())
    }

    /// Текущая ставка раунда (0, если торговли нет).
    pub fn biggest_bet(&self) -> Chips {
        self.betting_round
            .as_ref()
            .map(|br| br.biggest_bet())
            .unwrap_or(Chips::ZERO)
    }

    pub fn num_active(&self) -> usize {
        self.betting_round
            .as_ref()
            .map(|br| br.num_active())
            .unwrap_or(0)
    }

    /// Активен ли игрок в текущем раунде ставок (не сфолдил, не в олл-ине).
    pub fn is_active_in_round(&self, seat: SeatIndex) -> bool {
        self.betting_round
            .as_ref()
            .map(|br| br.is_active(seat))
            .unwrap_or(false)
    }

    pub fn is_participant(&self, seat: SeatIndex) -> bool {
        seat < MAX_SEATS && self.participants[seat]
    }

    pub fn in_hand(&self, seat: SeatIndex) -> bool {
        seat < MAX_SEATS && self.in_hand[seat]
    }

    pub fn in_hand_count(&self) -> usize {
        self.in_hand.iter().filter(|b| **b).count()
    }

    pub fn pots(&self) -> &[Pot] {
        self.pots.pots()
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn hole_cards(&self, seat: SeatIndex) -> Option<[Card; 2]> {
        if !self.in_hand(seat) {
            return None;
        }
        self.hole_cards[seat]
    }

    /// Допустимые действия текущего ходящего (None – торговли нет).
    pub fn legal_actions(&self, seats: &Seats) -> Option<ActionRange> {
        self.betting_round
            .as_ref()
            .filter(|br| br.in_progress())
            .map(|br| br.legal_actions(seats))
    }

    //
    // Модификаторы
    //

    /// Действие текущего ходящего.
    pub fn action_taken(&mut self, seats: &mut Seats, action: Action) -> Result<(), EngineError> {
        let br = self
            .betting_round
            .as_mut()
            .filter(|br| br.in_progress())
            .ok_or(EngineError::NoBettingRound)?;

        let seat = br.player_to_act();
        let player = seats[seat]
            .as_ref()
            .ok_or(EngineError::Internal("ходящий без игрока"))?;

        let owes = br.biggest_bet() > player.bet_size();

        let round_action = match action {
            Action::Fold => RoundAction::Leave,
            Action::Check => {
                if owes {
                    return Err(EngineError::CannotCheck);
                }
                RoundAction::Match
            }
            Action::Call => {
                if !owes {
                    return Err(EngineError::CannotCall);
                }
                RoundAction::Match
            }
            Action::Bet(amount) => {
                if !br.biggest_bet().is_zero() {
                    return Err(EngineError::CannotBet);
                }
                RoundAction::Raise(amount)
            }
            Action::Raise(amount) => {
                if br.biggest_bet().is_zero() {
                    return Err(EngineError::CannotRaise);
                }
                RoundAction::Raise(amount)
            }
        };

        br.action_taken(seats, round_action)?;

        if matches!(action, Action::Fold) {
            self.in_hand[seat] = false;
        }

        Ok(())
    }

    /// Убрать участника из раздачи вне очереди (встал из-за стола).
    /// Его уже выставленные фишки остаются и уйдут в банк.
    pub fn retire_seat(&mut self, seat: SeatIndex) {
        if !self.in_hand(seat) {
            return;
        }
        self.in_hand[seat] = false;
        if let Some(br) = &mut self.betting_round {
            br.retire(seat);
        }
    }

    /// Завершить раунд ставок: собрать банк и решить, что дальше –
    /// следующая улица, добор борда без торговли или шоудаун.
    pub fn end_betting_round(&mut self, seats: &mut Seats) -> Result<(), EngineError> {
        if !self.stage.is_betting() {
            return Err(EngineError::NoBettingRound);
        }
        if self.betting_round_in_progress() {
            return Err(EngineError::BettingRoundInProgress);
        }

        self.pots.collect_bets(seats, &self.in_hand);
        self.betting_round = None;

        // Остался один – сразу шоудаун, борд не добираем.
        if self.in_hand_count() <= 1 {
            self.stage = HandStage::Showdown;
            return Ok(());
        }

        // Торговаться больше некому (все, кроме максимум одного, в
        // олл-ине) – добираем борд и идём на шоудаун.
        let can_still_bet = (0..MAX_SEATS)
            .filter(|&s| self.in_hand[s])
            .filter_map(|s| seats[s].as_ref())
            .filter(|p| !p.is_all_in())
            .count();
        if can_still_bet <= 1 {
            while self.community_cards.len() < 5 {
                self.deal_next_street_cards();
            }
            self.stage = HandStage::Showdown;
            return Ok(());
        }

        match self.stage {
            HandStage::Preflop => {
                self.deal_next_street_cards();
                self.stage = HandStage::Flop;
            }
            HandStage::Flop => {
                self.deal_next_street_cards();
                self.stage = HandStage::Turn;
            }
            HandStage::Turn => {
                self.deal_next_street_cards();
                self.stage = HandStage::River;
            }
            HandStage::River => {
                self.stage = HandStage::Showdown;
                return Ok(());
            }
            _ => return Err(EngineError::Internal("end_betting_round вне улицы")),
        }

        // Новый раунд: первым ходит первый активный слева от кнопки.
        let active = self.active_mask(seats);
        let first = next_set_seat(&active, (self.button + 1) % MAX_SEATS, true)
            .unwrap_or(self.button);
        self.betting_round = Some(BettingRound::new(
            active,
            first,
            Chips::ZERO,
            self.forced_bets.blinds.big,
        ));

        Ok(())
    }

    /// Вскрытие: раздать банки по силе рук и закрыть раздачу.
    pub fn showdown(&mut self, seats: &mut Seats) -> Result<(), EngineError> {
        if self.stage != HandStage::Showdown {
            return Err(EngineError::ShowdownNotReady);
        }

        let in_hand_count = self.in_hand_count();

        // Ранги участников считаем только при реальном вскрытии.
        let mut rankings = [None; MAX_SEATS];
        if in_hand_count > 1 {
            for s in 0..MAX_SEATS {
                if !self.in_hand[s] {
                    continue;
                }
                if let Some(hole) = &self.hole_cards[s] {
                    rankings[s] = Some(evaluate_best_hand(hole, &self.community_cards));
                }
            }
        }

        for pot in self.pots.pots().to_vec() {
            if pot.amount().is_zero() {
                continue;
            }

            // Право на банк: из записанных в банке – те, кто не сфолдил.
            let mut candidates: Vec<SeatIndex> = pot
                .eligible()
                .iter()
                .copied()
                .filter(|&s| self.in_hand[s])
                .collect();
            if candidates.is_empty() {
                // Банк без претендентов (все его вкладчики сфолдили или
                // встали): отдаём оставшимся в раздаче.
                candidates = (0..MAX_SEATS).filter(|&s| self.in_hand[s]).collect();
            }
            if candidates.is_empty() {
                continue;
            }

            let winners: Vec<SeatIndex> = if candidates.len() == 1 {
                candidates
            } else {
                let best = candidates
                    .iter()
                    .filter_map(|&s| rankings[s])
                    .max()
                    .expect("у претендентов есть ранги");
                candidates
                    .into_iter()
                    .filter(|&s| rankings[s] == Some(best))
                    .collect()
            };

            // Делим поровну; нечётные фишки – по одному, начиная с
            // ближайшего по часовой стрелке от кнопки.
            let mut winners = winners;
            winners.sort_by_key(|&s| clockwise_distance((self.button + 1) % MAX_SEATS, s));

            let share = Chips(pot.amount().0 / winners.len() as u64);
            let mut remainder = pot.amount().0 % winners.len() as u64;

            for &s in &winners {
                let mut prize = share;
                if remainder > 0 {
                    prize += Chips(1);
                    remainder -= 1;
                }
                if let Some(player) = seats[s].as_mut() {
                    player.award(prize);
                }
            }
        }

        self.stage = HandStage::Complete;
        Ok(())
    }

    //
    // Внутренности
    //

    /// Маска тех, кто может торговаться: в раздаче и со стеком.
    fn active_mask(&self, seats: &Seats) -> [bool; MAX_SEATS] {
        let mut mask = [false; MAX_SEATS];
        for s in 0..MAX_SEATS {
            if self.in_hand[s] {
                if let Some(p) = &seats[s] {
                    mask[s] = !p.is_all_in();
                }
            }
        }
        mask
    }

    /// Анте снимается со всех участников до блайндов и сразу уходит в банк.
    fn post_antes(&mut self, seats: &mut Seats) {
        let ante = self.forced_bets.ante;
        if ante.is_zero() {
            return;
        }
        for s in 0..MAX_SEATS {
            if !self.participants[s] {
                continue;
            }
            if let Some(p) = seats[s].as_mut() {
                p.bet(ante.min(p.total_chips()));
            }
        }
        self.pots.collect_bets(seats, &self.in_hand);
    }

    /// Блайнды: SB – первый по часовой от кнопки (в хедз-апе сама кнопка),
    /// BB – следующий. Возвращает место большого блайнда.
    fn post_blinds(&mut self, seats: &mut Seats) -> SeatIndex {
        let order = collect_set_seats_from(&self.participants, self.button);
        let (sb_seat, bb_seat) = if order.len() == 2 {
            (order[0], order[1])
        } else {
            (order[1], order[2])
        };

        let blinds = self.forced_bets.blinds;
        if let Some(p) = seats[sb_seat].as_mut() {
            p.bet(blinds.small.min(p.total_chips()));
        }
        if let Some(p) = seats[bb_seat].as_mut() {
            p.bet(blinds.big.min(p.total_chips()));
        }
        bb_seat
    }

    /// Карманные карты: по одной, два круга, начиная слева от кнопки.
    fn deal_hole_cards(&mut self) {
        let first = next_set_seat(&self.participants, (self.button + 1) % MAX_SEATS, true)
            .unwrap_or(self.button);
        let order = collect_set_seats_from(&self.participants, first);

        let mut first_pass = [None; MAX_SEATS];
        for &s in &order {
            first_pass[s] = self.deck.draw_one();
        }
        for &s in &order {
            let c1 = first_pass[s].expect("в колоде хватает карт на раздачу");
            let c2 = self
                .deck
                .draw_one()
                .expect("в колоде хватает карт на раздачу");
            self.hole_cards[s] = Some([c1, c2]);
        }
    }

    /// Префлоп-раунд: ставка = BB, первый ходит за большим блайндом
    /// (в хедз-апе – кнопка).
    fn start_preflop_round(&mut self, seats: &Seats, big_blind_seat: SeatIndex) {
        let active = self.active_mask(seats);
        let first = next_set_seat(&active, (big_blind_seat + 1) % MAX_SEATS, true)
            .unwrap_or(big_blind_seat);
        let bb = self.forced_bets.blinds.big;
        self.betting_round = Some(BettingRound::new(active, first, bb, bb));
    }

    /// Сжечь карту и открыть следующую порцию борда (флоп 3, дальше по 1).
    fn deal_next_street_cards(&mut self) {
        self.deck.burn_one();
        let count = if self.community_cards.is_empty() { 3 } else { 1 };
        for _ in 0..count {
            let card = self
                .deck
                .draw_one()
                .expect("в колоде хватает карт на борд");
            self.community_cards.push(card);
        }
    }
}
