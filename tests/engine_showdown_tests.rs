//! Тесты вскрытия: раздача банков по силе рук, добор борда при олл-инах,
//! сплит при равных руках.
//!
//! Карты приходят из детерминированного RNG; ожидаемого победителя
//! считаем тем же оценщиком по наблюдаемым картам и сверяем со стеками.

use std::cmp::Ordering;

use holdem_engine::domain::{Blinds, Chips, ForcedBets};
use holdem_engine::engine::{Action, Table};
use holdem_engine::eval::evaluate_best_hand;
use holdem_engine::infra::DeterministicRng;

fn chips(n: u64) -> Chips {
    Chips::new(n)
}

fn blinds_25_50() -> ForcedBets {
    ForcedBets::new(Blinds::new(chips(25), chips(50)))
}

fn stack(t: &Table, seat: usize) -> Chips {
    t.seats()[seat].as_ref().unwrap().stack()
}

/// Хедз-ап, прочеканный до ривера: банк 100 уходит сильнейшей руке.
#[test]
fn checked_down_heads_up_awards_best_hand() {
    for seed in [1u64, 2, 3, 4, 5, 42, 1000] {
        let mut t = Table::new(blinds_25_50());
        t.sit_down(0, chips(1000)).unwrap();
        t.sit_down(1, chips(1000)).unwrap();
        let mut rng = DeterministicRng::from_u64(seed);
        t.start_hand(&mut rng).unwrap();

        t.action_taken(Action::Call).unwrap(); // кнопка-SB доплачивает
        t.action_taken(Action::Check).unwrap(); // BB
        t.end_betting_round().unwrap();

        for _ in 0..3 {
            // Постфлоп первым ходит BB (место 1).
            assert_eq!(t.player_to_act(), Some(1));
            t.action_taken(Action::Check).unwrap();
            t.action_taken(Action::Check).unwrap();
            t.end_betting_round().unwrap();
        }

        assert_eq!(t.community_cards().len(), 5);
        let pot_total: Chips = t.pots().iter().map(|p| p.amount()).sum();
        assert_eq!(pot_total, chips(100));

        let hole0 = t.hole_cards(0).unwrap();
        let hole1 = t.hole_cards(1).unwrap();
        let board = t.community_cards().to_vec();
        let rank0 = evaluate_best_hand(&hole0, &board);
        let rank1 = evaluate_best_hand(&hole1, &board);

        t.showdown().unwrap();
        assert!(!t.hand_in_progress());

        match rank0.cmp(&rank1) {
            Ordering::Greater => {
                assert_eq!(stack(&t, 0), chips(1050), "seed {seed}: банк месту 0");
                assert_eq!(stack(&t, 1), chips(950));
            }
            Ordering::Less => {
                assert_eq!(stack(&t, 0), chips(950), "seed {seed}: банк месту 1");
                assert_eq!(stack(&t, 1), chips(1050));
            }
            Ordering::Equal => {
                assert_eq!(stack(&t, 0), chips(1000), "seed {seed}: сплит");
                assert_eq!(stack(&t, 1), chips(1000));
            }
        }
    }
}

/// Колл в олл-ин: борд добирается без торговли, банк – по силе рук.
#[test]
fn all_in_call_runs_out_the_board() {
    let mut t = Table::new(blinds_25_50());
    t.sit_down(0, chips(2000)).unwrap();
    t.sit_down(1, chips(300)).unwrap();
    let mut rng = DeterministicRng::from_u64(99);
    t.start_hand(&mut rng).unwrap();

    t.action_taken(Action::Raise(chips(300))).unwrap(); // кнопка ставит ровно стек соперника
    t.action_taken(Action::Call).unwrap(); // BB в олл-ине коллом
    assert!(!t.betting_round_in_progress());

    t.end_betting_round().unwrap();
    assert_eq!(
        t.community_cards().len(),
        5,
        "торговли больше нет – борд доезжает сразу"
    );

    let hole0 = t.hole_cards(0).unwrap();
    let hole1 = t.hole_cards(1).unwrap();
    let board = t.community_cards().to_vec();
    let rank0 = evaluate_best_hand(&hole0, &board);
    let rank1 = evaluate_best_hand(&hole1, &board);

    t.showdown().unwrap();

    let s0 = stack(&t, 0);
    let s1 = stack(&t, 1);
    assert_eq!(s0 + s1, chips(2300), "фишки сохранились");
    match rank0.cmp(&rank1) {
        Ordering::Greater => assert_eq!(s1, chips(0)),
        Ordering::Less => assert_eq!(s1, chips(600)),
        Ordering::Equal => assert_eq!(s1, chips(300)),
    }
}

/// Нечётный банк: при сплите лишняя фишка уходит ближайшему по часовой
/// стрелке от кнопки.
#[test]
fn odd_chip_goes_clockwise_from_button() {
    // Анте 1 делает банк нечётным (3 + 50 + 50 = 103): при сплите на
    // двоих остаётся одна фишка. Гоняем несколько сидов и проверяем
    // распределение в каждом исходе.
    for seed in 1u64..=20 {
        let mut t = Table::new(ForcedBets::with_ante(
            Blinds::new(chips(25), chips(50)),
            chips(1),
        ));
        t.sit_down(0, chips(1000)).unwrap();
        t.sit_down(1, chips(1000)).unwrap();
        t.sit_down(2, chips(1000)).unwrap();
        let mut rng = DeterministicRng::from_u64(seed);
        t.start_hand(&mut rng).unwrap();

        // Кнопка 0, SB 1, BB 2. Кнопка фолдит, блайнды доигрывают чеками.
        t.action_taken(Action::Fold).unwrap();
        t.action_taken(Action::Call).unwrap(); // SB доплачивает 25
        t.action_taken(Action::Check).unwrap(); // BB
        t.end_betting_round().unwrap();
        for _ in 0..3 {
            t.action_taken(Action::Check).unwrap();
            t.action_taken(Action::Check).unwrap();
            t.end_betting_round().unwrap();
        }

        let hole1 = t.hole_cards(1).unwrap();
        let hole2 = t.hole_cards(2).unwrap();
        let board = t.community_cards().to_vec();
        let rank1 = evaluate_best_hand(&hole1, &board);
        let rank2 = evaluate_best_hand(&hole2, &board);

        t.showdown().unwrap();

        let s1 = stack(&t, 1);
        let s2 = stack(&t, 2);
        assert_eq!(stack(&t, 0), chips(999), "seed {seed}: кнопка потеряла анте");
        assert_eq!(s1 + s2, chips(2001), "seed {seed}: банк 103 разошёлся целиком");
        match rank1.cmp(&rank2) {
            Ordering::Greater => assert_eq!(s1, chips(1052), "seed {seed}"),
            Ordering::Less => assert_eq!(s2, chips(1052), "seed {seed}"),
            Ordering::Equal => {
                // 103 на двоих: по 51 и нечётная фишка – SB, он ближе к кнопке.
                assert_eq!(s1, chips(1001), "seed {seed}");
                assert_eq!(s2, chips(1000), "seed {seed}");
            }
        }
    }
}
