//! Тесты очерёдности ходов внутри раунда ставок.
//!
//! Проверяем:
//! - круг без повышений заканчивает раунд на первом ходившем;
//! - агрессор перезапускает круг;
//! - фолды и выбывания (retire) сокращают раунд;
//! - олл-ин (leave|passive) не двигает агрессора.

use holdem_engine::domain::MAX_SEATS;
use holdem_engine::engine::{ActionFlags, Round};

fn mask(seats: &[usize]) -> [bool; MAX_SEATS] {
    let mut m = [false; MAX_SEATS];
    for &s in seats {
        m[s] = true;
    }
    m
}

#[test]
fn full_passive_orbit_ends_round() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);
    assert!(round.in_progress());
    assert!(round.contested());
    assert_eq!(round.player_to_act(), 0);

    round.action_taken(ActionFlags::PASSIVE);
    assert_eq!(round.player_to_act(), 1);
    round.action_taken(ActionFlags::PASSIVE);
    assert_eq!(round.player_to_act(), 2);
    round.action_taken(ActionFlags::PASSIVE);

    assert!(!round.in_progress(), "круг замкнулся на первом ходившем");
}

#[test]
fn aggressor_restarts_the_orbit() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);

    round.action_taken(ActionFlags::PASSIVE); // 0
    round.action_taken(ActionFlags::AGGRESSIVE); // 1 повышает
    assert_eq!(round.last_aggressor(), 1);
    assert_eq!(round.player_to_act(), 2);

    round.action_taken(ActionFlags::PASSIVE); // 2 уравнял
    assert!(round.in_progress(), "игрок 0 должен ответить на повышение");
    assert_eq!(round.player_to_act(), 0);

    round.action_taken(ActionFlags::PASSIVE); // 0 уравнял
    assert!(!round.in_progress(), "ход вернулся к агрессору");
}

#[test]
fn folds_shrink_the_round() {
    let mut round = Round::new(mask(&[0, 1, 2, 3]), 0);

    round.action_taken(ActionFlags::LEAVE); // 0 фолд
    assert_eq!(round.num_active(), 3);
    assert_eq!(round.player_to_act(), 1);

    round.action_taken(ActionFlags::LEAVE); // 1 фолд
    assert_eq!(round.num_active(), 2);
    assert_eq!(round.player_to_act(), 2);

    round.action_taken(ActionFlags::LEAVE); // 2 фолд
    assert_eq!(round.num_active(), 1);
    assert!(!round.in_progress(), "остался один – раунд окончен");
    assert!(!round.contested());
}

#[test]
fn all_in_leaves_queue_without_moving_aggressor() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);

    round.action_taken(ActionFlags::AGGRESSIVE); // 0 ставит
    // 1 заходит в короткий олл-ин: пассивно + выбывает из очереди.
    round.action_taken(ActionFlags::PASSIVE | ActionFlags::LEAVE);
    assert_eq!(round.last_aggressor(), 0, "короткий олл-ин не переоткрывает торговлю");
    assert_eq!(round.player_to_act(), 2);

    round.action_taken(ActionFlags::PASSIVE); // 2 уравнял
    assert!(
        !round.in_progress(),
        "ход дошёл бы до агрессора – раунд окончен, игрок 0 не ходит снова"
    );
}

#[test]
fn aggressive_all_in_reopens_for_others() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);

    round.action_taken(ActionFlags::AGGRESSIVE); // 0 ставит
    // 1 делает полный рейз олл-ин: агрессивно + выбывает.
    round.action_taken(ActionFlags::AGGRESSIVE | ActionFlags::LEAVE);
    assert_eq!(round.last_aggressor(), 1);
    assert_eq!(round.player_to_act(), 2);

    round.action_taken(ActionFlags::PASSIVE); // 2 уравнял
    assert!(round.in_progress(), "игрок 0 должен ответить на полный рейз");
    assert_eq!(round.player_to_act(), 0);

    round.action_taken(ActionFlags::PASSIVE); // 0 уравнял
    assert!(!round.in_progress(), "круг дошёл до выбывшего агрессора");
}

#[test]
fn retire_removes_seat_out_of_turn() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);

    round.retire(2);
    assert!(round.in_progress(), "двое ещё торгуются");
    assert_eq!(round.num_active(), 2);
    assert_eq!(round.player_to_act(), 0);

    round.retire(1);
    assert!(!round.in_progress(), "остался один активный");
}

#[test]
fn retire_of_inactive_seat_is_noop() {
    let mut round = Round::new(mask(&[0, 1, 2]), 0);

    round.retire(5);
    round.retire(5);
    assert_eq!(round.num_active(), 3);
    assert!(round.in_progress());
}

#[test]
fn first_to_act_skips_inactive_seat() {
    // Первый ходящий по позиции в олл-ине с блайнда: очередь сдвигается.
    let mut m = mask(&[2, 5, 7]);
    m[2] = false; // место 2 числится в раздаче, но не активно
    let round = Round::new(m, 2);
    assert_eq!(round.player_to_act(), 5);
    assert!(round.in_progress());
}

#[test]
fn round_with_one_active_never_starts() {
    let round = Round::new(mask(&[4]), 4);
    assert!(!round.in_progress());

    let round = Round::new(mask(&[]), 0);
    assert!(!round.in_progress());
}
