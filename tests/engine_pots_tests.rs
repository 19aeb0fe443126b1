//! Тесты сборщика банков: уровни, сайд-поты, остатки сфолдивших,
//! сохранение фишек.

use holdem_engine::domain::{Chips, Player, Seats, MAX_SEATS};
use holdem_engine::engine::PotManager;

fn chips(n: u64) -> Chips {
    Chips::new(n)
}

fn seats_with(stacks: &[u64]) -> Seats {
    let mut seats: Seats = Default::default();
    for (i, &stack) in stacks.iter().enumerate() {
        seats[i] = Some(Player::new(chips(stack)));
    }
    seats
}

fn in_hand(seats_list: &[usize]) -> [bool; MAX_SEATS] {
    let mut m = [false; MAX_SEATS];
    for &s in seats_list {
        m[s] = true;
    }
    m
}

fn bet(seats: &mut Seats, seat: usize, amount: u64) {
    seats[seat].as_mut().unwrap().bet(chips(amount));
}

fn total_chips_everywhere(seats: &Seats, pots: &PotManager) -> Chips {
    let on_seats: Chips = seats
        .iter()
        .flatten()
        .map(|p| p.total_chips())
        .sum();
    on_seats + pots.total()
}

#[test]
fn equal_bets_form_single_pot() {
    let mut seats = seats_with(&[1000, 1000, 1000]);
    for s in 0..3 {
        bet(&mut seats, s, 100);
    }

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1, 2]));

    assert_eq!(pots.pots().len(), 1);
    assert_eq!(pots.pots()[0].amount(), chips(300));
    assert_eq!(pots.pots()[0].eligible(), &[0, 1, 2]);
    assert_eq!(seats[0].as_ref().unwrap().bet_size(), chips(0));
}

#[test]
fn short_all_in_opens_side_pot() {
    let mut seats = seats_with(&[1000, 80, 1000]);
    bet(&mut seats, 0, 200);
    bet(&mut seats, 1, 80); // олл-ин
    bet(&mut seats, 2, 200);

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1, 2]));

    assert_eq!(pots.pots().len(), 2, "главный банк и один сайд-пот");
    assert_eq!(pots.pots()[0].amount(), chips(240));
    assert_eq!(pots.pots()[0].eligible(), &[0, 1, 2]);
    assert_eq!(pots.pots()[1].amount(), chips(240));
    assert_eq!(pots.pots()[1].eligible(), &[0, 2], "короткий стек без права на сайд-пот");
}

#[test]
fn two_all_ins_form_three_pots() {
    let mut seats = seats_with(&[50, 120, 1000, 1000]);
    bet(&mut seats, 0, 50); // олл-ин
    bet(&mut seats, 1, 120); // олл-ин
    bet(&mut seats, 2, 400);
    bet(&mut seats, 3, 400);

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1, 2, 3]));

    let pots = pots.pots();
    assert_eq!(pots.len(), 3);
    assert_eq!(pots[0].amount(), chips(200)); // 50 x 4
    assert_eq!(pots[0].eligible(), &[0, 1, 2, 3]);
    assert_eq!(pots[1].amount(), chips(210)); // 70 x 3
    assert_eq!(pots[1].eligible(), &[1, 2, 3]);
    assert_eq!(pots[2].amount(), chips(560)); // 280 x 2
    assert_eq!(pots[2].eligible(), &[2, 3]);
}

#[test]
fn folded_bets_are_absorbed_without_eligibility() {
    let mut seats = seats_with(&[1000, 1000, 1000]);
    bet(&mut seats, 0, 200);
    bet(&mut seats, 1, 100); // сфолдил после ставки
    bet(&mut seats, 2, 200);

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 2]));

    assert_eq!(pots.pots().len(), 1);
    assert_eq!(pots.pots()[0].amount(), chips(500));
    assert_eq!(pots.pots()[0].eligible(), &[0, 2], "сфолдивший не претендует на банк");
}

#[test]
fn dead_money_respects_all_in_levels() {
    // Сфолдивший внёс 100: 80 из них – в банк, который может выиграть
    // короткий стек, остальное – в сайд-пот поверх.
    let mut seats = seats_with(&[1000, 80, 1000]);
    bet(&mut seats, 0, 150);
    bet(&mut seats, 1, 80); // олл-ин
    bet(&mut seats, 2, 100); // сфолдил после колла 100

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1]));

    let pots = pots.pots();
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount(), chips(240)); // 80+80 и 80 мёртвых
    assert_eq!(pots[0].eligible(), &[0, 1]);
    assert_eq!(pots[1].amount(), chips(90)); // 70 игрока 0 и 20 мёртвых
    assert_eq!(pots[1].eligible(), &[0]);
}

#[test]
fn uncalled_raise_excess_goes_to_sole_eligible_pot() {
    // Хедз-ап: олл-ин на 500 остался без колла сверх 50 – излишек
    // лежит в банке, на который претендует только сам ставивший.
    let mut seats = seats_with(&[500, 1000]);
    bet(&mut seats, 0, 500);
    bet(&mut seats, 1, 50);

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1]));

    let pots = pots.pots();
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].amount(), chips(100));
    assert_eq!(pots[0].eligible(), &[0, 1]);
    assert_eq!(pots[1].amount(), chips(450));
    assert_eq!(pots[1].eligible(), &[0], "не уравненный излишек вернётся ставившему");
}

#[test]
fn collection_across_streets_merges_same_layer() {
    let mut seats = seats_with(&[1000, 1000, 1000]);
    let mask = in_hand(&[0, 1, 2]);
    let mut pots = PotManager::new();

    for s in 0..3 {
        bet(&mut seats, s, 50);
    }
    pots.collect_bets(&mut seats, &mask);
    assert_eq!(pots.pots().len(), 1);
    assert_eq!(pots.pots()[0].amount(), chips(150));

    for s in 0..3 {
        bet(&mut seats, s, 200);
    }
    pots.collect_bets(&mut seats, &mask);
    assert_eq!(pots.pots().len(), 1, "без олл-инов банк один и растёт");
    assert_eq!(pots.pots()[0].amount(), chips(750));
}

#[test]
fn later_street_bets_never_merge_into_capped_pot() {
    let mut seats = seats_with(&[1000, 80, 1000]);
    let mask = in_hand(&[0, 1, 2]);
    let mut pots = PotManager::new();

    // Префлоп: короткий олл-ин и два колла по 80.
    bet(&mut seats, 0, 80);
    bet(&mut seats, 1, 80); // олл-ин
    bet(&mut seats, 2, 80);
    pots.collect_bets(&mut seats, &mask);
    assert_eq!(pots.pots().len(), 1);
    assert_eq!(pots.pots()[0].amount(), chips(240));

    // Флоп: торгуются только большие стеки.
    bet(&mut seats, 0, 300);
    bet(&mut seats, 2, 300);
    pots.collect_bets(&mut seats, &mask);

    let pots = pots.pots();
    assert_eq!(pots.len(), 2, "новые ставки идут поверх ограниченного банка");
    assert_eq!(pots[0].amount(), chips(240));
    assert_eq!(pots[0].eligible(), &[0, 1, 2]);
    assert_eq!(pots[1].amount(), chips(600));
    assert_eq!(pots[1].eligible(), &[0, 2]);
}

#[test]
fn chips_are_conserved_by_collection() {
    let mut seats = seats_with(&[300, 150, 700, 90]);
    let initial = chips(300 + 150 + 700 + 90);

    bet(&mut seats, 0, 300);
    bet(&mut seats, 1, 150);
    bet(&mut seats, 2, 300);
    bet(&mut seats, 3, 90);

    let mut pots = PotManager::new();
    pots.collect_bets(&mut seats, &in_hand(&[0, 1, 2]));

    assert_eq!(
        total_chips_everywhere(&seats, &pots),
        initial,
        "фишки не создаются и не исчезают при сборе банков"
    );
    assert_eq!(pots.total(), chips(300 + 150 + 300 + 90));
}
