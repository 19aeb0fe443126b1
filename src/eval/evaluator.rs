use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, num_to_rank, rank_to_bit, RankMask};

/// Главная функция: вычислить лучшую 5-карточную руку из hole + board.
///
/// Ожидается:
///   - `hole.len() == 2`
///   - `board.len()` от 3 до 5 (обычно 5)
///
/// Но в целом функция корректно работает для любых 5–7 карт.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&all_cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт"
    );

    best_of_all_5card_combinations(&all_cards)
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();

    let mut best: Option<HandRank> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5card_hand(&five);
                        if best.map_or(true, |best_r| r > best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    best.expect("должна быть хотя бы одна 5-карточная комбинация")
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    // Подсчёт мастей и рангов.
    let mut suit_counts = [0u8; 4]; // 0:clubs, 1:diamonds, 2:hearts, 3:spades
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = detect_straight(rank_mask);

    if is_flush {
        if let Some(high) = straight_high {
            return HandRank::from_category_and_ranks(
                HandCategory::StraightFlush,
                straight_rank_array(high),
            );
        }
    }

    // Пары/сеты/каре: список (ранг, сколько штук), сначала по количеству
    // (убыв.), затем по рангу (убыв.).
    let mut rc_list: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for r_val in (2usize..=14).rev() {
        if rank_counts[r_val] > 0 {
            rc_list.push((num_to_rank(r_val as u8), rank_counts[r_val]));
        }
    }
    rc_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    // Паттерн количеств: [4,1], [3,2], [3,1,1], [2,2,1], [2,1,1,1], [1,...].
    // Неиспользуемые хвостовые ранги забиваем двойками: они не сравниваются.
    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.1).collect();

    match pattern.as_slice() {
        [4, 1] => {
            let ranks = [rc_list[0].0, rc_list[1].0, Rank::Two, Rank::Two, Rank::Two];
            HandRank::from_category_and_ranks(HandCategory::FourOfAKind, ranks)
        }
        [3, 2] => {
            let ranks = [rc_list[0].0, rc_list[1].0, Rank::Two, Rank::Two, Rank::Two];
            HandRank::from_category_and_ranks(HandCategory::FullHouse, ranks)
        }
        _ if is_flush => {
            let mut flush_ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
            flush_ranks.sort_by(|a, b| b.cmp(a));
            let ranks = [
                flush_ranks[0],
                flush_ranks[1],
                flush_ranks[2],
                flush_ranks[3],
                flush_ranks[4],
            ];
            HandRank::from_category_and_ranks(HandCategory::Flush, ranks)
        }
        _ if straight_high.is_some() => {
            let high = straight_high.unwrap();
            HandRank::from_category_and_ranks(HandCategory::Straight, straight_rank_array(high))
        }
        [3, 1, 1] => {
            let ranks = [
                rc_list[0].0,
                rc_list[1].0,
                rc_list[2].0,
                Rank::Two,
                Rank::Two,
            ];
            HandRank::from_category_and_ranks(HandCategory::ThreeOfAKind, ranks)
        }
        [2, 2, 1] => {
            let ranks = [
                rc_list[0].0,
                rc_list[1].0,
                rc_list[2].0,
                Rank::Two,
                Rank::Two,
            ];
            HandRank::from_category_and_ranks(HandCategory::TwoPair, ranks)
        }
        [2, 1, 1, 1] => {
            let ranks = [
                rc_list[0].0,
                rc_list[1].0,
                rc_list[2].0,
                rc_list[3].0,
                Rank::Two,
            ];
            HandRank::from_category_and_ranks(HandCategory::OnePair, ranks)
        }
        _ => {
            // High card: топ-5 рангов по убыванию.
            let ranks = [
                rc_list[0].0,
                rc_list[1].0,
                rc_list[2].0,
                rc_list[3].0,
                rc_list[4].0,
            ];
            HandRank::from_category_and_ranks(HandCategory::HighCard, ranks)
        }
    }
}

/// Массив рангов [r0..r4] для стрита с заданной старшей картой.
/// Wheel (A2345) кодируем со старшей пятёркой: он младше стрита 2-3-4-5-6.
fn straight_rank_array(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Two];
    }
    let hi = high as u8;
    [
        num_to_rank(hi),
        num_to_rank(hi - 1),
        num_to_rank(hi - 2),
        num_to_rank(hi - 3),
        num_to_rank(hi - 4),
    ]
}
