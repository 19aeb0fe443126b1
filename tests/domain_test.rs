//! Тесты доменных типов: карты, фишки, игрок, колода.

use std::collections::HashSet;
use std::str::FromStr;

use holdem_engine::domain::{Card, Chips, Deck, Player, Rank, Suit};

#[test]
fn card_parsing_and_display_roundtrip() {
    for s in ["Ah", "Td", "7c", "2s", "Kd", "Qh", "Jc", "9s"] {
        let card = Card::from_str(s).expect("корректная строка карты");
        assert_eq!(card.to_string(), s, "Display должен совпадать с исходной строкой");
    }

    assert!(Card::from_str("Xx").is_err());
    assert!(Card::from_str("A").is_err());
    assert!(Card::from_str("Ahh").is_err());
}

#[test]
fn cards_are_ordered_by_rank_first() {
    let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);
    let king_spades = Card::new(Rank::King, Suit::Spades);
    let ace_hearts = Card::new(Rank::Ace, Suit::Hearts);

    assert!(ace_clubs > king_spades, "ранг важнее масти");
    assert!(king_spades < ace_clubs);
    assert_ne!(ace_clubs, ace_hearts);
    assert!(Rank::Two < Rank::Ace);
}

#[test]
fn chips_arithmetic_is_saturating() {
    let a = Chips::new(100);
    let b = Chips::new(250);

    assert_eq!(a - b, Chips::ZERO, "вычитание не уходит в минус");
    assert_eq!(b - a, Chips::new(150));
    assert_eq!(a + b, Chips::new(350));
    assert_eq!(a.min(b), a);
    assert!(Chips::ZERO.is_zero());

    let total: Chips = [a, b, Chips::new(50)].into_iter().sum();
    assert_eq!(total, Chips::new(400));
}

#[test]
fn player_bet_is_absolute_not_additive() {
    let mut p = Player::new(Chips::new(1000));
    assert_eq!(p.total_chips(), Chips::new(1000));

    p.bet(Chips::new(50));
    assert_eq!(p.bet_size(), Chips::new(50));
    assert_eq!(p.stack(), Chips::new(950));

    // Повторный bet задаёт общий размер ставки, а не добавку.
    p.bet(Chips::new(200));
    assert_eq!(p.bet_size(), Chips::new(200));
    assert_eq!(p.stack(), Chips::new(800));
    assert_eq!(p.total_chips(), Chips::new(1000), "фишки не создаются и не исчезают");
}

#[test]
fn player_all_in_when_stack_empty() {
    let mut p = Player::new(Chips::new(80));
    assert!(!p.is_all_in());

    p.bet(Chips::new(80));
    assert!(p.is_all_in());
    assert_eq!(p.bet_size(), Chips::new(80));
    assert_eq!(p.stack(), Chips::ZERO);
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<String> = deck.cards.iter().map(|c| c.to_string()).collect();
    assert_eq!(unique.len(), 52, "все карты различны");
}

#[test]
fn deck_draw_and_burn_shrink_it() {
    let mut deck = Deck::standard_52();

    let first = deck.draw_one();
    assert!(first.is_some());
    assert_eq!(deck.len(), 51);

    deck.burn_one();
    assert_eq!(deck.len(), 50);

    let mut empty = Deck { cards: Vec::new() };
    assert!(empty.draw_one().is_none());
    assert!(empty.is_empty());
}
