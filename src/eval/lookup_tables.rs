use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска колеса (A2345): туз играет как младшая карта.
pub const WHEEL_MASK: RankMask = mask_from_ranks(&[
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
]);

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8) - 2; // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        mask |= 1 << (r - 2);
        i += 1;
    }
    mask
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Проверяем окна из 5 подряд идущих битов от бродвея (TJQKA) вниз;
/// особый случай: wheel (A2345) → возвращаем Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // Окно 23456 занимает биты 0..=4; всего 9 сдвигов до TJQKA.
    const FIVE_IN_A_ROW: RankMask = 0b1_1111;

    for shift in (0..=8u8).rev() {
        let window = FIVE_IN_A_ROW << shift;
        if rank_mask & window == window {
            // Старшая карта окна: нижний бит окна = shift → ранг shift+2,
            // старший = shift+6.
            return Some(num_to_rank(shift + 6));
        }
    }

    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }

    None
}

/// Обратное преобразование числа 2..14 в Rank.
pub fn num_to_rank(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        14 => Rank::Ace,
        _ => Rank::Two, // fallback, при корректной работе сюда не попадём
    }
}
