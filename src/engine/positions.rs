use crate::domain::{SeatIndex, MAX_SEATS};

/// Найти следующий установленный бит маски мест по кругу
/// (включая/исключая start).
pub fn next_set_seat(
    mask: &[bool; MAX_SEATS],
    start: SeatIndex,
    include_start: bool,
) -> Option<SeatIndex> {
    let mut idx = start % MAX_SEATS;

    if !include_start {
        idx = (idx + 1) % MAX_SEATS;
    }

    for _ in 0..MAX_SEATS {
        if mask[idx] {
            return Some(idx);
        }
        idx = (idx + 1) % MAX_SEATS;
    }

    None
}

/// Собрать все установленные места по кругу, начиная с start (включительно).
pub fn collect_set_seats_from(mask: &[bool; MAX_SEATS], start: SeatIndex) -> Vec<SeatIndex> {
    let mut seats = Vec::new();
    let mut idx = start % MAX_SEATS;

    for _ in 0..MAX_SEATS {
        if mask[idx] {
            seats.push(idx);
        }
        idx = (idx + 1) % MAX_SEATS;
    }

    seats
}

/// Расстояние от start до seat по часовой стрелке (0..MAX_SEATS-1).
/// Нужно для раздачи нечётных фишек "ближайшему слева от кнопки".
pub fn clockwise_distance(start: SeatIndex, seat: SeatIndex) -> usize {
    (seat + MAX_SEATS - (start % MAX_SEATS)) % MAX_SEATS
}
