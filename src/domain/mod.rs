//! Доменная модель стола: карты, фишки, игроки, форсированные ставки.

pub mod card;
pub mod chips;
pub mod deck;
pub mod forced_bets;
pub mod hand;
pub mod player;

/// Индекс места за столом (0..MAX_SEATS-1). Стабильный идентификатор игрока
/// на всё время, пока он сидит за столом.
pub type SeatIndex = usize;

/// Количество мест за столом (полный стол холдема).
pub const MAX_SEATS: usize = 9;

/// Места за столом: индекс массива = SeatIndex, None – место пустое.
pub type Seats = [Option<player::Player>; MAX_SEATS];

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use forced_bets::*;
pub use hand::*;
pub use player::*;
