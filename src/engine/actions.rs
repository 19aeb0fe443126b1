use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока в раунде ставок.
///
/// `Check` и `Call` – это "уравнять" (0 или до текущей ставки),
/// `Bet` и `Raise` несут общий размер ставки раунда и подчиняются
/// правилам рейза (минимальный шаг, окно размеров).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Bet на улице, где текущей ставки ещё нет.
    Bet(Chips),
    /// Raise до указанного общего размера ставки.
    Raise(Chips),
}
