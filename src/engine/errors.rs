use thiserror::Error;

use crate::domain::{Chips, SeatIndex};

/// Ошибки движка стола.
///
/// Все изменяющие операции проверяют предусловия и возвращают ошибку,
/// не трогая состояние. Восстанавливаться не от чего: вызывающий код
/// должен смотреть наблюдатели (legal_actions и т.п.) перед действием.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Место {0} уже занято")]
    SeatTaken(SeatIndex),

    #[error("В этом месте нет игрока")]
    EmptySeat,

    #[error("Бай-ин должен быть больше нуля")]
    InvalidBuyIn,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoHandInProgress,

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Раунд ставок не идёт")]
    NoBettingRound,

    #[error("Раунд ставок ещё не завершён")]
    BettingRoundInProgress,

    #[error("Шоудаун сейчас невозможен")]
    ShowdownNotReady,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Bet невозможен: в раунде уже есть ставка, используйте raise")]
    CannotBet,

    #[error("Raise невозможен в текущем состоянии раунда")]
    CannotRaise,

    #[error("Размер ставки {amount} вне допустимого окна [{min}; {max}]")]
    RaiseOutOfRange {
        amount: Chips,
        min: Chips,
        max: Chips,
    },

    #[error("Это автоматическое действие сейчас недоступно")]
    IllegalAutomaticAction,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
