//! Движок стола: очерёдность ходов, раунды ставок, банки, дилер раздачи
//! и автоматические действия.
//!
//! Высокоуровневый объект: [`Table`].
//! Основные операции:
//!   - `sit_down` / `stand_up` – рассадка;
//!   - `start_hand` – запустить раздачу;
//!   - `action_taken` – действие текущего ходящего;
//!   - `end_betting_round` / `showdown` – продвижение раздачи.

pub mod actions;
pub mod auto_actions;
pub mod betting_round;
pub mod dealer;
pub mod errors;
pub mod positions;
pub mod pots;
pub mod round;
pub mod table;

pub use actions::Action;
pub use auto_actions::{AutomaticAction, AutomaticActionFlags};
pub use betting_round::{ActionRange, BettingRound, ChipRange, RoundAction};
pub use dealer::Dealer;
pub use errors::EngineError;
pub use pots::{Pot, PotManager};
pub use round::{ActionFlags, Round};
pub use table::Table;

/// RNG-интерфейс движка: оракул случайной перестановки.
/// Реализации живут в infra (`SystemRng`, `DeterministicRng`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
