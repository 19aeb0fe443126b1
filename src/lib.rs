//! Движок стола безлимитного техасского холдема.
//!
//! Чистая библиотека-автомат: принимает действия игроков и ведёт
//! многоместную раздачу от форсированных ставок через улицы торговли до
//! шоудауна и раздачи банков. Ни ввода-вывода, ни потоков, ни сети –
//! только состояние стола и правила.
//!
//! Слои:
//!   - [`domain`] – карты, фишки, игроки, форсированные ставки;
//!   - [`engine`] – очередность ходов, раунды ставок, банки, дилер, стол;
//!   - [`eval`] – оценка силы рук (лучшие 5 из 7);
//!   - [`infra`] – реализации RNG и доменный seed.
//!
//! Случайность приходит только через [`engine::RandomSource`],
//! переданный в `start_hand`: одинаковый seed даёт одинаковую раздачу.
//!
//! Пример:
//! ```
//! use holdem_engine::domain::{Blinds, Chips, ForcedBets};
//! use holdem_engine::engine::{Action, Table};
//! use holdem_engine::infra::DeterministicRng;
//!
//! let mut table = Table::new(ForcedBets::new(Blinds::new(Chips::new(25), Chips::new(50))));
//! table.sit_down(0, Chips::new(1000)).unwrap();
//! table.sit_down(1, Chips::new(1000)).unwrap();
//!
//! let mut rng = DeterministicRng::from_u64(7);
//! table.start_hand(&mut rng).unwrap();
//! table.action_taken(Action::Call).unwrap();
//! ```

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
