use serde::{Deserialize, Serialize};

/// Стадия раздачи.
///
/// Preflop..River – улицы со своими раундами ставок, Showdown – ставки
/// закончены и банки ждут вскрытия, Complete – раздача закрыта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandStage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl HandStage {
    /// Идёт ли на этой стадии торговля.
    pub fn is_betting(&self) -> bool {
        matches!(
            self,
            HandStage::Preflop | HandStage::Flop | HandStage::Turn | HandStage::River
        )
    }
}

/// Ранг руки: упакованное сравнимое значение, старше = сильнее.
/// Схему кодирования заполняет eval.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(pub u32);
