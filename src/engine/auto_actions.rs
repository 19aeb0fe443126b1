use core::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player};

/// Заготовленное намерение игрока: сыграет автоматически, когда до него
/// дойдёт ход, если к тому моменту ещё будет легально.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AutomaticAction {
    Fold,
    CheckFold,
    Check,
    Call,
    CallAny,
    AllIn,
}

impl AutomaticAction {
    /// Флаг этого намерения в наборе [`AutomaticActionFlags`].
    pub fn flag(&self) -> AutomaticActionFlags {
        match self {
            AutomaticAction::Fold => AutomaticActionFlags::FOLD,
            AutomaticAction::CheckFold => AutomaticActionFlags::CHECK_FOLD,
            AutomaticAction::Check => AutomaticActionFlags::CHECK,
            AutomaticAction::Call => AutomaticActionFlags::CALL,
            AutomaticAction::CallAny => AutomaticActionFlags::CALL_ANY,
            AutomaticAction::AllIn => AutomaticActionFlags::ALL_IN,
        }
    }
}

/// Набор доступных автоматических действий (для UI-подсказок).
/// Хранимое намерение при этом всегда одно – `Option<AutomaticAction>`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutomaticActionFlags(u8);

impl AutomaticActionFlags {
    pub const EMPTY: AutomaticActionFlags = AutomaticActionFlags(0);
    pub const FOLD: AutomaticActionFlags = AutomaticActionFlags(0b00_0001);
    pub const CHECK_FOLD: AutomaticActionFlags = AutomaticActionFlags(0b00_0010);
    pub const CHECK: AutomaticActionFlags = AutomaticActionFlags(0b00_0100);
    pub const CALL: AutomaticActionFlags = AutomaticActionFlags(0b00_1000);
    pub const CALL_ANY: AutomaticActionFlags = AutomaticActionFlags(0b01_0000);
    pub const ALL_IN: AutomaticActionFlags = AutomaticActionFlags(0b10_0000);

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, flags: AutomaticActionFlags) -> bool {
        self.0 & flags.0 == flags.0
    }
}

impl BitOr for AutomaticActionFlags {
    type Output = AutomaticActionFlags;

    fn bitor(self, rhs: AutomaticActionFlags) -> AutomaticActionFlags {
        AutomaticActionFlags(self.0 | rhs.0)
    }
}

/// Какие намерения доступны игроку при текущей ставке раунда.
///
/// Правило простое: уравнявшему текущую ставку нечего "фолдить" и
/// "коллировать" – ему доступны check/check_fold; не уравнявшему –
/// наоборот. call_any и all_in доступны всегда, пока игрок активен.
pub fn legal_automatic_actions(player: &Player, biggest_bet: Chips) -> AutomaticActionFlags {
    let matched = player.bet_size() == biggest_bet;

    let mut flags = AutomaticActionFlags::CALL_ANY | AutomaticActionFlags::ALL_IN;
    if matched {
        flags = flags | AutomaticActionFlags::CHECK_FOLD | AutomaticActionFlags::CHECK;
    } else {
        flags = flags | AutomaticActionFlags::FOLD | AutomaticActionFlags::CALL;
    }
    flags
}
