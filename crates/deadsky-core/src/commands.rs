//! Logical player actions sampled from an input source once per tick.

use serde::{Deserialize, Serialize};

/// One held action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Shoot,
}

impl InputAction {
    pub const ALL: [InputAction; 5] = [
        InputAction::MoveUp,
        InputAction::MoveDown,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Shoot,
    ];

    fn bit(self) -> u8 {
        match self {
            InputAction::MoveUp => 0x01,
            InputAction::MoveDown => 0x02,
            InputAction::MoveLeft => 0x04,
            InputAction::MoveRight => 0x08,
            InputAction::Shoot => 0x10,
        }
    }
}

/// The set of actions currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSet {
    bits: u8,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: InputAction) {
        self.bits |= action.bit();
    }

    pub fn remove(&mut self, action: InputAction) {
        self.bits &= !action.bit();
    }

    pub fn contains(&self, action: InputAction) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Held actions in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = InputAction> + '_ {
        InputAction::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl FromIterator<InputAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = InputAction>>(iter: I) -> Self {
        let mut set = ActionSet::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}
