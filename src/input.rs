//! Keyboard mapping from browser key names to game actions

/// A game action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` or `KeyboardEvent.code` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" | "KeyW" => Some(KeyAction::Forward),
            "s" | "S" | "ArrowDown" | "KeyS" => Some(KeyAction::Backward),
            "a" | "A" | "ArrowLeft" | "KeyA" => Some(KeyAction::Left),
            "d" | "D" | "ArrowRight" | "KeyD" => Some(KeyAction::Right),
            " " | "Space" | "Spacebar" => Some(KeyAction::Jump),
            _ => None,
        }
    }
}
