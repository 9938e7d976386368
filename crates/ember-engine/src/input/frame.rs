use std::collections::HashSet;

use super::types::Key;

/// Keys that went down since the last presented frame.
///
/// `InputState` answers "is it held"; `InputFrame` answers "was it just pressed",
/// which is what one-shot actions like quitting need.
#[derive(Debug, Default)]
pub struct InputFrame {
    keys_pressed: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub(super) fn record_press(&mut self, key: Key) {
        self.keys_pressed.insert(key);
    }
}
