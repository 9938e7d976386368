use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Keys currently held in the demo window.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one event; fresh presses are also recorded into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, state: KeyState::Pressed } => {
                if self.keys_down.insert(key) {
                    frame.record_press(key);
                }
            }
            InputEvent::Key { key, state: KeyState::Released } => {
                self.keys_down.remove(&key);
            }
            // Releases are not delivered while unfocused; drop held keys so the
            // camera does not keep flying.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) => {}
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if any of `keys` is held.
    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.keys_down.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released }
    }

    #[test]
    fn press_and_release_track_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        assert!(state.key_down(Key::W));
        assert!(frame.key_pressed(Key::W));

        frame.clear();
        state.apply_event(&mut frame, release(Key::W));
        assert!(!state.key_down(Key::W));
        assert!(!frame.key_pressed(Key::W));
    }

    #[test]
    fn held_key_is_pressed_only_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::A));
        frame.clear();
        state.apply_event(&mut frame, press(Key::A));
        assert!(state.key_down(Key::A));
        assert!(!frame.key_pressed(Key::A));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::S));
        state.apply_event(&mut frame, press(Key::Space));
        state.apply_event(&mut frame, InputEvent::Focused(true));
        assert!(state.any_down(&[Key::S]));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.any_down(&[Key::S, Key::Space]));
    }
}
