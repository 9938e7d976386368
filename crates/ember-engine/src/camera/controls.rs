use crate::input::{InputState, Key};

/// Movement intents for one frame.
///
/// Plain booleans so camera updates can be driven without a window.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MoveControls {
    pub forward: bool,
    pub left: bool,
    pub back: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveControls {
    /// WASD (or arrows) move in the view plane, Space rises, Shift sinks.
    pub fn from_input(input: &InputState) -> Self {
        Self {
            forward: input.any_down(&[Key::W, Key::ArrowUp]),
            left: input.any_down(&[Key::A, Key::ArrowLeft]),
            back: input.any_down(&[Key::S, Key::ArrowDown]),
            right: input.any_down(&[Key::D, Key::ArrowRight]),
            up: input.key_down(Key::Space),
            down: input.key_down(Key::Shift),
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.left || self.back || self.right || self.up || self.down
    }
}
