//! Keyboard input handling

/// Whether a key name (DOM `KeyboardEvent.key` style) is the flap action
pub fn is_flap_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "ArrowUp" | "w" | "W")
}

/// Edge-triggered flap button: one press yields one flap, however long it is held
#[derive(Debug, Clone, Copy, Default)]
pub struct FlapButton {
    held: bool,
}

impl FlapButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true only on the rising edge.
    pub fn key_down(&mut self, key: &str) -> bool {
        if !is_flap_key(key) {
            return false;
        }
        let pressed = !self.held;
        self.held = true;
        pressed
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        if is_flap_key(key) {
            self.held = false;
        }
    }
}
