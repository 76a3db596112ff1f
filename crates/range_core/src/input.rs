//! Input state tracking
//!
//! Holds which movement keys are currently down and the mouse motion
//! accumulated since the last frame. Event handlers write into this state as
//! events arrive; the session reads it exactly once per frame.

/// Key codes the game binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key (move forward)
    W,
    /// A key (strafe left)
    A,
    /// S key (move backward)
    S,
    /// D key (strafe right)
    D,
    /// Space key
    Space,
    /// Escape key
    Escape,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Held-key and mouse-delta state, read once per frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Forward movement key held
    pub forward: bool,
    /// Backward movement key held
    pub backward: bool,
    /// Left strafe key held
    pub left: bool,
    /// Right strafe key held
    pub right: bool,

    pending_dx: f64,
    pending_dy: f64,
}

impl InputState {
    /// Create a new input state with nothing held
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition
    ///
    /// Callers gate key presses on game phase; releases must always be
    /// applied so a key held across a phase change never sticks.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::Space | KeyCode::Escape => {}
        }
    }

    /// Accumulate relative mouse motion since the last frame
    pub fn accumulate_mouse(&mut self, dx: f64, dy: f64) {
        self.pending_dx += dx;
        self.pending_dy += dy;
    }

    /// Take and reset the accumulated mouse delta
    pub fn take_mouse_delta(&mut self) -> (f64, f64) {
        let delta = (self.pending_dx, self.pending_dy);
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        delta
    }

    /// Whether any movement key is currently held
    #[must_use]
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_transitions() {
        let mut input = InputState::new();
        input.set_key(KeyCode::W, true);
        input.set_key(KeyCode::A, true);
        assert!(input.forward);
        assert!(input.left);
        assert!(input.any_movement());

        input.set_key(KeyCode::W, false);
        assert!(!input.forward);
        assert!(input.left);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut input = InputState::new();
        input.set_key(KeyCode::Space, true);
        input.set_key(KeyCode::Escape, true);
        assert!(!input.any_movement());
    }

    #[test]
    fn test_mouse_delta_accumulates_and_drains() {
        let mut input = InputState::new();
        input.accumulate_mouse(3.0, -2.0);
        input.accumulate_mouse(1.0, 1.0);

        assert_eq!(input.take_mouse_delta(), (4.0, -1.0));
        // Drained: next frame sees nothing
        assert_eq!(input.take_mouse_delta(), (0.0, 0.0));
    }
}
