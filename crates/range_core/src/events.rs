//! Session input events and emitted game events
//!
//! [`SessionEvent`] is the inbound surface: the host translates browser or
//! window events (key, mouse, pointer lock, resize) into these. [`GameEvent`]
//! is the outbound surface: the HUD updates its score/health/timer readouts
//! and the audio collaborator plays shoot/hit cues from them.

use crate::input::{KeyCode, MouseButton};

/// Input events fed into the session by the host
#[derive(Debug, Clone, Copy)]
pub enum SessionEvent {
    /// A key was pressed or released
    Key {
        /// The key that changed
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Relative mouse motion while pointer lock is held
    MouseMoved {
        /// Horizontal motion in pixels
        dx: f64,
        /// Vertical motion in pixels
        dy: f64,
    },

    /// A mouse button was pressed or released; left press fires
    MouseButton {
        /// The button that changed
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
    },

    /// Pointer lock was acquired or released
    PointerLockChanged {
        /// Whether the pointer is now captured
        locked: bool,
    },

    /// The window or viewport was resized
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// Events emitted by the session for the HUD and audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The run started (pointer lock acquired from idle)
    SessionStarted,

    /// A shot was fired, hit or miss; cue for the shoot sound
    ShotFired,

    /// A target took a hit but survived; partial score was awarded
    TargetHit {
        /// Index of the hit target
        index: usize,
        /// Hit points the target has left
        remaining: u32,
    },

    /// A target was destroyed and respawned; full score was awarded
    TargetDestroyed {
        /// Index of the destroyed target (now holding its replacement)
        index: usize,
        /// Points awarded for the kill
        points: u32,
    },

    /// The player lost health to target contact this frame
    PlayerDamaged {
        /// Health remaining after the damage
        health: u32,
    },

    /// The run ended
    GameOver {
        /// Final score
        score: u32,
    },
}
