//! Score, health, and run-phase bookkeeping

/// Lifecycle phase of a run
///
/// Transitions are one-directional: `Idle` becomes `Active` when pointer
/// lock is acquired, and `Active` becomes `Ended` when health reaches zero
/// or pointer lock is released. `Ended` is terminal; a new run means a new
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the run starts
    Idle,
    /// Run in progress
    Active,
    /// Run over
    Ended,
}

/// Score, health, and elapsed-time state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Points scored so far; never decreases while the run is active
    pub score: u32,

    /// Current health, always within `0..=max_health`
    pub health: u32,

    /// Seconds of active play; does not accrue while idle or ended
    pub elapsed: f32,

    /// Current lifecycle phase
    pub phase: Phase,

    max_health: u32,
}

impl GameState {
    /// Create a fresh idle state at full health
    #[must_use]
    pub fn new(max_health: u32) -> Self {
        Self {
            score: 0,
            health: max_health,
            elapsed: 0.0,
            phase: Phase::Idle,
            max_health,
        }
    }

    /// Award points
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Apply damage, saturating at zero
    ///
    /// Returns `true` when this call brought health to zero.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    /// Maximum health this run started with
    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Whether the run is currently active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}
