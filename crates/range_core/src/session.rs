//! Game session: the per-frame update and hit-resolution loop
//!
//! A [`Session`] owns the input state, camera, target pool, and run state,
//! and is driven by two calls from the host: [`Session::handle_event`] as
//! input events arrive, and [`Session::update`] once per display frame.
//! Everything the HUD or audio collaborators need to react to comes back out
//! through [`Session::drain_events`].

use crate::camera::FpsCamera;
use crate::config::GameConfig;
use crate::events::{GameEvent, SessionEvent};
use crate::input::{InputState, MouseButton};
use crate::state::{GameState, Phase};
use crate::target::TargetPool;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One run of the target range, from idle through game over
pub struct Session {
    config: GameConfig,
    input: InputState,
    camera: FpsCamera,
    targets: TargetPool,
    state: GameState,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session with an OS-seeded RNG
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create a session with a fixed RNG seed
    ///
    /// Target spawn positions and speeds are fully determined by the seed,
    /// which keeps scripted runs and tests reproducible.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let camera = FpsCamera::new(&config.camera);
        let targets = TargetPool::new(config.targets.clone(), &mut rng);
        let state = GameState::new(config.player.max_health);

        log::info!("Session created with {} targets", targets.len());

        Self {
            config,
            input: InputState::new(),
            camera,
            targets,
            state,
            rng,
            events: Vec::new(),
        }
    }

    /// Feed one host input event into the session
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Key { key, pressed } => {
                // Presses are ignored outside active play, but releases always
                // land so a key held across a phase change never sticks.
                if pressed && !self.state.is_active() {
                    return;
                }
                self.input.set_key(key, pressed);
            }
            SessionEvent::MouseMoved { dx, dy } => {
                if self.state.is_active() {
                    self.input.accumulate_mouse(dx, dy);
                }
            }
            SessionEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left && pressed {
                    self.fire();
                }
            }
            SessionEvent::PointerLockChanged { locked } => {
                self.pointer_lock_changed(locked);
            }
            SessionEvent::WindowResized { width, height } => {
                if height > 0 {
                    self.camera.set_aspect_ratio(width as f32 / height as f32);
                }
            }
        }
    }

    /// Advance the session by one frame
    ///
    /// Drains accumulated mouse motion into the camera, moves the camera from
    /// held keys, advances target oscillation, and applies proximity damage.
    /// Does nothing unless the run is active.
    pub fn update(&mut self, dt: f32) {
        if !self.state.is_active() {
            return;
        }

        self.state.elapsed += dt;

        let (dx, dy) = self.input.take_mouse_delta();
        self.camera
            .apply_mouse_delta(dx, dy, self.config.player.mouse_sensitivity);
        self.camera
            .advance(&self.input, self.config.player.move_speed, dt);

        self.targets.advance(dt);
        self.apply_contact_damage();
    }

    /// Take the events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current run state (score, health, elapsed time, phase)
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player camera
    #[must_use]
    pub fn camera(&self) -> &FpsCamera {
        &self.camera
    }

    /// Mutable access to the player camera
    ///
    /// Hosts use this to snap the view (for scripted runs) or adjust
    /// projection parameters directly.
    pub fn camera_mut(&mut self) -> &mut FpsCamera {
        &mut self.camera
    }

    /// The target pool
    #[must_use]
    pub fn targets(&self) -> &TargetPool {
        &self.targets
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resolve a fire action
    ///
    /// Casts the aim ray against the target pool. The nearest hit target
    /// takes one point of damage: partial score while it survives, full
    /// score plus an in-place respawn when its hit points reach zero. A miss
    /// changes nothing beyond the shot cue.
    fn fire(&mut self) {
        if !self.state.is_active() {
            return;
        }

        self.events.push(GameEvent::ShotFired);

        let ray = self.camera.aim_ray();
        let Some(hit) = self.targets.raycast(&ray) else {
            log::debug!("Shot missed");
            return;
        };

        let remaining = self.targets.damage(hit.index);
        if remaining == 0 {
            let points = self.config.targets.destroy_score;
            self.state.add_score(points);
            self.targets.respawn(hit.index, &mut self.rng);
            self.events.push(GameEvent::TargetDestroyed {
                index: hit.index,
                points,
            });
            log::debug!(
                "Target {} destroyed at {:.1}m, score {}",
                hit.index,
                hit.distance,
                self.state.score
            );
        } else {
            self.state.add_score(self.config.targets.hit_score);
            self.events.push(GameEvent::TargetHit {
                index: hit.index,
                remaining,
            });
            log::debug!("Target {} hit, {} hp left", hit.index, remaining);
        }
    }

    /// Per-frame proximity damage from target contact
    ///
    /// Every target closer than the contact radius drains health this frame,
    /// with no cooldown: sustained contact drains every frame, exactly as the
    /// original demo behaves.
    fn apply_contact_damage(&mut self) {
        let radius = self.config.player.contact_radius;
        let contacts = self
            .targets
            .iter()
            .filter(|t| (t.position - self.camera.position).magnitude() < radius)
            .count() as u32;

        if contacts == 0 {
            return;
        }

        let died = self
            .state
            .apply_damage(contacts * self.config.player.contact_damage);
        self.events.push(GameEvent::PlayerDamaged {
            health: self.state.health,
        });

        if died {
            self.end_run();
        }
    }

    fn pointer_lock_changed(&mut self, locked: bool) {
        match (self.state.phase, locked) {
            (Phase::Idle, true) => {
                self.state.phase = Phase::Active;
                self.events.push(GameEvent::SessionStarted);
                log::info!("Pointer lock acquired, session active");
            }
            (Phase::Active, false) => {
                log::info!("Pointer lock released");
                self.end_run();
            }
            // Ended is terminal; locking while active or unlocking while
            // idle are no-ops.
            _ => {}
        }
    }

    fn end_run(&mut self) {
        self.state.phase = Phase::Ended;
        self.events.push(GameEvent::GameOver {
            score: self.state.score,
        });
        log::info!(
            "Game over: score {}, {:.1}s played",
            self.state.score,
            self.state.elapsed
        );
    }
}
