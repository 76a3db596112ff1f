//! # Range Core
//!
//! Game-logic core for a first-person target-range shooter.
//!
//! The crate is deliberately headless: rendering, audio playback, pointer
//! capture, and HUD presentation are external collaborators. They feed
//! [`SessionEvent`]s into a [`Session`], drive it once per display frame with
//! [`Session::update`], and consume the [`GameEvent`]s it emits to update
//! score/health readouts and play sound cues.
//!
//! ## Quick Start
//!
//! ```rust
//! use range_core::prelude::*;
//!
//! let config = GameConfig::default();
//! let mut session = Session::with_seed(config, 42);
//!
//! // Pointer lock acquired: the run starts.
//! session.handle_event(SessionEvent::PointerLockChanged { locked: true });
//!
//! // One display frame at 60 Hz.
//! session.handle_event(SessionEvent::Key { key: KeyCode::W, pressed: true });
//! session.update(1.0 / 60.0);
//!
//! for event in session.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod camera;
pub mod collision;
pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod session;
pub mod state;
pub mod target;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        camera::FpsCamera,
        collision::{Aabb, Ray, RayHit},
        config::{CameraConfig, Config, ConfigError, GameConfig, PlayerConfig, TargetConfig},
        events::{GameEvent, SessionEvent},
        foundation::{
            math::{Point3, Vec3},
            time::Timer,
        },
        input::{InputState, KeyCode, MouseButton},
        session::Session,
        state::{GameState, Phase},
        target::{Target, TargetPool},
    };
}
