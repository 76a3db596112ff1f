//! Headless target-range demo
//!
//! Runs a short scripted session against the game core: acquires pointer
//! lock, walks and sweeps the view, and fires at the nearest target once per
//! second. Stands in for the browser host — everything it does through
//! [`SessionEvent`]s is exactly what a rendering front end would do.
//!
//! Run with `RUST_LOG=debug` to watch individual shots resolve.

use range_core::prelude::*;

const RUN_SECONDS: f32 = 5.0;
const FRAME_TIME: std::time::Duration = std::time::Duration::from_millis(16);

fn main() {
    env_logger::init();

    let config = GameConfig::load_or_default("range.toml");
    let mut session = Session::with_seed(config, 0xCAFE);

    // The host acquires pointer lock; the run starts.
    session.handle_event(SessionEvent::PointerLockChanged { locked: true });
    session.handle_event(SessionEvent::WindowResized {
        width: 1280,
        height: 720,
    });
    session.handle_event(SessionEvent::Key {
        key: KeyCode::W,
        pressed: true,
    });

    let mut timer = Timer::new();
    let mut next_shot_at = 0.0_f32;

    while session.state().is_active() && session.state().elapsed < RUN_SECONDS {
        std::thread::sleep(FRAME_TIME);
        timer.update();

        // Gentle look-around, as mouse motion would arrive from the host
        session.handle_event(SessionEvent::MouseMoved { dx: 4.0, dy: 1.0 });

        if session.state().elapsed >= next_shot_at {
            aim_at_nearest_target(&mut session);
            session.handle_event(SessionEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            });
            next_shot_at = session.state().elapsed + 1.0;
        }

        session.update(timer.delta_time());

        for event in session.drain_events() {
            report(&session, event);
        }
    }

    let state = session.state();
    log::info!(
        "Run finished: score {}, health {}, {:.1}s played, {:.0} fps average",
        state.score,
        state.health,
        state.elapsed,
        timer.average_fps()
    );
}

/// Snap the camera toward whichever target is currently closest.
fn aim_at_nearest_target(session: &mut Session) {
    let camera_position = session.camera().position;
    let nearest = session
        .targets()
        .iter()
        .map(|t| t.position - camera_position)
        .min_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));

    if let Some(direction) = nearest {
        session.camera_mut().look_toward(direction);
    }
}

/// Log game events the way a HUD would present them.
fn report(session: &Session, event: GameEvent) {
    match event {
        GameEvent::SessionStarted => log::info!("Session started"),
        GameEvent::ShotFired => log::debug!("Shot fired"),
        GameEvent::TargetHit { index, remaining } => {
            log::info!("Hit target {index}, {remaining} hp left");
        }
        GameEvent::TargetDestroyed { index, points } => {
            log::info!(
                "Destroyed target {index} (+{points}), score {}",
                session.state().score
            );
        }
        GameEvent::PlayerDamaged { health } => log::info!("Player damaged, health {health}"),
        GameEvent::GameOver { score } => log::info!("Game over, final score {score}"),
    }
}
