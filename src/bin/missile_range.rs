//! Missile Range
//!
//! Headless firing-range run: aim, fire a guided missile, steer it with
//! scripted mouse input, boost mid-flight, and let the second shot run
//! out its lifespan. Useful for watching the possession hand-off and
//! detonation logs without a window.
//!
//! Pass a tuning JSON file as the first argument to override defaults:
//!
//! ```text
//! missile_range tuning.json
//! ```
//!
//! `RUST_LOG` filters the output; `LOG_FORMAT=json` switches to JSON.

use tracing::info;

use tv_missile_engine::game::{GameSession, Tuning};
use tv_missile_engine::input::KeyCode;
use tv_missile_engine::world::WorldConfig;

const TICK_RATE: f32 = 60.0;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn load_config() -> WorldConfig {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => match Tuning::from_json_str(&text) {
                Ok(tuning) => {
                    info!(%path, "tuning loaded");
                    tuning.to_world_config()
                }
                Err(error) => {
                    tracing::error!(%path, %error, "bad tuning file; using defaults");
                    WorldConfig::default()
                }
            },
            Err(error) => {
                tracing::error!(%path, %error, "cannot read tuning file; using defaults");
                WorldConfig::default()
            }
        },
        None => WorldConfig::default(),
    }
}

/// Run `seconds` of simulation, pressing nothing.
fn coast(session: &mut GameSession, seconds: f32) {
    let steps = (seconds * TICK_RATE) as u32;
    for _ in 0..steps {
        session.step(1.0 / TICK_RATE);
    }
}

fn tap(session: &mut GameSession, key: KeyCode) {
    session.key_event(key, true);
    session.key_event(key, false);
}

fn main() {
    init_tracing();

    let config = load_config();
    let mut session = GameSession::new(config);

    info!(
        speed = config.missile.flight.initial_speed,
        lifespan = config.missile.lifespan,
        "firing range ready"
    );

    // Walk forward a moment and aim slightly upward
    session.key_event(KeyCode::W, true);
    coast(&mut session, 0.5);
    session.key_event(KeyCode::W, false);
    session.mouse_delta(0.0, -150.0);
    session.step(1.0 / TICK_RATE);

    // Shot one: steer right in an arc, boost, then trigger it manually
    tap(&mut session, KeyCode::F);
    for i in 0..120 {
        session.mouse_delta(4.0, 0.0);
        if i == 60 {
            tap(&mut session, KeyCode::B);
        }
        session.step(1.0 / TICK_RATE);
    }
    tap(&mut session, KeyCode::E);
    session.step(1.0 / TICK_RATE);

    let world = session.world();
    info!(
        missiles = world.missiles.len(),
        position = ?world.characters.get(world.player()).map(|c| c.position),
        "shot one complete"
    );

    // Shot two: hands off, let the lifespan timer do the work
    tap(&mut session, KeyCode::F);
    coast(&mut session, config.missile.lifespan + 0.5);

    let world = session.world();
    info!(
        missiles = world.missiles.len(),
        possessing_missile = world.controller.controls_missile(),
        "shot two complete; range session over"
    );
}
