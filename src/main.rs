//! Flappy Pets headless demo driver
//!
//! Runs the full core without a renderer: loads the profile from a JSON
//! save file, starts a session and lets a tiny autopilot play a few runs,
//! logging scores and shop state. Useful for smoke-testing the simulation
//! and the persistence gateway end to end.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use flappy_pets::consts::*;
use flappy_pets::persistence::FileStore;
use flappy_pets::sim::{GameEvent, GamePhase, Pipe};
use flappy_pets::ui::PLAY_AGAIN_BUTTON;
use flappy_pets::Session;

const SAVE_PATH: &str = "flappy_pets_save.json";
const DEMO_RUNS: u32 = 3;
const MAX_DEMO_TICKS: u64 = 200_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("seed {seed}");

    let store = FileStore::open(SAVE_PATH);
    let mut session = Session::new(seed, store);

    let mut runs = 0;
    let mut ticks = 0u64;
    // A bot that only flaps toward gap centers can survive a long time
    while runs < DEMO_RUNS && ticks < MAX_DEMO_TICKS {
        ticks += 1;
        match session.state().phase {
            GamePhase::Menu => {
                // Tap anywhere off the shop button to start
                session.handle_tap(Vec2::new(PLAYFIELD_W / 2.0, PLAYFIELD_H / 2.0));
            }
            GamePhase::Playing => {
                if should_flap(&session) {
                    session.handle_tap(Vec2::new(PLAYFIELD_W / 2.0, PLAYFIELD_H / 2.0));
                }
            }
            GamePhase::GameOver => {
                runs += 1;
                log::info!(
                    "run {runs}: score {}, high score {}, food {}",
                    session.state().score,
                    session.profile().high_score,
                    session.profile().currency
                );
                if runs < DEMO_RUNS {
                    session.handle_tap(
                        PLAY_AGAIN_BUTTON.pos + PLAY_AGAIN_BUTTON.size / 2.0,
                    );
                }
            }
            GamePhase::Shop => {
                // The autopilot never shops; nothing to do here
                break;
            }
        }

        for event in session.advance() {
            if let GameEvent::FoodCollected(kind) = event {
                log::debug!("collected {kind:?}");
            }
        }
    }

    log::info!(
        "demo done: high score {}, food {}, skin {:?}",
        session.profile().high_score,
        session.profile().currency,
        session.profile().selected_skin()
    );
}

/// Flap whenever the pet has sunk below the center of the next gap
fn should_flap(session: &Session<FileStore>) -> bool {
    let state = session.state();
    let pet_y = state.pet.center().y;
    let target = next_pipe(&state.pipes, state.pet.pos.x)
        .map(|pipe| pipe.gap_top + PIPE_GAP / 2.0)
        .unwrap_or(PLAYFIELD_H / 2.0);
    pet_y > target
}

fn next_pipe(pipes: &[Pipe], pet_x: f32) -> Option<&Pipe> {
    pipes.iter().find(|pipe| pipe.right_edge() >= pet_x)
}
