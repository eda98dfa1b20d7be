//! Fixed timestep simulation tick
//!
//! Advances one 60 Hz step: pet physics, pipe/food spawning and movement,
//! scoring, collision evaluation and the ambient rain layer. Pure over
//! `GameState`; everything the outside world must react to comes back as
//! `GameEvent`s.

use glam::Vec2;
use rand::Rng;

use super::collision::{circle_intersects_circle, circle_intersects_rect};
use super::state::{Food, FoodKind, GameEvent, GamePhase, GameState, Pet, Pipe, FOOD_KINDS};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Apply the flap impulse this tick (tap while Playing)
    pub flap: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Gameplay only runs in the Playing phase; the rain layer advances in
/// every phase. Returned events are in the order they occurred.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if state.phase == GamePhase::Playing {
        advance_playing(state, input, &mut events);
    }

    advance_rain(state);
    events
}

fn advance_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    // Physics: a flap replaces the velocity outright; gravity is not
    // reapplied on the same tick.
    if input.flap {
        state.pet.vy = FLAP_IMPULSE;
    } else {
        state.pet.vy += GRAVITY;
    }
    state.pet.pos.y += state.pet.vy;

    // Ceiling: clamp position only, velocity untouched
    if state.pet.pos.y < 0.0 {
        state.pet.pos.y = 0.0;
    }

    // Ground contact is terminal
    if state.pet.pos.y > Pet::floor_y() {
        state.pet.pos.y = Pet::floor_y();
        game_over(state, events);
        return;
    }

    spawn_pipes(state);
    advance_pipes(state, events);
    advance_food(state);

    if check_pipe_collisions(state) {
        game_over(state, events);
        return;
    }
    collect_food(state, events);

    state.energy = (state.energy - ENERGY_DECAY).max(0.0);
}

/// Mark the run terminal. High-score bookkeeping and the persistence flush
/// belong to the session driver, keyed off the GameOver event.
fn game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::GameOver { score: state.score });
    log::info!("run ended at score {}", state.score);
}

fn spawn_pipes(state: &mut GameState) {
    state.ticks_since_spawn += 1;
    if state.ticks_since_spawn <= PIPE_SPAWN_TICKS {
        return;
    }
    state.ticks_since_spawn = 0;

    let gap_top = roll_gap_top(&mut state.rng);
    let has_food = state.rng.random_bool(FOOD_CHANCE);
    state.pipes.push(Pipe {
        x: PLAYFIELD_W,
        gap_top,
        passed: false,
        has_food,
    });

    if has_food {
        let gap_center = gap_top + PIPE_GAP / 2.0;
        let kind = roll_food_kind(&mut state.rng);
        state.foods.push(Food {
            pos: Vec2::new(PLAYFIELD_W + PIPE_WIDTH / 2.0, gap_center - FOOD_RADIUS),
            kind,
        });
    }
}

/// Uniform gap-top height keeping the whole gap between the top margin and
/// the ground line
pub fn roll_gap_top(rng: &mut impl Rng) -> f32 {
    let max_top = PLAYFIELD_H - PIPE_GAP - PIPE_MIN_TOP - GROUND_H;
    rng.random_range(PIPE_MIN_TOP..max_top)
}

/// Uniform choice over the food catalog
pub fn roll_food_kind(rng: &mut impl Rng) -> FoodKind {
    FOOD_KINDS[rng.random_range(0..FOOD_KINDS.len())]
}

fn advance_pipes(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED;

        // Score exactly once, the first tick the right edge clears the pet
        if !pipe.passed && pipe.right_edge() < state.pet.pos.x {
            pipe.passed = true;
            state.score += 1;
            events.push(GameEvent::PipePassed);
        }
    }
    state.pipes.retain(|p| p.x > -PIPE_WIDTH);
}

fn advance_food(state: &mut GameState) {
    for food in &mut state.foods {
        food.pos.x -= PIPE_SPEED;
    }
    state.foods.retain(|f| f.pos.x > FOOD_CULL_X);
}

fn check_pipe_collisions(state: &GameState) -> bool {
    let center = state.pet.center();
    let radius = state.pet.hitbox_radius;
    state.pipes.iter().any(|pipe| {
        let (upper_pos, upper_size) = pipe.upper_rect();
        let (lower_pos, lower_size) = pipe.lower_rect();
        circle_intersects_rect(center, radius, upper_pos, upper_size)
            || circle_intersects_rect(center, radius, lower_pos, lower_size)
    })
}

fn collect_food(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let center = state.pet.center();
    let reach = state.pet.hitbox_radius + FOOD_GRAB_MARGIN;
    state.foods.retain(|food| {
        if circle_intersects_circle(center, reach, food.center(), FOOD_RADIUS) {
            events.push(GameEvent::FoodCollected(food.kind));
            false
        } else {
            true
        }
    });
}

fn advance_rain(state: &mut GameState) {
    for drop in &mut state.raindrops {
        drop.pos.y += drop.speed;
        if drop.pos.y > PLAYFIELD_H {
            drop.pos.y = -drop.length;
            drop.pos.x = state.rng.random_range(0.0..PLAYFIELD_W);
        }
    }
}
