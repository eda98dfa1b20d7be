//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Insertion-ordered collections for stable iteration
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circle_intersects_circle, circle_intersects_rect};
pub use state::{
    Food, FoodKind, GameEvent, GamePhase, GameState, Pet, Pipe, Raindrop, FOOD_KINDS,
};
pub use tick::{roll_food_kind, roll_gap_top, tick, TickInput};
