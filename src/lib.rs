//! Flappy Pets - a tap-to-flap arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `ui`: Declarative hit regions for the menu/game-over/shop screens
//! - `profile`: Skin catalog, food currency and high score
//! - `persistence`: String-keyed storage gateway (in-memory and JSON file)
//! - `session`: Ties state, profile and storage together per tick

pub mod persistence;
pub mod profile;
pub mod session;
pub mod sim;
pub mod ui;

pub use profile::{Profile, SkinId};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original frame-coupled tuning)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_W: f32 = 360.0;
    pub const PLAYFIELD_H: f32 = 640.0;
    pub const GROUND_H: f32 = 50.0;

    /// Pet defaults
    pub const PET_X: f32 = 60.0;
    pub const PET_SIZE: f32 = 40.0;
    pub const PET_HITBOX_RADIUS: f32 = 15.0;

    /// Physics (per-tick units at the 60 Hz step)
    pub const GRAVITY: f32 = 0.4;
    pub const FLAP_IMPULSE: f32 = -7.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 2.0;
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 180.0;
    /// Gap-top may not start closer than this to the top edge
    pub const PIPE_MIN_TOP: f32 = 50.0;
    /// Spawn interval: 1800 ms at the 60 Hz step
    pub const PIPE_SPAWN_TICKS: u32 = 108;

    /// Food defaults
    pub const FOOD_RADIUS: f32 = 15.0;
    /// Extra reach on the pet hitbox when grabbing food
    pub const FOOD_GRAB_MARGIN: f32 = 5.0;
    /// Chance that a freshly spawned pipe carries food in its gap
    pub const FOOD_CHANCE: f64 = 0.5;
    /// Food is culled once this far past the left edge
    pub const FOOD_CULL_X: f32 = -30.0;

    /// Energy meter (display only)
    pub const ENERGY_MAX: f32 = 100.0;
    pub const ENERGY_DECAY: f32 = 0.1;

    /// Shop
    pub const SKIN_UNLOCK_COST: u32 = 10;

    /// Ambient rain
    pub const RAINDROP_COUNT: usize = 100;
}
