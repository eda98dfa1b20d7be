//! Game state and core simulation types
//!
//! The session context object: everything the tick mutates lives here,
//! owned by the driver and passed in by reference. No globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for a tap
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, score panel shown
    GameOver,
    /// Skin shop screen
    Shop,
}

/// Food pickup varieties (cosmetic only; all grant 1 currency)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Apple,
    Banana,
    Carrot,
    Strawberry,
    Steak,
}

/// All food kinds, in spawn-roll order
pub const FOOD_KINDS: [FoodKind; 5] = [
    FoodKind::Apple,
    FoodKind::Banana,
    FoodKind::Carrot,
    FoodKind::Strawberry,
    FoodKind::Steak,
];

/// The player's pet
#[derive(Debug, Clone)]
pub struct Pet {
    /// Top-left corner of the sprite; x never changes
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vy: f32,
    /// Sprite edge length
    pub size: f32,
    /// Collision hitbox radius around the sprite center
    pub hitbox_radius: f32,
}

impl Pet {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PET_X, PLAYFIELD_H / 2.0),
            vy: 0.0,
            size: PET_SIZE,
            hitbox_radius: PET_HITBOX_RADIUS,
        }
    }

    /// Hitbox center (sprite center)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Lowest y the top-left corner may take before the pet sits on the ground
    pub fn floor_y() -> f32 {
        PLAYFIELD_H - GROUND_H - PET_SIZE
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new()
    }
}

/// A gated pipe pair: solid above `gap_top` and below `gap_top + PIPE_GAP`
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper pipe half
    pub gap_top: f32,
    /// Set once the pet has cleared this pipe (scored)
    pub passed: bool,
    /// Whether a food pickup was spawned in this pipe's gap
    pub has_food: bool,
}

impl Pipe {
    pub fn right_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + PIPE_GAP
    }

    /// Upper rectangle half: from the top edge down to the gap
    pub fn upper_rect(&self) -> (Vec2, Vec2) {
        (Vec2::new(self.x, 0.0), Vec2::new(PIPE_WIDTH, self.gap_top))
    }

    /// Lower rectangle half: from the gap down to the playfield bottom
    pub fn lower_rect(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.x, self.gap_bottom()),
            Vec2::new(PIPE_WIDTH, PLAYFIELD_H - self.gap_bottom()),
        )
    }
}

/// A food pickup floating in a pipe gap
#[derive(Debug, Clone)]
pub struct Food {
    /// Sprite anchor; the collision circle is centered FOOD_RADIUS right/down of it
    pub pos: Vec2,
    pub kind: FoodKind,
}

impl Food {
    /// Collision circle center
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(FOOD_RADIUS)
    }
}

/// An ambient raindrop (decorative, advances in every phase)
#[derive(Debug, Clone)]
pub struct Raindrop {
    pub pos: Vec2,
    pub length: f32,
    pub speed: f32,
}

/// Events emitted by a tick for the session driver to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pipe was cleared; score already incremented
    PipePassed,
    /// A food pickup was collected (grants 1 currency)
    FoodCollected(FoodKind),
    /// Terminal collision; phase is now GameOver
    GameOver { score: u32 },
}

/// Complete per-session simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded generator for spawn heights, food rolls and rain
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub pet: Pet,
    /// Live pipes, insertion-ordered left to right
    pub pipes: Vec<Pipe>,
    /// Live food pickups, insertion-ordered
    pub foods: Vec<Food>,
    /// Ambient rain particles (not gameplay-affecting)
    pub raindrops: Vec<Raindrop>,
    /// Pipes cleared this session
    pub score: u32,
    /// Display-only energy meter, decays while Playing
    pub energy: f32,
    /// Ticks since the last pipe spawn; starts expired so the first
    /// Playing tick spawns immediately
    pub ticks_since_spawn: u32,
}

impl GameState {
    /// Create a fresh state in the Menu phase with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let raindrops = spawn_raindrops(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            time_ticks: 0,
            pet: Pet::new(),
            pipes: Vec::new(),
            foods: Vec::new(),
            raindrops,
            score: 0,
            energy: ENERGY_MAX,
            ticks_since_spawn: PIPE_SPAWN_TICKS,
        }
    }

    /// Reset the run: fresh pet, no pipes or food, score zeroed, energy
    /// refilled. Phase, rain and the RNG stream are untouched.
    pub fn reset_session(&mut self) {
        self.pet = Pet::new();
        self.pipes.clear();
        self.foods.clear();
        self.score = 0;
        self.energy = ENERGY_MAX;
        self.ticks_since_spawn = PIPE_SPAWN_TICKS;
    }
}

fn spawn_raindrops(rng: &mut Pcg32) -> Vec<Raindrop> {
    (0..RAINDROP_COUNT)
        .map(|_| Raindrop {
            pos: Vec2::new(
                rng.random_range(0.0..PLAYFIELD_W),
                rng.random_range(0.0..PLAYFIELD_H),
            ),
            length: rng.random_range(10.0..30.0),
            speed: rng.random_range(5.0..10.0),
        })
        .collect()
}
