//! Player profile: high score, food currency and the skin catalog
//!
//! Persisted across sessions through the `Storage` gateway. Absent or
//! malformed values fall back to defaults; invariants (currency never
//! negative, selected skin always unlocked) are enforced on load and on
//! every mutation.

use serde::{Deserialize, Serialize};

use crate::consts::SKIN_UNLOCK_COST;
use crate::persistence::Storage;

/// Cosmetic pet skins, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinId {
    Cat,
    Dog,
    Rabbit,
    Bird,
    Pig,
    Frog,
    Monkey,
    Panda,
    Fox,
}

/// The fixed shop catalog; index 0 is the default skin, always unlocked
pub const SKIN_CATALOG: [SkinId; 9] = [
    SkinId::Cat,
    SkinId::Dog,
    SkinId::Rabbit,
    SkinId::Bird,
    SkinId::Pig,
    SkinId::Frog,
    SkinId::Monkey,
    SkinId::Panda,
    SkinId::Fox,
];

/// Outcome of tapping a skin slot in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOutcome {
    /// Already owned; it is now selected
    Selected,
    /// Cost deducted, skin unlocked and selected
    Purchased,
    /// Locked and the player cannot afford it; nothing changed
    InsufficientFunds,
}

/// Persisted player profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub high_score: u32,
    /// Food currency, spent on skin unlocks
    pub currency: u32,
    /// Unlocked skins in unlock order; always contains the default
    pub unlocked: Vec<SkinId>,
    /// Index into `SKIN_CATALOG`; always an unlocked skin
    pub selected: usize,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high_score: 0,
            currency: 0,
            unlocked: vec![SKIN_CATALOG[0]],
            selected: 0,
        }
    }
}

impl Profile {
    const KEY_HIGH_SCORE: &'static str = "flappy_pets_high_score";
    const KEY_CURRENCY: &'static str = "flappy_pets_food_currency";
    const KEY_UNLOCKED: &'static str = "flappy_pets_unlocked_skins";
    const KEY_SELECTED: &'static str = "flappy_pets_selected_skin";

    /// Load the profile from storage, falling back to defaults per field
    pub fn load(store: &dyn Storage) -> Self {
        let defaults = Self::default();

        let high_score = store
            .get(Self::KEY_HIGH_SCORE)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.high_score);
        let currency = store
            .get(Self::KEY_CURRENCY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.currency);
        let mut unlocked: Vec<SkinId> = store
            .get(Self::KEY_UNLOCKED)
            .and_then(|v| serde_json::from_str(&v).ok())
            .unwrap_or_else(|| defaults.unlocked.clone());
        let selected = store
            .get(Self::KEY_SELECTED)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.selected);

        // The default skin can never be lost
        if !unlocked.contains(&SKIN_CATALOG[0]) {
            unlocked.insert(0, SKIN_CATALOG[0]);
        }

        let mut profile = Self {
            high_score,
            currency,
            unlocked,
            selected,
        };
        // A stale selection (out of range, or pointing at a locked skin)
        // falls back to the default
        if !profile.selection_valid() {
            log::warn!("persisted skin selection invalid, using default");
            profile.selected = 0;
        }
        profile
    }

    fn selection_valid(&self) -> bool {
        SKIN_CATALOG
            .get(self.selected)
            .is_some_and(|skin| self.unlocked.contains(skin))
    }

    /// The skin currently worn by the pet
    pub fn selected_skin(&self) -> SkinId {
        SKIN_CATALOG[self.selected]
    }

    pub fn is_unlocked(&self, skin: SkinId) -> bool {
        self.unlocked.contains(&skin)
    }

    /// Grant currency for a collected food pickup (not persisted until the
    /// next game-over or purchase flush)
    pub fn collect_food(&mut self) {
        self.currency += 1;
    }

    /// Record a finished run: raise the high score if beaten and flush all
    /// persisted fields together
    pub fn record_game_over(&mut self, score: u32, store: &mut dyn Storage) {
        if score > self.high_score {
            log::info!("new high score: {score}");
            self.high_score = score;
        }
        self.save_all(store);
    }

    /// Handle a tap on a shop grid slot
    pub fn tap_skin(&mut self, index: usize, store: &mut dyn Storage) -> ShopOutcome {
        let skin = SKIN_CATALOG[index];
        if self.is_unlocked(skin) {
            self.selected = index;
            self.save_selection(store);
            return ShopOutcome::Selected;
        }
        if self.currency < SKIN_UNLOCK_COST {
            return ShopOutcome::InsufficientFunds;
        }
        self.currency -= SKIN_UNLOCK_COST;
        self.unlocked.push(skin);
        self.selected = index;
        log::info!("unlocked skin {skin:?}");
        store.set(Self::KEY_CURRENCY, &self.currency.to_string());
        self.save_unlocked(store);
        self.save_selection(store);
        ShopOutcome::Purchased
    }

    /// Flush every persisted field (game-over path)
    pub fn save_all(&self, store: &mut dyn Storage) {
        store.set(Self::KEY_HIGH_SCORE, &self.high_score.to_string());
        store.set(Self::KEY_CURRENCY, &self.currency.to_string());
        self.save_unlocked(store);
        self.save_selection(store);
    }

    fn save_unlocked(&self, store: &mut dyn Storage) {
        match serde_json::to_string(&self.unlocked) {
            Ok(json) => store.set(Self::KEY_UNLOCKED, &json),
            Err(err) => log::error!("failed to serialize unlocked skins: {err}"),
        }
    }

    fn save_selection(&self, store: &mut dyn Storage) {
        store.set(Self::KEY_SELECTED, &self.selected.to_string());
    }
}
