//! Session driver
//!
//! Owns the simulation state, the player profile and the storage gateway,
//! and wires them together once per tick: a pending tap is routed according
//! to the current phase, the simulation advances, and emitted events are
//! applied to the profile (currency, game-over flush).

use glam::Vec2;

use crate::persistence::Storage;
use crate::profile::Profile;
use crate::sim::{tick, GameEvent, GamePhase, GameState, TickInput};
use crate::ui::{self, GameOverAction, MenuAction, ShopAction};

pub struct Session<S: Storage> {
    state: GameState,
    profile: Profile,
    store: S,
    /// Tap delivered by the host since the last tick, consumed at the next
    /// tick boundary
    pending_tap: Option<Vec2>,
}

impl<S: Storage> Session<S> {
    /// Start a session: read the profile once, begin at the menu
    pub fn new(seed: u64, store: S) -> Self {
        let profile = Profile::load(&store);
        log::info!(
            "session start: high score {}, {} food, skin {:?}",
            profile.high_score,
            profile.currency,
            profile.selected_skin()
        );
        Self {
            state: GameState::new(seed),
            profile,
            store,
            pending_tap: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Record a tap/click from the host; consulted at the next tick boundary
    pub fn handle_tap(&mut self, pos: Vec2) {
        self.pending_tap = Some(pos);
    }

    /// Run one fixed timestep: route the pending tap, advance the
    /// simulation, apply events. Returns the tick's events so the
    /// presentation layer can react (sounds, flashes).
    pub fn advance(&mut self) -> Vec<GameEvent> {
        let input = self.route_pending_tap();
        let events = tick(&mut self.state, &input);
        for event in &events {
            match event {
                GameEvent::FoodCollected(_) => self.profile.collect_food(),
                GameEvent::GameOver { score } => {
                    self.profile.record_game_over(*score, &mut self.store);
                }
                GameEvent::PipePassed => {}
            }
        }
        events
    }

    /// One tap, at most one transition; hit-testing order per screen lives
    /// in `ui`
    fn route_pending_tap(&mut self) -> TickInput {
        let Some(tap) = self.pending_tap.take() else {
            return TickInput::default();
        };

        match self.state.phase {
            GamePhase::Menu => match ui::menu_action(tap) {
                MenuAction::StartGame => {
                    self.state.phase = GamePhase::Playing;
                    log::debug!("menu -> playing");
                }
                MenuAction::OpenShop => {
                    self.state.phase = GamePhase::Shop;
                    log::debug!("menu -> shop");
                }
            },
            GamePhase::Playing => return TickInput { flap: true },
            GamePhase::GameOver => match ui::game_over_action(tap) {
                Some(GameOverAction::PlayAgain) => {
                    self.state.reset_session();
                    self.state.phase = GamePhase::Playing;
                    log::debug!("game over -> playing");
                }
                Some(GameOverAction::OpenShop) => {
                    self.state.phase = GamePhase::Shop;
                    log::debug!("game over -> shop");
                }
                None => {}
            },
            GamePhase::Shop => match ui::shop_action(tap) {
                Some(ShopAction::SkinSlot(index)) => {
                    let outcome = self.profile.tap_skin(index, &mut self.store);
                    log::debug!("shop slot {index}: {outcome:?}");
                }
                Some(ShopAction::Back) => {
                    self.state.phase = GamePhase::Menu;
                    log::debug!("shop -> menu");
                }
                None => {}
            },
        }
        TickInput::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use crate::profile::SkinId;
    use crate::sim::Pet;
    use crate::ui::{skin_slot_rect, MENU_SHOP_BUTTON, PLAY_AGAIN_BUTTON, SHOP_BACK_BUTTON};

    fn rect_center(rect: crate::ui::Rect) -> Vec2 {
        rect.pos + rect.size / 2.0
    }

    fn new_session() -> Session<MemoryStore> {
        Session::new(1234, MemoryStore::new())
    }

    #[test]
    fn test_menu_tap_starts_run() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();
        assert_eq!(session.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_menu_shop_button_opens_shop() {
        let mut session = new_session();
        session.handle_tap(rect_center(MENU_SHOP_BUTTON));
        session.advance();
        assert_eq!(session.state().phase, GamePhase::Shop);
    }

    #[test]
    fn test_playing_tap_flaps() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();

        session.handle_tap(Vec2::new(10.0, 10.0));
        session.advance();
        assert_eq!(session.state().pet.vy, FLAP_IMPULSE);
        assert_eq!(session.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_tap_consumed_once() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();
        session.handle_tap(Vec2::new(10.0, 10.0));
        session.advance();
        let vy_after_flap = session.state().pet.vy;
        session.advance();
        // No second flap; gravity resumed
        assert_eq!(session.state().pet.vy, vy_after_flap + GRAVITY);
    }

    #[test]
    fn test_game_over_flushes_high_score() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();

        // Drop the pet onto the ground
        session.state.pet.pos.y = Pet::floor_y();
        session.state.pet.vy = 5.0;
        session.state.score = 4;
        let events = session.advance();
        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver { score: 4 }));
        assert_eq!(session.profile().high_score, 4);
        assert_eq!(
            session.store.get("flappy_pets_high_score").as_deref(),
            Some("4")
        );
    }

    #[test]
    fn test_play_again_resets_run() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();
        session.state.pet.pos.y = Pet::floor_y();
        session.state.score = 2;
        session.advance();
        assert_eq!(session.state().phase, GamePhase::GameOver);

        session.handle_tap(rect_center(PLAY_AGAIN_BUTTON));
        session.advance();
        assert_eq!(session.state().phase, GamePhase::Playing);
        assert_eq!(session.state().score, 0);
        // High score survives the reset
        assert_eq!(session.profile().high_score, 2);
    }

    #[test]
    fn test_game_over_stray_tap_is_noop() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();
        session.state.pet.pos.y = Pet::floor_y();
        session.advance();

        session.handle_tap(Vec2::new(5.0, 5.0));
        session.advance();
        assert_eq!(session.state().phase, GamePhase::GameOver);
    }

    #[test]
    fn test_shop_purchase_scenario() {
        // Currency 10, cost 10, tap a locked slot: unlocked, broke, selected,
        // persisted immediately
        let mut session = new_session();
        session.profile.currency = SKIN_UNLOCK_COST;
        session.handle_tap(rect_center(MENU_SHOP_BUTTON));
        session.advance();

        session.handle_tap(rect_center(skin_slot_rect(1)));
        session.advance();
        assert_eq!(session.profile().currency, 0);
        assert!(session.profile().is_unlocked(SkinId::Dog));
        assert_eq!(session.profile().selected_skin(), SkinId::Dog);
        assert_eq!(
            session.store.get("flappy_pets_food_currency").as_deref(),
            Some("0")
        );
        // Still in the shop
        assert_eq!(session.state().phase, GamePhase::Shop);
    }

    #[test]
    fn test_shop_locked_slot_without_funds_is_noop() {
        let mut session = new_session();
        session.handle_tap(rect_center(MENU_SHOP_BUTTON));
        session.advance();

        session.handle_tap(rect_center(skin_slot_rect(8)));
        session.advance();
        assert_eq!(session.profile().selected_skin(), SkinId::Cat);
        assert!(!session.profile().is_unlocked(SkinId::Fox));
    }

    #[test]
    fn test_shop_back_returns_to_menu() {
        let mut session = new_session();
        session.handle_tap(rect_center(MENU_SHOP_BUTTON));
        session.advance();
        session.handle_tap(rect_center(SHOP_BACK_BUTTON));
        session.advance();
        assert_eq!(session.state().phase, GamePhase::Menu);
    }

    #[test]
    fn test_collected_food_becomes_currency() {
        let mut session = new_session();
        session.handle_tap(Vec2::new(180.0, 320.0));
        session.advance();

        session.state.foods.push(crate::sim::Food {
            pos: session.state.pet.center() - Vec2::splat(FOOD_RADIUS),
            kind: crate::sim::FoodKind::Apple,
        });
        // Hold altitude so the tick is spent on the pickup, not the ground
        session.handle_tap(Vec2::new(10.0, 10.0));
        let events = session.advance();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::FoodCollected(_))));
        assert_eq!(session.profile().currency, 1);
    }
}
