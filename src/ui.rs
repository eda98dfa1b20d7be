//! Declarative hit regions for the menu, game-over and shop screens
//!
//! Each screen exposes its controls as an ordered list of (rect, action)
//! pairs; routing walks the list and the first containing rect wins. The
//! shop evaluates the skin grid before its fixed buttons. Rendering is an
//! external concern; these tables only decide what a tap means.

use glam::Vec2;

use crate::consts::{PLAYFIELD_H, PLAYFIELD_W};
use crate::profile::SKIN_CATALOG;

/// Axis-aligned hit box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }
}

/// Shop-entry button on the menu screen
pub const MENU_SHOP_BUTTON: Rect =
    Rect::new(PLAYFIELD_W / 2.0 - 100.0, PLAYFIELD_H - 100.0, 200.0, 50.0);

/// Game-over panel buttons
pub const PLAY_AGAIN_BUTTON: Rect =
    Rect::new(PLAYFIELD_W / 2.0 - 100.0, PLAYFIELD_H / 2.0 + 100.0, 200.0, 50.0);
pub const GAME_OVER_SHOP_BUTTON: Rect =
    Rect::new(PLAYFIELD_W / 2.0 - 100.0, PLAYFIELD_H / 2.0 + 170.0, 200.0, 50.0);

/// Shop back button
pub const SHOP_BACK_BUTTON: Rect =
    Rect::new(PLAYFIELD_W / 2.0 - 100.0, PLAYFIELD_H - 60.0, 200.0, 40.0);

/// Shop grid layout
pub const SKIN_CELL_SIZE: f32 = 80.0;
pub const SKIN_CELL_PADDING: f32 = 20.0;
pub const SKIN_GRID_COLS: usize = 3;
pub const SKIN_GRID_ORIGIN_Y: f32 = 150.0;

/// What a tap on the menu screen means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Anywhere outside a control starts a run
    StartGame,
    OpenShop,
}

/// What a tap on the game-over panel means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    PlayAgain,
    OpenShop,
}

/// What a tap on the shop screen means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    /// Index into the skin catalog
    SkinSlot(usize),
    Back,
}

/// Hit box of the `index`-th skin cell in the 3-column grid
pub fn skin_slot_rect(index: usize) -> Rect {
    let col = index % SKIN_GRID_COLS;
    let row = index / SKIN_GRID_COLS;
    let grid_w =
        SKIN_CELL_SIZE * SKIN_GRID_COLS as f32 + SKIN_CELL_PADDING * (SKIN_GRID_COLS - 1) as f32;
    let origin_x = (PLAYFIELD_W - grid_w) / 2.0;
    Rect::new(
        origin_x + col as f32 * (SKIN_CELL_SIZE + SKIN_CELL_PADDING),
        SKIN_GRID_ORIGIN_Y + row as f32 * (SKIN_CELL_SIZE + SKIN_CELL_PADDING),
        SKIN_CELL_SIZE,
        SKIN_CELL_SIZE,
    )
}

/// Route a menu tap. The shop button is the only control; everything else
/// starts the game.
pub fn menu_action(tap: Vec2) -> MenuAction {
    if MENU_SHOP_BUTTON.contains(tap) {
        MenuAction::OpenShop
    } else {
        MenuAction::StartGame
    }
}

/// Route a game-over tap; taps outside both buttons do nothing
pub fn game_over_action(tap: Vec2) -> Option<GameOverAction> {
    let regions = [
        (PLAY_AGAIN_BUTTON, GameOverAction::PlayAgain),
        (GAME_OVER_SHOP_BUTTON, GameOverAction::OpenShop),
    ];
    regions
        .into_iter()
        .find(|(rect, _)| rect.contains(tap))
        .map(|(_, action)| action)
}

/// Route a shop tap: skin grid first, then the back button, first match wins
pub fn shop_action(tap: Vec2) -> Option<ShopAction> {
    (0..SKIN_CATALOG.len())
        .map(|i| (skin_slot_rect(i), ShopAction::SkinSlot(i)))
        .chain(std::iter::once((SHOP_BACK_BUTTON, ShopAction::Back)))
        .find(|(rect, _)| rect.contains(tap))
        .map(|(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> Vec2 {
        rect.pos + rect.size / 2.0
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(30.0, 30.0)));
        assert!(!rect.contains(Vec2::new(30.1, 30.0)));
        assert!(!rect.contains(Vec2::new(9.9, 20.0)));
    }

    #[test]
    fn test_menu_routing() {
        assert_eq!(menu_action(center(MENU_SHOP_BUTTON)), MenuAction::OpenShop);
        assert_eq!(menu_action(Vec2::new(180.0, 100.0)), MenuAction::StartGame);
        // Menu has no dead zones: taps just off the button still start a run
        assert_eq!(menu_action(Vec2::new(1.0, 1.0)), MenuAction::StartGame);
    }

    #[test]
    fn test_game_over_routing() {
        assert_eq!(
            game_over_action(center(PLAY_AGAIN_BUTTON)),
            Some(GameOverAction::PlayAgain)
        );
        assert_eq!(
            game_over_action(center(GAME_OVER_SHOP_BUTTON)),
            Some(GameOverAction::OpenShop)
        );
        assert_eq!(game_over_action(Vec2::new(180.0, 100.0)), None);
    }

    #[test]
    fn test_shop_grid_layout() {
        // 3 columns starting at x=40, y=150, 100px stride
        assert_eq!(skin_slot_rect(0).pos, Vec2::new(40.0, 150.0));
        assert_eq!(skin_slot_rect(2).pos, Vec2::new(240.0, 150.0));
        assert_eq!(skin_slot_rect(3).pos, Vec2::new(40.0, 250.0));
        assert_eq!(skin_slot_rect(8).pos, Vec2::new(240.0, 350.0));
    }

    #[test]
    fn test_shop_routing_grid_before_buttons() {
        for i in 0..SKIN_CATALOG.len() {
            assert_eq!(
                shop_action(center(skin_slot_rect(i))),
                Some(ShopAction::SkinSlot(i))
            );
        }
        assert_eq!(shop_action(center(SHOP_BACK_BUTTON)), Some(ShopAction::Back));
        // Padding between cells hits nothing
        assert_eq!(shop_action(Vec2::new(130.0, 130.0)), None);
    }
}
