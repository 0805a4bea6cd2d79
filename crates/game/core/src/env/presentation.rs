use std::borrow::Cow;

use crate::state::Position;

/// Pointer position in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Named icon inside a named texture atlas.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconRef {
    pub atlas: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl IconRef {
    pub const fn new(atlas: &'static str, name: &'static str) -> Self {
        Self {
            atlas: Cow::Borrowed(atlas),
            name: Cow::Borrowed(name),
        }
    }

    pub fn owned(atlas: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atlas: Cow::Owned(atlas.into()),
            name: Cow::Owned(name.into()),
        }
    }
}

/// RGBA multiplier applied to an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(220, 40, 40);
    pub const ORANGE: Self = Self::rgb(255, 140, 0);
    pub const BLUE: Self = Self::rgb(60, 120, 255);
    pub const GREEN: Self = Self::rgb(60, 200, 90);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One hit animation as the renderer sees it this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitSprite {
    pub position: Position,
    pub icon: IconRef,
    pub tint: Tint,
}

/// Everything the combat overlay draws in one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatFrame {
    pub hits: Vec<HitSprite>,
    /// Tile highlighted by the targeting indicator, if a target is pending.
    pub selection: Option<Position>,
}

/// Presentation surface. Drawing itself happens elsewhere.
pub trait Presentation {
    fn open_choice_menu(&mut self, title: &str, options: &[String]);

    fn screen_to_map(&self, point: ScreenPoint) -> Position;

    fn map_to_screen(&self, position: Position) -> ScreenPoint;

    /// Centres the view on `focus`.
    fn recenter(&mut self, focus: Position);

    fn draw_combat(&mut self, frame: &CombatFrame);
}
