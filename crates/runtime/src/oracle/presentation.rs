use game_core::{CombatFrame, Position, Presentation, ScreenPoint};

/// Presentation layer that renders nothing and remembers what it was asked.
#[derive(Debug, Clone)]
pub struct HeadlessPresentation {
    tile_size: i32,
    menus: Vec<(String, Vec<String>)>,
    focus: Option<Position>,
    last_frame: Option<CombatFrame>,
    frames_drawn: usize,
}

impl HeadlessPresentation {
    pub const DEFAULT_TILE_SIZE: i32 = 32;

    pub fn new() -> Self {
        Self::with_tile_size(Self::DEFAULT_TILE_SIZE)
    }

    pub fn with_tile_size(tile_size: i32) -> Self {
        Self {
            tile_size: tile_size.max(1),
            menus: Vec::new(),
            focus: None,
            last_frame: None,
            frames_drawn: 0,
        }
    }

    /// Menus opened so far as `(title, options)`.
    pub fn menus(&self) -> &[(String, Vec<String>)] {
        &self.menus
    }

    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    pub fn last_frame(&self) -> Option<&CombatFrame> {
        self.last_frame.as_ref()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl Default for HeadlessPresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation for HeadlessPresentation {
    fn open_choice_menu(&mut self, title: &str, options: &[String]) {
        self.menus.push((title.to_owned(), options.to_vec()));
    }

    fn screen_to_map(&self, point: ScreenPoint) -> Position {
        Position::new(
            point.x.div_euclid(self.tile_size),
            point.y.div_euclid(self.tile_size),
        )
    }

    fn map_to_screen(&self, position: Position) -> ScreenPoint {
        ScreenPoint::new(position.x * self.tile_size, position.y * self.tile_size)
    }

    fn recenter(&mut self, focus: Position) {
        self.focus = Some(focus);
    }

    fn draw_combat(&mut self, frame: &CombatFrame) {
        self.frames_drawn += 1;
        self.last_frame = Some(frame.clone());
    }
}
