use log::{info, warn};
use macroquad::math::{vec2, Rect, Vec2};
use std::path::Path;

use crate::catalog::{Catalog, CatalogEntry};
use crate::input::FrameInput;
use crate::message::MessageSlot;
use crate::process::ProcessSpawner;
use crate::ui::{ERROR_COL, SUCCESS_COL};

/// Card grid geometry for a given viewport. Cards are laid out row-major and
/// shifted up by the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub viewport: Vec2,
}

impl GridLayout {
    pub const COLUMNS: usize = 2;
    pub const CARD_WIDTH: f32 = 500.0;
    pub const CARD_HEIGHT: f32 = 200.0;
    pub const MARGIN: f32 = 50.0;
    pub const TOP: f32 = 150.0;
    pub const FOOTER: f32 = 100.0;
    pub const PLAY_WIDTH: f32 = 80.0;
    pub const PLAY_HEIGHT: f32 = 30.0;

    pub fn new(viewport: Vec2) -> Self {
        Self { viewport }
    }

    fn start_x(&self) -> f32 {
        let columns = Self::COLUMNS as f32;
        let grid_width = columns * Self::CARD_WIDTH + (columns - 1.0) * Self::MARGIN;
        (self.viewport.x - grid_width) / 2.0
    }

    pub fn card_rect(&self, index: usize, scroll: f32) -> Rect {
        let row = (index / Self::COLUMNS) as f32;
        let col = (index % Self::COLUMNS) as f32;
        Rect::new(
            self.start_x() + col * (Self::CARD_WIDTH + Self::MARGIN),
            Self::TOP + row * (Self::CARD_HEIGHT + Self::MARGIN) - scroll,
            Self::CARD_WIDTH,
            Self::CARD_HEIGHT,
        )
    }

    /// The Play button sits in the bottom-right corner of its card.
    pub fn play_rect(card: Rect) -> Rect {
        Rect::new(
            card.x + card.w - 100.0,
            card.y + card.h - 50.0,
            Self::PLAY_WIDTH,
            Self::PLAY_HEIGHT,
        )
    }

    /// Whether any part of `card` is vertically inside the viewport.
    pub fn is_visible(&self, card: Rect) -> bool {
        card.y + card.h >= 0.0 && card.y <= self.viewport.y
    }

    pub fn rows(count: usize) -> usize {
        count.div_ceil(Self::COLUMNS)
    }

    pub fn content_height(count: usize) -> f32 {
        Self::rows(count) as f32 * (Self::CARD_HEIGHT + Self::MARGIN)
    }

    pub fn visible_height(&self) -> f32 {
        self.viewport.y - Self::TOP - Self::FOOTER
    }

    pub fn max_scroll(&self, count: usize) -> f32 {
        (Self::content_height(count) - self.visible_height()).max(0.0)
    }

    /// Cards to draw this frame, with their rects.
    pub fn visible_cards(
        &self,
        count: usize,
        scroll: f32,
    ) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..count)
            .map(move |i| (i, self.card_rect(i, scroll)))
            .filter(move |(_, card)| self.is_visible(*card))
    }

    /// Index of the launchable entry whose Play button contains `point`.
    pub fn hit_play(&self, entries: &[CatalogEntry], scroll: f32, point: Vec2) -> Option<usize> {
        self.visible_cards(entries.len(), scroll)
            .filter(|(i, _)| entries[*i].is_launchable())
            .find(|(_, card)| Self::play_rect(*card).contains(point))
            .map(|(i, _)| i)
    }

    pub fn hovered_card(&self, count: usize, scroll: f32, point: Vec2) -> Option<usize> {
        self.visible_cards(count, scroll)
            .find(|(_, card)| card.contains(point))
            .map(|(i, _)| i)
    }

    pub fn scrollbar_track(&self) -> Rect {
        Rect::new(self.viewport.x - 20.0, Self::TOP, 8.0, self.viewport.y - 250.0)
    }

    /// The position indicator inside the track; `None` when nothing scrolls.
    pub fn scrollbar_thumb(&self, count: usize, scroll: f32) -> Option<Rect> {
        let max = self.max_scroll(count);
        if max <= 0.0 {
            return None;
        }
        let track = self.scrollbar_track();
        let height = (track.h * (self.visible_height() / Self::content_height(count))).max(20.0);
        let y = track.y + (scroll / max) * (track.h - height);
        Some(Rect::new(track.x, y, track.w, height))
    }
}

/// Vertical scroll position, kept inside `[0, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    max: f32,
}

impl ScrollState {
    pub const SPEED: f32 = 30.0;

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Positive `delta` scrolls towards the top.
    pub fn scroll_by_wheel(&mut self, delta: f32) {
        self.offset -= delta * Self::SPEED;
        self.clamp();
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherOutcome {
    Continue,
    Quit,
    /// Go back to the front-end menu.
    ReturnToMenu,
}

pub struct LauncherContext {
    pub catalog: Catalog,
    pub scroll: ScrollState,
    pub message: MessageSlot,
    pub viewport: Vec2,
    pub hovered: Option<usize>,
}

impl LauncherContext {
    pub const MESSAGE_DURATION: f64 = 3.0;

    pub fn new(catalog: Catalog, viewport: Vec2) -> Self {
        let mut ctx = Self {
            catalog,
            scroll: ScrollState::default(),
            message: MessageSlot::default(),
            viewport,
            hovered: None,
        };
        ctx.scroll.set_max(ctx.grid().max_scroll(ctx.catalog.entries.len()));
        ctx
    }

    pub fn grid(&self) -> GridLayout {
        GridLayout::new(self.viewport)
    }

    /// Click hit-testing uses the viewport and offset the last frame was drawn
    /// with; `viewport` is the window size for the frame about to be drawn and
    /// is applied after the click, together with the wheel.
    pub fn update(
        &mut self,
        input: &FrameInput,
        viewport: Vec2,
        now: f64,
        spawner: &mut impl ProcessSpawner,
    ) -> LauncherOutcome {
        if input.quit_requested || input.back {
            return LauncherOutcome::Quit;
        }
        if input.return_to_menu {
            return LauncherOutcome::ReturnToMenu;
        }

        if input.pointer_pressed {
            let hit = self
                .grid()
                .hit_play(&self.catalog.entries, self.scroll.offset(), input.pointer);
            if let Some(index) = hit {
                self.launch(index, now, spawner);
            }
        }

        self.viewport = viewport;
        if input.wheel != 0.0 {
            self.scroll.scroll_by_wheel(input.wheel);
        }

        let count = self.catalog.entries.len();
        self.scroll.set_max(self.grid().max_scroll(count));
        self.hovered = self.grid().hovered_card(count, self.scroll.offset(), input.pointer);
        LauncherOutcome::Continue
    }

    fn launch(&mut self, index: usize, now: f64, spawner: &mut impl ProcessSpawner) {
        let entry = &self.catalog.entries[index];
        let launched = self.catalog.resolve_executable(entry).and_then(|program| {
            info!("Launching {} ({})", entry.title, program.display());
            spawner.spawn(&program, &entry.args)
        });

        let (text, color) = match launched {
            Ok(()) => (format!("Launched {}", entry.title), SUCCESS_COL),
            Err(e) => {
                warn!("Could not launch {}: {e}", entry.title);
                (format!("Could not launch {}: {e}", entry.title), ERROR_COL)
            }
        };
        self.message.show_for(text, color, now, Self::MESSAGE_DURATION);
    }

    /// Starts the menu binary at `menu`. Returns whether it is running.
    pub fn return_to_menu(
        &mut self,
        spawner: &mut impl ProcessSpawner,
        menu: &Path,
        now: f64,
    ) -> bool {
        match spawner.spawn(menu, &[]) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not return to the menu: {e}");
                let text = format!("Could not open the menu: {e}");
                self.message.show_for(text, ERROR_COL, now, Self::MESSAGE_DURATION);
                false
            }
        }
    }
}

/// Viewport size used before the window reports its own.
pub const DEFAULT_VIEWPORT: Vec2 = vec2(1400.0, 800.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryStatus;
    use crate::process::tests::RecordingSpawner;
    use tempfile::tempdir;

    const VIEW: Vec2 = vec2(1400.0, 800.0);

    fn twelve_games() -> Catalog {
        Catalog::builtin("/games")
    }

    #[test]
    fn cards_are_centred_in_two_columns() {
        let grid = GridLayout::new(VIEW);
        assert_eq!(grid.card_rect(0, 0.0), Rect::new(175.0, 150.0, 500.0, 200.0));
        assert_eq!(grid.card_rect(1, 0.0), Rect::new(725.0, 150.0, 500.0, 200.0));
        assert_eq!(grid.card_rect(2, 0.0), Rect::new(175.0, 400.0, 500.0, 200.0));
        assert_eq!(grid.card_rect(2, 100.0).y, 300.0);
        assert_eq!(
            GridLayout::play_rect(grid.card_rect(0, 0.0)),
            Rect::new(575.0, 300.0, 80.0, 30.0)
        );
    }

    #[test]
    fn twelve_entries_scroll_and_clamp() {
        // 1000px of visible grid shows four of the six rows
        let grid = GridLayout::new(vec2(1400.0, 1250.0));
        assert_eq!(GridLayout::rows(12), 6);
        assert_eq!(grid.max_scroll(12), 500.0);

        let mut scroll = ScrollState::default();
        scroll.set_max(grid.max_scroll(12));
        for _ in 0..100 {
            scroll.scroll_by_wheel(-1.0);
        }
        assert_eq!(scroll.offset(), 500.0);
        scroll.scroll_by_wheel(-1.0);
        assert_eq!(scroll.offset(), 500.0);

        for _ in 0..100 {
            scroll.scroll_by_wheel(1.0);
        }
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn short_catalog_does_not_scroll() {
        let grid = GridLayout::new(VIEW);
        assert_eq!(grid.max_scroll(2), 0.0);
        assert!(grid.scrollbar_thumb(2, 0.0).is_none());

        let mut scroll = ScrollState::default();
        scroll.set_max(grid.max_scroll(2));
        scroll.scroll_by_wheel(-3.0);
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut scroll = ScrollState::default();
        scroll.set_max(900.0);
        scroll.scroll_by_wheel(-20.0);
        assert_eq!(scroll.offset(), 600.0);
        scroll.set_max(250.0);
        assert_eq!(scroll.offset(), 250.0);
    }

    #[test]
    fn off_screen_cards_are_skipped() {
        let grid = GridLayout::new(VIEW);
        let visible: Vec<usize> = grid.visible_cards(12, 0.0).map(|(i, _)| i).collect();
        // rows start at 150, 400, 650; the fourth at 900 is below the window
        assert_eq!(visible, vec![0, 1, 2, 3, 4, 5]);

        let scrolled: Vec<usize> = grid.visible_cards(12, 500.0).map(|(i, _)| i).collect();
        assert_eq!(scrolled.first(), Some(&2));
    }

    #[test]
    fn play_hit_requires_available_status() {
        let grid = GridLayout::new(VIEW);
        let mut entries = twelve_games().entries;
        let play = GridLayout::play_rect(grid.card_rect(1, 0.0)).center();

        assert_eq!(grid.hit_play(&entries, 0.0, play), Some(1));

        entries[1].status = EntryStatus::InDevelopment;
        assert_eq!(grid.hit_play(&entries, 0.0, play), None);

        // card body outside the Play button
        let body = grid.card_rect(0, 0.0).point() + vec2(20.0, 20.0);
        assert_eq!(grid.hit_play(&entries, 0.0, body), None);
    }

    #[test]
    fn scrollbar_thumb_tracks_offset() {
        let grid = GridLayout::new(VIEW);
        let max = grid.max_scroll(12);
        let track = grid.scrollbar_track();

        let top = grid.scrollbar_thumb(12, 0.0).unwrap();
        let bottom = grid.scrollbar_thumb(12, max).unwrap();

        assert_eq!(top.y, track.y);
        assert!((bottom.y + bottom.h - (track.y + track.h)).abs() < 1e-3);
        assert!(top.h >= 20.0);
    }

    #[test]
    fn clicking_play_launches_with_the_drawn_offset() {
        let games_dir = tempdir().unwrap();
        let catalog = Catalog::builtin(games_dir.path());
        let expected = games_dir.path().join(&catalog.entries[3].executable);
        std::fs::write(&expected, "").unwrap();
        let mut ctx = LauncherContext::new(catalog, VIEW);
        let mut spawner = RecordingSpawner::default();
        let play = GridLayout::play_rect(ctx.grid().card_rect(3, 0.0)).center();

        // the wheel in the same frame must not move the hit target
        let input = FrameInput {
            wheel: -1.0,
            ..FrameInput::click(play)
        };
        assert_eq!(ctx.update(&input, VIEW, 0.0, &mut spawner), LauncherOutcome::Continue);

        assert_eq!(spawner.spawned.len(), 1);
        assert_eq!(spawner.spawned[0].0, expected);
        assert_eq!(ctx.scroll.offset(), ScrollState::SPEED);
        assert!(ctx.message.active(2.9).unwrap().text.contains("Launched"));
    }

    #[test]
    fn failed_launch_shows_an_error() {
        let games_dir = tempdir().unwrap();
        let catalog = Catalog::builtin(games_dir.path());
        std::fs::write(games_dir.path().join(&catalog.entries[0].executable), "").unwrap();
        let mut ctx = LauncherContext::new(catalog, VIEW);
        let mut spawner = RecordingSpawner {
            fail: true,
            ..Default::default()
        };
        let play = GridLayout::play_rect(ctx.grid().card_rect(0, 0.0)).center();

        ctx.update(&FrameInput::click(play), VIEW, 5.0, &mut spawner);

        let message = ctx.message.active(5.1).unwrap();
        assert!(message.text.starts_with("Could not launch Flappy bird"));
        assert_eq!(message.color, ERROR_COL);
    }

    #[test]
    fn missing_game_file_is_reported_without_spawning() {
        let games_dir = tempdir().unwrap();
        let mut ctx = LauncherContext::new(Catalog::builtin(games_dir.path()), VIEW);
        let mut spawner = RecordingSpawner::default();
        let play = GridLayout::play_rect(ctx.grid().card_rect(1, 0.0)).center();

        ctx.update(&FrameInput::click(play), VIEW, 2.0, &mut spawner);

        assert!(spawner.spawned.is_empty());
        let message = ctx.message.active(2.1).unwrap();
        assert!(message.text.starts_with("Could not launch Pong"));
        assert!(message.text.contains("not found"));
        assert_eq!(message.color, ERROR_COL);
    }

    #[test]
    fn resize_applies_after_the_click() {
        let games_dir = tempdir().unwrap();
        let catalog = Catalog::builtin(games_dir.path());
        std::fs::write(games_dir.path().join(&catalog.entries[0].executable), "").unwrap();
        let mut ctx = LauncherContext::new(catalog, VIEW);
        let mut spawner = RecordingSpawner::default();
        let drawn_play = GridLayout::play_rect(ctx.grid().card_rect(0, 0.0)).center();

        // the window grew this frame; the click still targets the drawn card
        let wider = vec2(2000.0, 800.0);
        ctx.update(&FrameInput::click(drawn_play), wider, 0.0, &mut spawner);

        assert_eq!(spawner.spawned.len(), 1);
        assert_eq!(ctx.viewport, wider);
        assert_ne!(GridLayout::play_rect(ctx.grid().card_rect(0, 0.0)).center(), drawn_play);
    }

    #[test]
    fn held_pointer_does_not_relaunch() {
        let mut ctx = LauncherContext::new(twelve_games(), VIEW);
        let mut spawner = RecordingSpawner::default();
        let play = GridLayout::play_rect(ctx.grid().card_rect(0, 0.0)).center();

        ctx.update(&FrameInput::holding(play), VIEW, 0.0, &mut spawner);
        assert!(spawner.spawned.is_empty());
    }

    #[test]
    fn keys_leave_the_launcher() {
        let mut ctx = LauncherContext::new(twelve_games(), VIEW);
        let mut spawner = RecordingSpawner::default();

        let escape = FrameInput {
            back: true,
            ..Default::default()
        };
        assert_eq!(ctx.update(&escape, VIEW, 0.0, &mut spawner), LauncherOutcome::Quit);

        let q = FrameInput {
            return_to_menu: true,
            ..Default::default()
        };
        assert_eq!(ctx.update(&q, VIEW, 0.0, &mut spawner), LauncherOutcome::ReturnToMenu);
    }
}
