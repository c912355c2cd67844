use macroquad::prelude::*;

use crate::assets::Visual;
use crate::display::Resolution;
use crate::input::FrameInput;
use crate::menu::MenuState;
use crate::message::StatusMessage;
use crate::types::MenuContext;

pub mod audio;
pub mod credits;
pub mod launcher;
pub mod main_menu;
pub mod options;
pub mod video;

pub const TEXT_COL: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BACKGROUND_COL: Color = Color::new(0.012, 0.729, 0.988, 1.0);
pub const SELECTED_COL: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ERROR_COL: Color = Color::new(1.0, 0.39, 0.39, 1.0);
pub const SUCCESS_COL: Color = Color::new(0.39, 1.0, 0.39, 1.0);
pub const INFO_COL: Color = Color::new(0.39, 0.78, 1.0, 1.0);

pub const TITLE_FONT_SIZE: f32 = 60.0;
pub const HEADING_FONT_SIZE: f32 = 40.0;
pub const BODY_FONT_SIZE: f32 = 30.0;
pub const SMALL_FONT_SIZE: f32 = 24.0;

// ===================================
// LAYOUT
// ===================================

/// Screens are designed for 800x600 and stretched to the current display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    sx: f32,
    sy: f32,
    width: f32,
    height: f32,
}

impl Layout {
    pub const BASE_WIDTH: f32 = 800.0;
    pub const BASE_HEIGHT: f32 = 600.0;

    pub fn new(display: Resolution) -> Self {
        let width = display.width_f32();
        let height = display.height_f32();
        Self {
            sx: width / Self::BASE_WIDTH,
            sy: height / Self::BASE_HEIGHT,
            width,
            height,
        }
    }

    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x * self.sx, y * self.sy, w * self.sx, h * self.sy)
    }

    pub fn x(&self, x: f32) -> f32 {
        x * self.sx
    }

    pub fn y(&self, y: f32) -> f32 {
        y * self.sy
    }

    pub fn font(&self, size: f32) -> f32 {
        size * self.sy
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

// ===================================
// SCREEN RENDERING
// ===================================

/// Draws the menu for the current state, then the status message on top.
pub fn render_menu(ctx: &mut MenuContext, input: &FrameInput, now: f64) {
    let layout = Layout::new(ctx.display);
    match ctx.state {
        MenuState::Main => main_menu::draw(ctx, input, &layout),
        MenuState::Options => options::draw(ctx, input, &layout),
        MenuState::Video => video::draw(ctx, input, &layout),
        MenuState::Audio => audio::draw(ctx, input, &layout),
        MenuState::Credits => credits::draw(ctx, input, &layout),
    }
    if let Some(message) = ctx.message.active(now) {
        draw_status_message(message, &layout);
    }
}

// BACKGROUND
pub fn render_background(background: &Visual, layout: &Layout) {
    match background {
        Visual::Texture(_) => {
            background.draw(Rect::new(0.0, 0.0, layout.width(), layout.height()), WHITE)
        }
        Visual::Placeholder { .. } => clear_background(BACKGROUND_COL),
    }
}

/// Title centred near the top of the screen.
pub fn draw_title(title: &str, layout: &Layout) {
    text_centered(title, layout.y(70.0), layout.font(TITLE_FONT_SIZE), TEXT_COL, layout);
}

pub fn text_centered(text: &str, y: f32, font_size: f32, color: Color, layout: &Layout) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    text_with_shadow(text, (layout.width() - dims.width) / 2.0, y, font_size, color);
}

pub fn text_with_shadow(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    let shadow_offset = (font_size / BODY_FONT_SIZE).max(1.0);
    let shadow = Color::new(0.0, 0.0, 0.0, 0.9);
    draw_text(text, x + shadow_offset, y + shadow_offset, font_size, shadow);
    draw_text(text, x, y, font_size, color);
}

/// Transient message centred at the bottom on a dark band.
pub fn draw_status_message(message: &StatusMessage, layout: &Layout) {
    let font_size = layout.font(SMALL_FONT_SIZE);
    let dims = measure_text(&message.text, None, font_size as u16, 1.0);
    let padding = layout.y(10.0);
    let y = layout.height() - layout.y(20.0);
    let x = (layout.width() - dims.width) / 2.0;
    draw_rectangle(
        x - padding,
        y - dims.offset_y - padding,
        dims.width + padding * 2.0,
        dims.height + padding * 2.0,
        Color::new(0.0, 0.0, 0.0, 0.7),
    );
    draw_text(&message.text, x, y, font_size, message.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_identity_at_base_size() {
        let layout = Layout::new(Resolution::new(800, 600));
        assert_eq!(layout.rect(130.0, 125.0, 150.0, 60.0), Rect::new(130.0, 125.0, 150.0, 60.0));
    }

    #[test]
    fn layout_stretches_with_the_display() {
        let layout = Layout::new(Resolution::new(1600, 1200));
        assert_eq!(layout.rect(100.0, 50.0, 10.0, 20.0), Rect::new(200.0, 100.0, 20.0, 40.0));
        assert_eq!(layout.font(30.0), 60.0);
    }
}
