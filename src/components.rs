use macroquad::prelude::*;

use crate::assets::Visual;
use crate::config::Settings;
use crate::input::FrameInput;

const HOVER_TINT: Color = Color::new(0.85, 0.95, 1.0, 1.0);
const OPTION_HOVER_COL: Color = Color::new(0.39, 0.78, 1.0, 1.0);
const OPTION_SELECTED_COL: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const OPTION_TEXT_COL: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const SLIDER_TRACK_COL: Color = Color::new(0.31, 0.31, 0.31, 1.0);
const SLIDER_FILL_COL: Color = Color::new(0.39, 0.78, 1.0, 1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub hovered: bool,
    pub pressed: bool,
}

/// Hit-testing is decided by the state returned from the poll, never by
/// the drawing.
fn poll_rect(rect: Rect, input: &FrameInput) -> ButtonState {
    let hovered = rect.contains(input.pointer);
    ButtonState {
        hovered,
        pressed: hovered && input.pointer_down,
    }
}

/// An image button. `pressed` is level-triggered; whether a press actually
/// fires is up to the caller's click gate.
pub struct Button<'a> {
    rect: Rect,
    visual: &'a Visual,
}

impl<'a> Button<'a> {
    pub const HOVER_SCALE: f32 = 1.05;

    pub fn new(rect: Rect, visual: &'a Visual) -> Self {
        Self { rect, visual }
    }

    pub fn poll(&self, input: &FrameInput) -> ButtonState {
        poll_rect(self.rect, input)
    }

    /// Draws the button, slightly enlarged and tinted while hovered, and
    /// reports whether it is pressed this frame.
    pub fn draw(&self, input: &FrameInput) -> bool {
        let state = self.poll(input);
        if state.hovered {
            let w = self.rect.w * Self::HOVER_SCALE;
            let h = self.rect.h * Self::HOVER_SCALE;
            let center = self.rect.center();
            let grown = Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h);
            self.visual.draw(grown, HOVER_TINT);
        } else {
            self.visual.draw(self.rect, WHITE);
        }
        state.pressed
    }
}

/// A clickable line of text: resolution choices and on/off toggles.
pub struct TextOption<'a> {
    rect: Rect,
    text: &'a str,
}

impl<'a> TextOption<'a> {
    pub fn new(rect: Rect, text: &'a str) -> Self {
        Self { rect, text }
    }

    pub fn poll(&self, input: &FrameInput) -> ButtonState {
        poll_rect(self.rect, input)
    }

    pub fn draw(&self, input: &FrameInput, selected: bool, font_size: f32) -> bool {
        let state = self.poll(input);
        let color = if selected {
            OPTION_SELECTED_COL
        } else if state.hovered {
            OPTION_HOVER_COL
        } else {
            OPTION_TEXT_COL
        };
        if state.hovered {
            let r = self.rect;
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, OPTION_HOVER_COL);
        }
        let dims = measure_text(self.text, None, font_size as u16, 1.0);
        draw_text(
            self.text,
            self.rect.x + 8.0,
            self.rect.y + (self.rect.h + dims.offset_y) / 2.0,
            font_size,
            color,
        );
        state.pressed
    }
}

/// A horizontal 0..=100 bar. Dragging is accepted a little outside the bar so
/// the ends are easy to reach.
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    bar: Rect,
}

impl Slider {
    pub const GRAB_MARGIN: f32 = 10.0;

    pub fn new(bar: Rect) -> Self {
        Self { bar }
    }

    pub fn drag_region(&self) -> Rect {
        let m = Self::GRAB_MARGIN;
        Rect::new(self.bar.x - m, self.bar.y - m, self.bar.w + 2.0 * m, self.bar.h + 2.0 * m)
    }

    /// Value for a pointer at horizontal position `x`, clamped to the bar.
    pub fn value_at(&self, x: f32) -> u8 {
        if self.bar.w <= 0.0 {
            return 0;
        }
        let ratio = ((x - self.bar.x) / self.bar.w).clamp(0.0, 1.0);
        (ratio * Settings::MAX_VOLUME as f32) as u8
    }

    /// New value while the pointer is held inside the drag region.
    pub fn drag(&self, input: &FrameInput) -> Option<u8> {
        (input.pointer_down && self.drag_region().contains(input.pointer))
            .then(|| self.value_at(input.pointer.x))
    }

    pub fn draw(&self, value: u8, font_size: f32) {
        let b = self.bar;
        let fill = b.w * value.min(Settings::MAX_VOLUME) as f32 / Settings::MAX_VOLUME as f32;
        draw_rectangle(b.x, b.y, b.w, b.h, SLIDER_TRACK_COL);
        draw_rectangle(b.x, b.y, fill, b.h, SLIDER_FILL_COL);
        draw_rectangle_lines(b.x, b.y, b.w, b.h, 2.0, WHITE);

        let label = format!("{value}%");
        let dims = measure_text(&label, None, font_size as u16, 1.0);
        draw_text(
            &label,
            b.x + b.w + 15.0,
            b.y + (b.h + dims.offset_y) / 2.0,
            font_size,
            WHITE,
        );
    }
}
