use macroquad::prelude::*;

use crate::catalog::CatalogEntry;
use crate::launcher::{GridLayout, LauncherContext};

const CARD_COL: Color = Color::new(0.157, 0.157, 0.235, 1.0);
const CARD_HOVER_COL: Color = Color::new(0.235, 0.235, 0.353, 1.0);
const CARD_BORDER_COL: Color = Color::new(0.314, 0.314, 0.392, 1.0);
const ACCENT_COL: Color = Color::new(0.392, 0.784, 1.0, 1.0);
const GRADIENT_START: Color = Color::new(0.098, 0.098, 0.176, 1.0);
const GRADIENT_END: Color = Color::new(0.059, 0.059, 0.098, 1.0);
const MUTED_COL: Color = Color::new(0.588, 0.588, 0.588, 1.0);
const DESCRIPTION_COL: Color = Color::new(0.784, 0.784, 0.784, 1.0);
const PLAY_IDLE_COL: Color = Color::new(0.235, 0.235, 0.314, 1.0);
const SCROLL_TRACK_COL: Color = Color::new(0.196, 0.196, 0.196, 1.0);

const GRADIENT_BANDS: usize = 64;

pub const TITLE: &str = "Minigames";
pub const SUBTITLE: &str = "Pick your adventure";
pub const CONTROLS_HELP: &str =
    "Click PLAY to start a game - ESC to quit - Wheel to scroll - Q for the menu";

fn draw_gradient_background(viewport: Vec2) {
    let band_h = viewport.y / GRADIENT_BANDS as f32;
    for band in 0..GRADIENT_BANDS {
        let t = band as f32 / GRADIENT_BANDS as f32;
        let color = Color::new(
            GRADIENT_START.r + (GRADIENT_END.r - GRADIENT_START.r) * t,
            GRADIENT_START.g + (GRADIENT_END.g - GRADIENT_START.g) * t,
            GRADIENT_START.b + (GRADIENT_END.b - GRADIENT_START.b) * t,
            1.0,
        );
        draw_rectangle(0.0, band as f32 * band_h, viewport.x, band_h + 1.0, color);
    }
}

fn text_centered(text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, font_size, color);
}

fn draw_header(viewport: Vec2) {
    text_centered(TITLE, viewport.x / 2.0, 65.0, 56.0, ACCENT_COL);
    text_centered(SUBTITLE, viewport.x / 2.0, 98.0, 20.0, MUTED_COL);

    let clock = chrono::Local::now().format("%H:%M:%S").to_string();
    draw_text(&clock, viewport.x - 150.0, 45.0, 22.0, MUTED_COL);

    draw_line(100.0, 120.0, viewport.x - 100.0, 120.0, 2.0, ACCENT_COL);
}

fn draw_footer(viewport: Vec2) {
    let footer_y = viewport.y - 50.0;
    draw_line(100.0, footer_y - 20.0, viewport.x - 100.0, footer_y - 20.0, 1.0, ACCENT_COL);
    text_centered(CONTROLS_HELP, viewport.x / 2.0, footer_y + 5.0, 18.0, MUTED_COL);
}

fn draw_card(entry: &CatalogEntry, card: Rect, hovered: bool) {
    let accent = entry.accent_color();

    draw_rectangle(card.x + 5.0, card.y + 5.0, card.w, card.h, Color::new(0.0, 0.0, 0.0, 0.2));
    draw_rectangle(card.x, card.y, card.w, card.h, if hovered { CARD_HOVER_COL } else { CARD_COL });
    draw_rectangle(card.x, card.y, card.w, 8.0, accent);
    draw_rectangle_lines(
        card.x,
        card.y,
        card.w,
        card.h,
        2.0,
        if hovered { accent } else { CARD_BORDER_COL },
    );

    let x = card.x + 20.0;
    draw_text(&entry.title, x, card.y + 50.0, 30.0, WHITE);
    draw_text(&entry.category, x, card.y + 82.0, 20.0, accent);
    draw_text(&entry.description, x, card.y + 108.0, 20.0, DESCRIPTION_COL);
    draw_text(entry.status.label(), x, card.y + card.h - 20.0, 18.0, entry.status.color());

    if entry.is_launchable() {
        let play = GridLayout::play_rect(card);
        let fill = if hovered { accent } else { PLAY_IDLE_COL };
        draw_rectangle(play.x, play.y, play.w, play.h, fill);
        text_centered("PLAY", play.x + play.w / 2.0, play.y + play.h / 2.0 + 6.0, 18.0, WHITE);
    }
}

fn draw_scrollbar(ctx: &LauncherContext) {
    let grid = ctx.grid();
    let Some(thumb) = grid.scrollbar_thumb(ctx.catalog.entries.len(), ctx.scroll.offset()) else {
        return;
    };
    let track = grid.scrollbar_track();
    draw_rectangle(track.x, track.y, track.w, track.h, SCROLL_TRACK_COL);
    draw_rectangle(thumb.x, thumb.y, thumb.w, thumb.h, ACCENT_COL);
}

pub fn render(ctx: &mut LauncherContext, now: f64) {
    let viewport = ctx.viewport;
    let grid = ctx.grid();

    draw_gradient_background(viewport);
    draw_header(viewport);

    for (index, card) in grid.visible_cards(ctx.catalog.entries.len(), ctx.scroll.offset()) {
        draw_card(&ctx.catalog.entries[index], card, ctx.hovered == Some(index));
    }

    draw_footer(viewport);
    draw_scrollbar(ctx);

    if let Some(message) = ctx.message.active(now) {
        let dims = measure_text(&message.text, None, 20, 1.0);
        let y = viewport.y - 85.0;
        draw_rectangle(
            (viewport.x - dims.width) / 2.0 - 10.0,
            y - dims.offset_y - 6.0,
            dims.width + 20.0,
            dims.height + 12.0,
            Color::new(0.0, 0.0, 0.0, 0.7),
        );
        text_centered(&message.text, viewport.x / 2.0, y, 20.0, message.color);
    }
}
