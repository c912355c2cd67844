use macroquad::prelude::*;

use crate::components::Button;
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuState, Transition};
use crate::types::MenuContext;
use crate::ui::{
    draw_title, render_background, text_centered, Layout, BODY_FONT_SIZE, HEADING_FONT_SIZE,
    SELECTED_COL, SMALL_FONT_SIZE, TEXT_COL,
};

pub const PRODUCER: &str = "PAPU GAMES INC.";
pub const DEVELOPERS: [&str; 3] = [
    "Valentin Martinez",
    "Manuel Mañe Mazzieri",
    "Juanjo Shlamovitz Alfonso",
];
pub const SCHOOL: &str = "Ins. Ind. Luis A. Huergo";
pub const YEAR: &str = "2025";

fn back_button_rect(layout: &Layout) -> Rect {
    layout.rect(340.0, 530.0, 120.0, 50.0)
}

pub fn update(ctx: &mut MenuContext, input: &FrameInput, now: f64) -> Transition {
    let layout = Layout::new(ctx.display);
    let back = Button::new(back_button_rect(&layout), &ctx.assets.back);
    match ctx.gate.resolve_click(now, [(back.poll(input).pressed, MenuAction::Back)]) {
        Some(action) => MenuState::Credits.on_action(action),
        None => Transition::Stay,
    }
}

pub fn draw(ctx: &MenuContext, input: &FrameInput, layout: &Layout) {
    let heading = layout.font(HEADING_FONT_SIZE);
    let body = layout.font(BODY_FONT_SIZE);
    let small = layout.font(SMALL_FONT_SIZE);
    let line_height = layout.y(32.0);

    render_background(&ctx.assets.options_background, layout);
    draw_title(MenuState::Credits.title(), layout);

    let mut y = layout.y(130.0);
    text_centered("Produced by", y, small, SELECTED_COL, layout);
    y += line_height;
    text_centered(PRODUCER, y, heading, TEXT_COL, layout);

    y += line_height * 1.5;
    text_centered("Developers", y, small, SELECTED_COL, layout);
    for name in DEVELOPERS {
        y += line_height;
        text_centered(name, y, body, TEXT_COL, layout);
    }

    let logo_w = layout.x(160.0);
    let logo_h = layout.y(70.0);
    let logo = Rect::new((layout.width() - logo_w) / 2.0, y + layout.y(15.0), logo_w, logo_h);
    ctx.assets.logo.draw(logo, WHITE);

    y = logo.bottom() + line_height;
    text_centered(&format!("{SCHOOL} - {YEAR}"), y, small, TEXT_COL, layout);

    Button::new(back_button_rect(layout), &ctx.assets.back).draw(input);
}
