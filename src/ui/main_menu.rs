use crate::assets::MenuAssets;
use crate::components::Button;
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuState, Transition};
use crate::types::MenuContext;
use crate::ui::{draw_title, render_background, text_centered, Layout, SMALL_FONT_SIZE, TEXT_COL};

pub const BUTTON_WIDTH: f32 = 150.0;
pub const BUTTON_HEIGHT: f32 = 60.0;

/// Buttons in hit-test priority order.
fn buttons<'a>(assets: &'a MenuAssets, layout: &Layout) -> [(Button<'a>, MenuAction); 3] {
    [
        (
            Button::new(layout.rect(130.0, 125.0, BUTTON_WIDTH, BUTTON_HEIGHT), &assets.play),
            MenuAction::Play,
        ),
        (
            Button::new(layout.rect(450.0, 125.0, BUTTON_WIDTH, BUTTON_HEIGHT), &assets.options),
            MenuAction::Options,
        ),
        (
            Button::new(layout.rect(300.0, 375.0, BUTTON_WIDTH, BUTTON_HEIGHT), &assets.exit),
            MenuAction::Exit,
        ),
    ]
}

pub fn update(ctx: &mut MenuContext, input: &FrameInput, now: f64) -> Transition {
    let layout = Layout::new(ctx.display);
    let buttons = buttons(&ctx.assets, &layout);
    let pressed = buttons
        .iter()
        .map(|(button, action)| (button.poll(input).pressed, *action));
    let fired = ctx.gate.resolve_click(now, pressed);

    match fired {
        Some(action) => MenuState::Main.on_action(action),
        None => Transition::Stay,
    }
}

pub fn draw(ctx: &MenuContext, input: &FrameInput, layout: &Layout) {
    render_background(&ctx.assets.main_background, layout);
    draw_title(MenuState::Main.title(), layout);

    for (button, _) in buttons(&ctx.assets, layout) {
        button.draw(input);
    }

    text_centered(
        "Press C for credits",
        layout.height() - layout.y(40.0),
        layout.font(SMALL_FONT_SIZE),
        TEXT_COL,
        layout,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsStore;
    use crate::display::Resolution;
    use macroquad::math::vec2;
    use tempfile::tempdir;

    fn context(dir: &std::path::Path) -> MenuContext {
        MenuContext::new(
            SettingsStore::open(dir.join("settings.toml")),
            MenuAssets::placeholders(),
            Resolution::default(),
        )
    }

    #[test]
    fn buttons_fire_their_transitions() {
        let dir = tempdir().unwrap();

        let mut ctx = context(dir.path());
        assert_eq!(
            update(&mut ctx, &FrameInput::click(vec2(200.0, 150.0)), 0.0),
            Transition::Handoff
        );

        let mut ctx = context(dir.path());
        assert_eq!(
            update(&mut ctx, &FrameInput::click(vec2(500.0, 150.0)), 0.0),
            Transition::Goto(MenuState::Options)
        );

        let mut ctx = context(dir.path());
        assert_eq!(update(&mut ctx, &FrameInput::click(vec2(375.0, 400.0)), 0.0), Transition::Quit);
    }

    #[test]
    fn held_press_inside_cooldown_is_ignored() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let held = FrameInput::holding(vec2(500.0, 150.0));

        assert_ne!(update(&mut ctx, &held, 1.0), Transition::Stay);
        assert_eq!(update(&mut ctx, &held, 1.1), Transition::Stay);
    }

    #[test]
    fn buttons_follow_the_display_size() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.display = Resolution::new(1600, 1200);

        // Exit sits at (600, 750) once doubled
        assert_eq!(update(&mut ctx, &FrameInput::click(vec2(650.0, 780.0)), 0.0), Transition::Quit);
    }

    #[test]
    fn clicks_on_empty_space_do_nothing() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        assert_eq!(update(&mut ctx, &FrameInput::click(vec2(10.0, 590.0)), 0.0), Transition::Stay);
    }
}
