use crate::assets::MenuAssets;
use crate::components::Button;
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuState, Transition};
use crate::types::MenuContext;
use crate::ui::{draw_title, render_background, Layout};

const BUTTON_WIDTH: f32 = 120.0;
const BUTTON_HEIGHT: f32 = 50.0;

fn buttons<'a>(assets: &'a MenuAssets, layout: &Layout) -> [(Button<'a>, MenuAction); 4] {
    let at = |x: f32, y: f32| layout.rect(x, y, BUTTON_WIDTH, BUTTON_HEIGHT);
    [
        (Button::new(at(100.0, 120.0), &assets.video), MenuAction::Video),
        (Button::new(at(400.0, 120.0), &assets.audio), MenuAction::Audio),
        (Button::new(at(100.0, 300.0), &assets.credits), MenuAction::Credits),
        (Button::new(at(400.0, 300.0), &assets.back), MenuAction::Back),
    ]
}

pub fn update(ctx: &mut MenuContext, input: &FrameInput, now: f64) -> Transition {
    let layout = Layout::new(ctx.display);
    let buttons = buttons(&ctx.assets, &layout);
    let pressed = buttons
        .iter()
        .map(|(button, action)| (button.poll(input).pressed, *action));
    ctx.gate
        .resolve_click(now, pressed)
        .map_or(Transition::Stay, |action| MenuState::Options.on_action(action))
}

pub fn draw(ctx: &MenuContext, input: &FrameInput, layout: &Layout) {
    render_background(&ctx.assets.options_background, layout);
    draw_title(MenuState::Options.title(), layout);
    for (button, _) in buttons(&ctx.assets, layout) {
        button.draw(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsStore;
    use crate::display::Resolution;
    use macroquad::math::vec2;
    use tempfile::tempdir;

    #[test]
    fn each_button_opens_its_screen() {
        let dir = tempdir().unwrap();
        let cases = [
            (vec2(150.0, 140.0), Transition::Goto(MenuState::Video)),
            (vec2(450.0, 140.0), Transition::Goto(MenuState::Audio)),
            (vec2(150.0, 320.0), Transition::Goto(MenuState::Credits)),
            (vec2(450.0, 320.0), Transition::Goto(MenuState::Main)),
        ];
        for (pointer, expected) in cases {
            let mut ctx = MenuContext::new(
                SettingsStore::open(dir.path().join("settings.toml")),
                MenuAssets::placeholders(),
                Resolution::default(),
            );
            ctx.state = MenuState::Options;
            assert_eq!(update(&mut ctx, &FrameInput::click(pointer), 0.0), expected);
        }
    }
}
