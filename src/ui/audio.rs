use macroquad::prelude::*;

use crate::components::{Button, Slider, TextOption};
use crate::config::Settings;
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuState, Transition};
use crate::types::MenuContext;
use crate::ui::{
    draw_title, render_background, text_with_shadow, Layout, BODY_FONT_SIZE, INFO_COL,
    SMALL_FONT_SIZE, TEXT_COL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Master,
    Sfx,
    Music,
}

impl Channel {
    const ALL: [Channel; 3] = [Channel::Master, Channel::Sfx, Channel::Music];

    fn label(self) -> &'static str {
        match self {
            Channel::Master => "Master volume",
            Channel::Sfx => "SFX volume",
            Channel::Music => "Music volume",
        }
    }

    fn row_y(self) -> f32 {
        match self {
            Channel::Master => 150.0,
            Channel::Sfx => 250.0,
            Channel::Music => 350.0,
        }
    }

    fn volume(self, settings: &mut Settings) -> &mut u8 {
        match self {
            Channel::Master => &mut settings.master_volume,
            Channel::Sfx => &mut settings.sfx_volume,
            Channel::Music => &mut settings.music_volume,
        }
    }

    fn slider(self, layout: &Layout) -> Slider {
        Slider::new(layout.rect(350.0, self.row_y() + 15.0, 300.0, 25.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioAction {
    TestSfx,
    TestMusic,
    Back,
}

fn buttons(layout: &Layout) -> [(Rect, AudioAction); 3] {
    [
        (layout.rect(300.0, 450.0, 100.0, 30.0), AudioAction::TestSfx),
        (layout.rect(420.0, 450.0, 100.0, 30.0), AudioAction::TestMusic),
        (layout.rect(340.0, 520.0, 120.0, 50.0), AudioAction::Back),
    ]
}

/// Sliders follow the pointer every frame it is held; only the buttons go
/// through the click gate.
pub fn update(ctx: &mut MenuContext, input: &FrameInput, now: f64) -> Transition {
    let layout = Layout::new(ctx.display);

    for channel in Channel::ALL {
        if let Some(value) = channel.slider(&layout).drag(input) {
            *channel.volume(&mut ctx.store.settings) = value;
        }
    }

    let pressed = buttons(&layout)
        .map(|(rect, action)| (input.pointer_down && rect.contains(input.pointer), action));
    let settings = &ctx.store.settings;
    match ctx.gate.resolve_click(now, pressed) {
        Some(AudioAction::TestSfx) => {
            let effective =
                u32::from(settings.sfx_volume) * u32::from(settings.master_volume) / 100;
            ctx.message
                .show(format!("Sound effect test at {effective}% volume"), INFO_COL, now);
            Transition::Stay
        }
        Some(AudioAction::TestMusic) => {
            let effective =
                u32::from(settings.music_volume) * u32::from(settings.master_volume) / 100;
            ctx.message
                .show(format!("Music test at {effective}% volume"), INFO_COL, now);
            Transition::Stay
        }
        Some(AudioAction::Back) => {
            ctx.store.save();
            MenuState::Audio.on_action(MenuAction::Back)
        }
        None => Transition::Stay,
    }
}

pub fn draw(ctx: &MenuContext, input: &FrameInput, layout: &Layout) {
    let mut settings = ctx.store.settings.clone();
    let body = layout.font(BODY_FONT_SIZE);
    let small = layout.font(SMALL_FONT_SIZE);

    render_background(&ctx.assets.options_background, layout);
    draw_title(MenuState::Audio.title(), layout);

    for channel in Channel::ALL {
        text_with_shadow(
            channel.label(),
            layout.x(100.0),
            layout.y(channel.row_y() + 35.0),
            body,
            TEXT_COL,
        );
        channel.slider(layout).draw(*channel.volume(&mut settings), small);
    }

    text_with_shadow("Test:", layout.x(100.0), layout.y(472.0), body, TEXT_COL);
    let [(sfx, _), (music, _), (back, _)] = buttons(layout);
    TextOption::new(sfx, "SFX").draw(input, false, small);
    TextOption::new(music, "MUSIC").draw(input, false, small);
    Button::new(back, &ctx.assets.back).draw(input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MenuAssets;
    use crate::config::SettingsStore;
    use crate::display::Resolution;
    use std::path::Path;
    use tempfile::tempdir;

    fn context(dir: &Path) -> MenuContext {
        let mut ctx = MenuContext::new(
            SettingsStore::open(dir.join("settings.toml")),
            MenuAssets::placeholders(),
            Resolution::default(),
        );
        ctx.state = MenuState::Audio;
        ctx
    }

    #[test]
    fn dragging_sets_the_matching_volume() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());

        update(&mut ctx, &FrameInput::holding(vec2(500.0, 277.0)), 0.0);
        assert_eq!(ctx.store.settings.sfx_volume, 50);
        assert_eq!(ctx.store.settings.master_volume, 70);

        // beyond the bar end but inside the grab margin
        update(&mut ctx, &FrameInput::holding(vec2(658.0, 170.0)), 0.01);
        assert_eq!(ctx.store.settings.master_volume, 100);
    }

    #[test]
    fn sliders_ignore_the_click_cooldown() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());

        for (i, x) in [400.0, 410.0, 420.0].into_iter().enumerate() {
            update(&mut ctx, &FrameInput::holding(vec2(x, 380.0)), i as f64 * 0.01);
        }
        assert_eq!(ctx.store.settings.music_volume, 23);
    }

    #[test]
    fn test_buttons_show_a_message_once_per_cooldown() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let click = FrameInput::click(vec2(350.0, 465.0));

        update(&mut ctx, &click, 0.0);
        // 80% of 70%
        assert_eq!(ctx.message.active(0.0).unwrap().text, "Sound effect test at 56% volume");

        update(&mut ctx, &FrameInput::click(vec2(470.0, 465.0)), 0.1);
        assert!(ctx.message.active(0.1).unwrap().text.starts_with("Sound effect"));
    }

    #[test]
    fn back_saves_volumes() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.store.settings.music_volume = 0;

        let t = update(&mut ctx, &FrameInput::click(vec2(400.0, 540.0)), 0.0);

        assert_eq!(t, Transition::Goto(MenuState::Options));
        let reopened = SettingsStore::open(dir.path().join("settings.toml"));
        assert_eq!(reopened.settings.music_volume, 0);
    }
}
