use log::warn;
use macroquad::prelude::*;

use crate::components::{Button, TextOption};
use crate::display::{apply_display_mode, DisplaySurface};
use crate::input::FrameInput;
use crate::menu::{MenuAction, MenuState, Transition};
use crate::types::MenuContext;
use crate::ui::{
    draw_title, render_background, text_with_shadow, Layout, BODY_FONT_SIZE, ERROR_COL, INFO_COL,
    SMALL_FONT_SIZE, SUCCESS_COL, TEXT_COL,
};

pub const RESOLUTIONS: &[&str] = &["800x600", "1024x768", "1280x720", "1200x650", "1920x1080"];

const OPTIONS_PER_ROW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VideoAction {
    SelectResolution(usize),
    Apply,
    ToggleFullscreen,
    ToggleVsync,
    Back,
}

struct VideoLayout {
    resolutions: Vec<Rect>,
    apply: Rect,
    fullscreen: Rect,
    vsync: Rect,
    back: Rect,
}

impl VideoLayout {
    fn new(layout: &Layout) -> Self {
        let resolutions = (0..RESOLUTIONS.len())
            .map(|i| {
                let x = 300.0 + (i % OPTIONS_PER_ROW) as f32 * 180.0;
                let y = 150.0 + (i / OPTIONS_PER_ROW) as f32 * 40.0;
                layout.rect(x, y, 150.0, 30.0)
            })
            .collect();
        Self {
            resolutions,
            apply: layout.rect(100.0, 250.0, 120.0, 35.0),
            fullscreen: layout.rect(350.0, 310.0, 200.0, 30.0),
            vsync: layout.rect(250.0, 390.0, 200.0, 30.0),
            back: layout.rect(340.0, 520.0, 120.0, 50.0),
        }
    }

    /// Every clickable rect with its action, in hit-test priority order.
    fn targets(&self) -> Vec<(Rect, VideoAction)> {
        let mut targets: Vec<(Rect, VideoAction)> = self
            .resolutions
            .iter()
            .enumerate()
            .map(|(i, rect)| (*rect, VideoAction::SelectResolution(i)))
            .collect();
        targets.push((self.apply, VideoAction::Apply));
        targets.push((self.fullscreen, VideoAction::ToggleFullscreen));
        targets.push((self.vsync, VideoAction::ToggleVsync));
        targets.push((self.back, VideoAction::Back));
        targets
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}

pub fn update(
    ctx: &mut MenuContext,
    input: &FrameInput,
    now: f64,
    surface: &mut impl DisplaySurface,
) -> Transition {
    let layout = VideoLayout::new(&Layout::new(ctx.display));
    let pressed = layout
        .targets()
        .into_iter()
        .map(|(rect, action)| (input.pointer_down && rect.contains(input.pointer), action));
    let Some(action) = ctx.gate.resolve_click(now, pressed) else {
        return Transition::Stay;
    };

    let settings = &mut ctx.store.settings;
    match action {
        VideoAction::SelectResolution(i) => {
            settings.resolution = RESOLUTIONS[i].to_string();
            ctx.message
                .show(format!("Resolution selected: {}", RESOLUTIONS[i]), INFO_COL, now);
        }
        VideoAction::Apply => match apply_display_mode(settings, surface) {
            Ok(resolution) => {
                ctx.display = resolution;
                ctx.store.save();
                ctx.message
                    .show(format!("Resolution applied: {resolution}"), SUCCESS_COL, now);
            }
            Err(e) => {
                warn!("Could not apply display mode: {e}");
                ctx.message.show(format!("Could not apply: {e}"), ERROR_COL, now);
            }
        },
        VideoAction::ToggleFullscreen => {
            settings.fullscreen = !settings.fullscreen;
            let text = format!("Fullscreen {}, press Apply", on_off(settings.fullscreen));
            ctx.message.show(text, INFO_COL, now);
        }
        VideoAction::ToggleVsync => {
            settings.vsync = !settings.vsync;
            ctx.store.save();
            ctx.message.show("RESTART REQUIRED TO APPLY VSYNC", INFO_COL, now);
        }
        VideoAction::Back => return MenuState::Video.on_action(MenuAction::Back),
    }
    Transition::Stay
}

pub fn draw(ctx: &MenuContext, input: &FrameInput, layout: &Layout) {
    let settings = &ctx.store.settings;
    let video = VideoLayout::new(layout);
    let body = layout.font(BODY_FONT_SIZE);
    let small = layout.font(SMALL_FONT_SIZE);

    render_background(&ctx.assets.options_background, layout);
    draw_title(MenuState::Video.title(), layout);

    text_with_shadow("Resolution:", layout.x(100.0), layout.y(170.0), body, TEXT_COL);
    for (rect, name) in video.resolutions.iter().zip(RESOLUTIONS) {
        TextOption::new(*rect, name).draw(input, settings.resolution == *name, small);
    }

    let apply = video.apply;
    let apply_hovered = apply.contains(input.pointer);
    draw_rectangle(
        apply.x,
        apply.y,
        apply.w,
        apply.h,
        if apply_hovered { INFO_COL } else { Color::new(0.2, 0.4, 0.6, 1.0) },
    );
    draw_rectangle_lines(apply.x, apply.y, apply.w, apply.h, 2.0, WHITE);
    text_with_shadow("APPLY", apply.x + layout.x(25.0), apply.y + apply.h * 0.7, small, TEXT_COL);

    text_with_shadow("Fullscreen:", layout.x(100.0), layout.y(330.0), body, TEXT_COL);
    TextOption::new(video.fullscreen, on_off(settings.fullscreen)).draw(
        input,
        settings.fullscreen,
        small,
    );

    text_with_shadow("VSync:", layout.x(100.0), layout.y(410.0), body, TEXT_COL);
    TextOption::new(video.vsync, on_off(settings.vsync)).draw(input, settings.vsync, small);

    Button::new(video.back, &ctx.assets.back).draw(input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MenuAssets;
    use crate::config::SettingsStore;
    use crate::display::tests::FakeSurface;
    use crate::display::Resolution;
    use std::path::Path;
    use tempfile::tempdir;

    fn context(dir: &Path) -> MenuContext {
        let mut ctx = MenuContext::new(
            SettingsStore::open(dir.join("settings.toml")),
            MenuAssets::placeholders(),
            Resolution::default(),
        );
        ctx.state = MenuState::Video;
        ctx
    }

    #[test]
    fn selecting_a_resolution_does_not_apply_it() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let mut surface = FakeSurface::default();

        // 1280x720 is the third option on the first row
        let t = update(&mut ctx, &FrameInput::click(vec2(700.0, 165.0)), 0.0, &mut surface);

        assert_eq!(t, Transition::Stay);
        assert_eq!(ctx.store.settings.resolution, "1280x720");
        assert!(surface.modes.is_empty());
        assert_eq!(ctx.display, Resolution::new(800, 600));
        assert!(ctx.message.active(0.5).unwrap().text.contains("1280x720"));
    }

    #[test]
    fn apply_switches_mode_and_persists() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let mut surface = FakeSurface::default();

        update(&mut ctx, &FrameInput::click(vec2(350.0, 205.0)), 0.0, &mut surface);
        assert_eq!(ctx.store.settings.resolution, "1200x650");
        update(&mut ctx, &FrameInput::click(vec2(150.0, 265.0)), 1.0, &mut surface);

        assert_eq!(surface.modes, vec![(Resolution::new(1200, 650), false)]);
        assert_eq!(ctx.display, Resolution::new(1200, 650));
        let reopened = SettingsStore::open(dir.path().join("settings.toml"));
        assert_eq!(reopened.settings.resolution, "1200x650");
    }

    #[test]
    fn failed_apply_keeps_the_old_mode() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        ctx.store.settings.resolution = "1920x1080".to_string();
        let mut surface = FakeSurface {
            fail: true,
            ..Default::default()
        };

        update(&mut ctx, &FrameInput::click(vec2(150.0, 265.0)), 0.0, &mut surface);

        assert_eq!(ctx.display, Resolution::new(800, 600));
        assert_eq!(ctx.message.active(0.1).unwrap().color, ERROR_COL);
    }

    #[test]
    fn toggles_flip_their_flags() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let mut surface = FakeSurface::default();

        update(&mut ctx, &FrameInput::click(vec2(400.0, 320.0)), 0.0, &mut surface);
        assert!(ctx.store.settings.fullscreen);

        update(&mut ctx, &FrameInput::click(vec2(300.0, 400.0)), 1.0, &mut surface);
        assert!(!ctx.store.settings.vsync);
        assert!(ctx.message.active(1.1).unwrap().text.contains("RESTART"));
        assert!(surface.modes.is_empty());
    }

    #[test]
    fn back_returns_to_options() {
        let dir = tempdir().unwrap();
        let mut ctx = context(dir.path());
        let back = FrameInput::click(vec2(400.0, 540.0));
        let t = update(&mut ctx, &back, 0.0, &mut FakeSurface::default());
        assert_eq!(t, Transition::Goto(MenuState::Options));
    }
}
