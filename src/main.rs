use log::info;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;

use minigames_menu::assets::{asset_dir, MenuAssets};
use minigames_menu::config::{peek_settings, SettingsStore};
use minigames_menu::display::{Resolution, WindowSurface};
use minigames_menu::input::InputState;
use minigames_menu::process::DetachedSpawner;
use minigames_menu::types::{FrameOutcome, MenuContext};
use minigames_menu::utils::{sibling_executable, FrameLimiter, LAUNCHER_BINARY};
use minigames_menu::{init_logging, ui, VERSION_NUMBER};

/// The window opens windowed at the persisted resolution; vsync can only be
/// chosen here, which is why toggling it needs a restart.
fn window_conf() -> Conf {
    let settings = peek_settings();
    let resolution: Resolution = settings.resolution.parse().unwrap_or_default();
    let (window_width, window_height) = resolution.window_size();

    Conf {
        window_title: "Minigames".to_owned(),
        window_resizable: false,
        window_width,
        window_height,
        high_dpi: false,
        fullscreen: false,
        platform: Platform {
            swap_interval: Some(if settings.vsync { 1 } else { 0 }),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("Minigames menu v{VERSION_NUMBER}");
    prevent_quit();

    let store = SettingsStore::open_default();
    let mut input_state = InputState::new(&store.settings.pause_key);
    let assets = MenuAssets::load(&asset_dir()).await;
    let display = Resolution::new(screen_width() as u32, screen_height() as u32);
    let mut ctx = MenuContext::new(store, assets, display);

    let mut surface = WindowSurface;
    let mut spawner = DetachedSpawner;
    let launcher = sibling_executable(LAUNCHER_BINARY);
    let mut limiter = FrameLimiter::new();

    loop {
        let input = input_state.poll();
        let now = get_time();
        ctx.display = Resolution::new(screen_width() as u32, screen_height() as u32);

        match ctx.update(&input, now, &mut surface) {
            FrameOutcome::Continue => {}
            FrameOutcome::Quit => break,
            FrameOutcome::Handoff => {
                if ctx.hand_off(&mut spawner, &launcher, now) {
                    return;
                }
            }
        }

        ui::render_menu(&mut ctx, &input, now);

        limiter.wait();
        next_frame().await;
    }

    ctx.store.save();
    info!("Menu closed");
}
