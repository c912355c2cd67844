use log::info;
use macroquad::prelude::*;

use minigames_menu::catalog::Catalog;
use minigames_menu::config::get_user_data_dir;
use minigames_menu::input::InputState;
use minigames_menu::launcher::{LauncherContext, LauncherOutcome, DEFAULT_VIEWPORT};
use minigames_menu::process::DetachedSpawner;
use minigames_menu::utils::{base_dir, sibling_executable, FrameLimiter, MENU_BINARY};
use minigames_menu::{init_logging, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Minigames - Pick a game".to_owned(),
        window_resizable: true,
        window_width: DEFAULT_VIEWPORT.x as i32,
        window_height: DEFAULT_VIEWPORT.y as i32,
        high_dpi: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    prevent_quit();

    let data_dir = get_user_data_dir();
    let catalog = Catalog::load_or_builtin(data_dir.as_deref(), &base_dir());
    info!("Game launcher started, {} games:", catalog.entries.len());
    for (i, entry) in catalog.entries.iter().enumerate() {
        info!("  {}. {} ({})", i + 1, entry.title, entry.status.label());
    }

    let mut ctx = LauncherContext::new(catalog, vec2(screen_width(), screen_height()));
    let mut input_state = InputState::new("ESCAPE");
    let mut spawner = DetachedSpawner;
    let mut limiter = FrameLimiter::new();

    loop {
        let input = input_state.poll();
        let now = get_time();
        let viewport = vec2(screen_width(), screen_height());

        match ctx.update(&input, viewport, now, &mut spawner) {
            LauncherOutcome::Continue => {}
            LauncherOutcome::Quit => break,
            LauncherOutcome::ReturnToMenu => {
                info!("Returning to the main menu");
                if ctx.return_to_menu(&mut spawner, &sibling_executable(MENU_BINARY), now) {
                    break;
                }
            }
        }

        ui::launcher::render(&mut ctx, now);

        limiter.wait();
        next_frame().await;
    }

    info!("Closing game launcher");
}
