use log::{info, warn};
use macroquad::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::AssetLoadError;
use crate::utils::{base_dir, trim_extension};

/// Overrides the directory the menu images are read from.
pub const ASSET_DIR_ENV: &str = "MINIGAMES_ASSET_DIR";

const ASSET_SUBDIR: &str = "image";

/// Where the menu images live: `$MINIGAMES_ASSET_DIR`, else `image/` next to
/// the executable.
pub fn asset_dir() -> PathBuf {
    match std::env::var_os(ASSET_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => base_dir().join(ASSET_SUBDIR),
    }
}

/// A loaded image, or the labelled box drawn in its place when the file could
/// not be read.
#[derive(Clone)]
pub enum Visual {
    Texture(Texture2D),
    Placeholder { label: String },
}

impl Visual {
    /// Placeholder labelled with the file stem, e.g. `play` for `play.png`.
    pub fn placeholder(file_name: &str) -> Self {
        Visual::Placeholder {
            label: trim_extension(file_name).to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Visual::Placeholder { .. })
    }

    /// Stretches the visual over `rect`.
    pub fn draw(&self, rect: Rect, tint: Color) {
        match self {
            Visual::Texture(texture) => {
                draw_texture_ex(
                    texture,
                    rect.x,
                    rect.y,
                    tint,
                    DrawTextureParams {
                        dest_size: Some(vec2(rect.w, rect.h)),
                        ..Default::default()
                    },
                );
            }
            Visual::Placeholder { label } => {
                let fill = Color::new(0.39, 0.39, 0.39, tint.a);
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
                let font_size = (rect.h * 0.4).clamp(12.0, 32.0) as u16;
                let dims = measure_text(label, None, font_size, 1.0);
                draw_text(
                    label,
                    rect.x + (rect.w - dims.width) / 2.0,
                    rect.y + (rect.h + dims.offset_y) / 2.0,
                    font_size as f32,
                    WHITE,
                );
            }
        }
    }
}

async fn load_texture_file(dir: &Path, file_name: &str) -> Result<Texture2D, AssetLoadError> {
    let path = dir.join(file_name);
    let path_str = path.to_string_lossy();
    let texture = load_texture(&path_str).await.map_err(|e| AssetLoadError {
        name: path_str.to_string(),
        reason: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

/// Loads `file_name` from `dir`, substituting a placeholder on any failure.
pub async fn load_visual(dir: &Path, file_name: &str) -> Visual {
    match load_texture_file(dir, file_name).await {
        Ok(texture) => Visual::Texture(texture),
        Err(e) => {
            warn!("{e}; drawing a placeholder instead");
            Visual::placeholder(file_name)
        }
    }
}

/// Every image the menu screens draw.
#[derive(Clone)]
pub struct MenuAssets {
    pub play: Visual,
    pub options: Visual,
    pub exit: Visual,
    pub video: Visual,
    pub audio: Visual,
    pub credits: Visual,
    pub back: Visual,
    pub logo: Visual,
    pub main_background: Visual,
    pub options_background: Visual,
}

impl MenuAssets {
    pub const FILES: [&'static str; 10] = [
        "play.png",
        "options.png",
        "exit.png",
        "video.png",
        "audio.png",
        "credits.png",
        "back.png",
        "logo.png",
        "fondo_menu.png",
        "fondo_menu_option.png",
    ];

    pub async fn load(dir: &Path) -> Self {
        info!("Loading menu images from {}", dir.display());
        let [play, options, exit, video, audio, credits, back, logo, main_bg, options_bg] =
            Self::FILES;
        let (
            play,
            options,
            exit,
            video,
            audio,
            credits,
            back,
            logo,
            main_background,
            options_background,
        ) = futures::join!(
            load_visual(dir, play),
            load_visual(dir, options),
            load_visual(dir, exit),
            load_visual(dir, video),
            load_visual(dir, audio),
            load_visual(dir, credits),
            load_visual(dir, back),
            load_visual(dir, logo),
            load_visual(dir, main_bg),
            load_visual(dir, options_bg),
        );
        Self {
            play,
            options,
            exit,
            video,
            audio,
            credits,
            back,
            logo,
            main_background,
            options_background,
        }
    }

    /// All placeholders; needs no files and no graphics context.
    pub fn placeholders() -> Self {
        let [play, options, exit, video, audio, credits, back, logo, main_bg, options_bg] =
            Self::FILES;
        Self {
            play: Visual::placeholder(play),
            options: Visual::placeholder(options),
            exit: Visual::placeholder(exit),
            video: Visual::placeholder(video),
            audio: Visual::placeholder(audio),
            credits: Visual::placeholder(credits),
            back: Visual::placeholder(back),
            logo: Visual::placeholder(logo),
            main_background: Visual::placeholder(main_bg),
            options_background: Visual::placeholder(options_bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_labelled_with_file_stem() {
        match Visual::placeholder("fondo_menu.png") {
            Visual::Placeholder { label } => assert_eq!(label, "fondo_menu"),
            Visual::Texture(_) => panic!("expected a placeholder"),
        }
    }

    #[test]
    fn placeholder_set_covers_every_file() {
        let assets = MenuAssets::placeholders();
        for visual in [
            &assets.play,
            &assets.options,
            &assets.exit,
            &assets.video,
            &assets.audio,
            &assets.credits,
            &assets.back,
            &assets.logo,
            &assets.main_background,
            &assets.options_background,
        ] {
            assert!(visual.is_placeholder());
        }
    }
}
