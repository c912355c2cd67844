use macroquad::color::Color;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const MENU_BINARY: &str = "minigames-menu";
pub const LAUNCHER_BINARY: &str = "minigames-launcher";

/// Removes the file extension from a filename string slice.
pub fn trim_extension(filename: &str) -> &str {
    if let Some(dot_index) = filename.rfind('.') {
        &filename[..dot_index]
    } else {
        filename
    }
}

pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Directory the front-end ships from: assets and the sibling binaries live
/// here. With the `dev` feature it is the working directory instead.
pub fn base_dir() -> PathBuf {
    if cfg!(feature = "dev") {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of another binary from this package, next to the running one.
pub fn sibling_executable(name: &str) -> PathBuf {
    base_dir().join(format!("{name}{}", std::env::consts::EXE_SUFFIX))
}

/// Sleeps away whatever is left of the frame budget so the loop runs at a
/// fixed rate even when vsync is off.
pub struct FrameLimiter {
    frame_time: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub const TARGET_FPS: u32 = 60;

    pub fn new() -> Self {
        Self {
            frame_time: Duration::from_secs(1) / Self::TARGET_FPS,
            frame_start: Instant::now(),
        }
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_time {
            std::thread::sleep(self.frame_time - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}
