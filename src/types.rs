use log::{debug, info, warn};
use std::path::Path;

use crate::assets::MenuAssets;
use crate::click::ClickGate;
use crate::config::SettingsStore;
use crate::display::{DisplaySurface, Resolution};
use crate::input::FrameInput;
use crate::menu::{MenuKey, MenuState, Transition};
use crate::message::MessageSlot;
use crate::process::ProcessSpawner;
use crate::ui::{self, ERROR_COL};

// ===================================
// ENUMS
// ===================================

/// What the driver loop should do after a frame's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
    /// Persist, start the game launcher and exit.
    Handoff,
}

// ===================================
// STRUCTS
// ===================================

/// All state shared by the menu screens for the length of a session.
pub struct MenuContext {
    pub store: SettingsStore,
    pub state: MenuState,
    pub gate: ClickGate,
    pub message: MessageSlot,
    /// Size everything is laid out and drawn at.
    pub display: Resolution,
    pub assets: MenuAssets,
}

impl MenuContext {
    pub fn new(store: SettingsStore, assets: MenuAssets, display: Resolution) -> Self {
        Self {
            store,
            state: MenuState::default(),
            gate: ClickGate::default(),
            message: MessageSlot::default(),
            display,
            assets,
        }
    }

    /// Runs one frame of menu logic. A quit request wins over everything else
    /// in the same frame; keys are handled before the pointer.
    pub fn update(
        &mut self,
        input: &FrameInput,
        now: f64,
        surface: &mut impl DisplaySurface,
    ) -> FrameOutcome {
        if input.quit_requested {
            return FrameOutcome::Quit;
        }

        let keys = [
            (input.back, MenuKey::Back),
            (input.show_credits, MenuKey::ShowCredits),
        ];
        let key_transition = keys
            .into_iter()
            .filter(|(pressed, _)| *pressed)
            .map(|(_, key)| self.state.on_key(key))
            .find(|t| *t != Transition::Stay);
        if let Some(transition) = key_transition {
            return self.apply(transition);
        }

        let transition = match self.state {
            MenuState::Main => ui::main_menu::update(self, input, now),
            MenuState::Options => ui::options::update(self, input, now),
            MenuState::Video => ui::video::update(self, input, now, surface),
            MenuState::Audio => ui::audio::update(self, input, now),
            MenuState::Credits => ui::credits::update(self, input, now),
        };
        self.apply(transition)
    }

    pub fn apply(&mut self, transition: Transition) -> FrameOutcome {
        match transition {
            Transition::Stay => FrameOutcome::Continue,
            Transition::Goto(next) => {
                debug!("Menu: {:?} -> {:?}", self.state, next);
                self.state = next;
                FrameOutcome::Continue
            }
            Transition::Quit => FrameOutcome::Quit,
            Transition::Handoff => FrameOutcome::Handoff,
        }
    }

    /// Saves the settings and starts `launcher`. Returns whether the launcher
    /// is running; if not, the menu stays up with an error message.
    pub fn hand_off(
        &mut self,
        spawner: &mut impl ProcessSpawner,
        launcher: &Path,
        now: f64,
    ) -> bool {
        self.store.save();
        match spawner.spawn(launcher, &[]) {
            Ok(()) => {
                info!("Handed off to {}", launcher.display());
                true
            }
            Err(e) => {
                warn!("Could not start the game launcher: {e}");
                let text = format!("Could not start the game launcher: {e}");
                self.message.show(text, ERROR_COL, now);
                false
            }
        }
    }
}
