/// Screens of the front-end menu. The session starts on `Main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Main,
    Options,
    Video,
    Audio,
    Credits,
}

/// A widget firing on one of the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Options,
    Exit,
    Video,
    Audio,
    Credits,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// The configured pause key, or the controller's east button.
    Back,
    ShowCredits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(MenuState),
    Quit,
    /// Hand over to the game launcher.
    Handoff,
}

impl MenuState {
    pub const ALL: [MenuState; 5] = [
        MenuState::Main,
        MenuState::Options,
        MenuState::Video,
        MenuState::Audio,
        MenuState::Credits,
    ];

    /// Where `Back` leads. `Main` has nowhere to go back to.
    pub fn parent(self) -> Option<MenuState> {
        match self {
            MenuState::Main => None,
            MenuState::Options => Some(MenuState::Main),
            MenuState::Video | MenuState::Audio | MenuState::Credits => Some(MenuState::Options),
        }
    }

    /// Actions a screen does not offer leave it where it is.
    pub fn on_action(self, action: MenuAction) -> Transition {
        use MenuAction as A;
        use MenuState as S;
        match (self, action) {
            (S::Main, A::Play) => Transition::Handoff,
            (S::Main, A::Options) => Transition::Goto(S::Options),
            (S::Main, A::Exit) => Transition::Quit,
            (S::Options, A::Video) => Transition::Goto(S::Video),
            (S::Options, A::Audio) => Transition::Goto(S::Audio),
            (S::Options, A::Credits) => Transition::Goto(S::Credits),
            (_, A::Back) => self.parent().map_or(Transition::Stay, Transition::Goto),
            _ => Transition::Stay,
        }
    }

    pub fn on_key(self, key: MenuKey) -> Transition {
        match (self, key) {
            (MenuState::Main, MenuKey::ShowCredits) => Transition::Goto(MenuState::Credits),
            (MenuState::Main, MenuKey::Back) => Transition::Quit,
            (_, MenuKey::Back) => self.parent().map_or(Transition::Stay, Transition::Goto),
            (_, MenuKey::ShowCredits) => Transition::Stay,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MenuState::Main => "MINIGAMES",
            MenuState::Options => "OPTIONS",
            MenuState::Video => "VIDEO SETTINGS",
            MenuState::Audio => "AUDIO SETTINGS",
            MenuState::Credits => "CREDITS",
        }
    }
}
