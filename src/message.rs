use macroquad::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub color: Color,
    pub expires_at: f64,
}

/// Holds at most one transient message. Setting a new one replaces the old
/// one regardless of how long it had left.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<StatusMessage>,
}

impl MessageSlot {
    pub const DEFAULT_DURATION: f64 = 2.0;

    pub fn show(&mut self, text: impl Into<String>, color: Color, now: f64) {
        self.show_for(text, color, now, Self::DEFAULT_DURATION);
    }

    pub fn show_for(&mut self, text: impl Into<String>, color: Color, now: f64, duration: f64) {
        self.current = Some(StatusMessage {
            text: text.into(),
            color,
            expires_at: now + duration,
        });
    }

    /// The message to render this frame. Clears it once expired.
    pub fn active(&mut self, now: f64) -> Option<&StatusMessage> {
        if self.current.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.current = None;
        }
        self.current.as_ref()
    }
}
