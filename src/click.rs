/// Global cooldown shared by every clickable widget. Widgets only report
/// "pressed this frame"; the gate decides whether that frame's press counts.
#[derive(Debug, Clone)]
pub struct ClickGate {
    cooldown: f64,
    last_accept: Option<f64>,
}

impl ClickGate {
    pub const DEFAULT_COOLDOWN: f64 = 0.2;

    pub fn new(cooldown: f64) -> Self {
        Self {
            cooldown,
            last_accept: None,
        }
    }

    pub fn cooldown(&self) -> f64 {
        self.cooldown
    }

    /// Accepts a click iff more than `cooldown` seconds passed since the last
    /// accepted one. The first click is always accepted.
    pub fn try_accept_click(&mut self, now: f64) -> bool {
        let open = match self.last_accept {
            Some(last) => now - last > self.cooldown,
            None => true,
        };
        if open {
            self.last_accept = Some(now);
        }
        open
    }

    /// Makes the single accept/reject decision for a frame. `pressed` is the
    /// frame's widgets in priority order; the first one pressed fires if the
    /// gate is open. The gate is not touched when nothing was pressed.
    pub fn resolve_click<T>(
        &mut self,
        now: f64,
        pressed: impl IntoIterator<Item = (bool, T)>,
    ) -> Option<T> {
        let hit = pressed.into_iter().find_map(|(down, id)| down.then_some(id))?;
        self.try_accept_click(now).then_some(hit)
    }
}

impl Default for ClickGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COOLDOWN)
    }
}
