/// Fixed-window rate limiter driven by a caller-supplied clock.
#[derive(Clone, Copy, Debug)]
pub struct Cooldown {
    window_ms: f64,
    open_until: Option<f64>,
}

impl Cooldown {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            open_until: None,
        }
    }

    /// Succeeds when no window is open at `now_ms`, then opens a new one.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.open_until {
            Some(until) if now_ms < until => false,
            _ => {
                self.open_until = Some(now_ms + self.window_ms);
                true
            }
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }
}
