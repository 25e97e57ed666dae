/// Coalesces bursts of events into at most one queued frame.
///
/// Each scroll-driven effect owns one of these instead of sharing a
/// module-level "ticking" flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller must queue a frame; `false` if one is already queued.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the queued frame before doing the update.
    #[inline]
    pub fn begin(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Latest scroll offset plus the gate for the update it feeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    pub last_y: f64,
    gate: FrameGate,
}

impl ScrollTracker {
    /// Record a scroll event. Returns `true` when a frame must be requested.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.last_y = scroll_y;
        self.gate.request()
    }

    /// Start the queued update and return the offset it should use.
    pub fn take(&mut self) -> f64 {
        self.gate.begin();
        self.last_y
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }
}
