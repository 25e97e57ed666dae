use super::constants::*;

/// How an effect reacts to its element crossing a visibility threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityRule {
    pub threshold: f64,
    pub once: bool,
}

pub const REVEAL_RULE: VisibilityRule = VisibilityRule {
    threshold: REVEAL_THRESHOLD,
    once: false,
};
pub const COUNTER_RULE: VisibilityRule = VisibilityRule {
    threshold: COUNTER_THRESHOLD,
    once: true,
};
pub const SCRAMBLE_RULE: VisibilityRule = VisibilityRule {
    threshold: SCRAMBLE_THRESHOLD,
    once: true,
};
pub const TYPEWRITER_RULE: VisibilityRule = VisibilityRule {
    threshold: TYPEWRITER_THRESHOLD,
    once: true,
};

/// Per-element trigger state for a [`VisibilityRule`].
#[derive(Clone, Copy, Debug)]
pub struct VisibilityLatch {
    rule: VisibilityRule,
    fired: bool,
}

impl VisibilityLatch {
    pub fn new(rule: VisibilityRule) -> Self {
        Self { rule, fired: false }
    }

    /// Returns `true` when the effect should run for this observation.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !intersecting || (self.rule.once && self.fired) {
            return false;
        }
        self.fired = true;
        true
    }

    /// A one-shot latch that has fired no longer needs observing.
    pub fn is_spent(&self) -> bool {
        self.rule.once && self.fired
    }

    pub fn rule(&self) -> VisibilityRule {
        self.rule
    }
}
