use super::constants::*;
use super::rng::RandomSource;

pub const INK_FADE_KEYFRAMES: &str = "
  @keyframes ink-fade {
    0% { opacity: 0.15; transform: scale(1); }
    100% { opacity: 0; transform: scale(2); }
  }
";

/// A single short-lived ink blot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InkDot {
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
}

impl InkDot {
    /// `x`/`y` are offsets inside the hero element.
    pub fn spawn<R: RandomSource>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size_px: INK_MIN_SIZE_PX + rng.next_unit() * INK_SIZE_SPAN_PX,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: var(--accent); border-radius: 50%; pointer-events: none; \
             left: {x}px; top: {y}px; opacity: {op}; z-index: 1; \
             animation: ink-fade 2s ease-out forwards;",
            size = self.size_px,
            x = self.x,
            y = self.y,
            op = INK_OPACITY,
        )
    }
}
