//! Pointer- and scroll-driven geometry. Pure functions of their inputs.

use super::constants::*;
use glam::Vec2;

/// Client-space bounding box of an element (from `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }

    /// Pointer position relative to the top-left corner.
    #[inline]
    pub fn local(&self, pointer: Vec2) -> Vec2 {
        pointer - self.origin()
    }
}

/// Spotlight position inside its region.
#[inline]
pub fn spotlight_offset(pointer: Vec2, region: &Bounds) -> Vec2 {
    region.local(pointer)
}

#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Speed factor from the leading number of a `data-parallax` attribute
/// (`"0.5px"` reads as 0.5). No leading number, or a non-finite one, means still.
pub fn parse_parallax_speed(attr: Option<&str>) -> f64 {
    attr.map(|s| float_prefix(s.trim()))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// Longest `[+-]digits[.digits][e[+-]digits]` prefix with at least one mantissa digit.
fn float_prefix(s: &str) -> &str {
    let b = s.as_bytes();
    let digits = |from: usize| from + b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let start = usize::from(s.starts_with(['+', '-']));
    let mut end = digits(start);
    let mut mantissa = end > start;
    if b.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        if mantissa || frac_end > end + 1 {
            mantissa = true;
            end = frac_end;
        }
    }
    if !mantissa {
        return "";
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}

/// Magnetic button displacement: `(button, label)` offsets.
pub fn magnetic_pull(pointer: Vec2, button: &Bounds, strength: f32) -> (Vec2, Vec2) {
    let delta = pointer - button.center();
    let pull = delta * strength;
    (pull, pull * MAGNETIC_LABEL_FACTOR)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            TILT_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg, TILT_SCALE
        )
    }
}

pub fn card_tilt(pointer: Vec2, card: &Bounds, divisor: f32) -> Tilt {
    let local = card.local(pointer);
    let half = card.size() * 0.5;
    Tilt {
        rotate_x_deg: (local.y - half.y) / divisor,
        rotate_y_deg: (half.x - local.x) / divisor,
    }
}

/// Page scroll progress in percent; 0 when the page cannot scroll.
pub fn scroll_percent(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let range = doc_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    scroll_y / range * 100.0
}

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER_PX
}

#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn translate_y_css(y: f64) -> String {
    format!("translateY({}px)", y)
}

/// Persistent dot that eases toward the pointer every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrailFollower {
    pub pos: Vec2,
    pub target: Vec2,
}

impl TrailFollower {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// One frame of exponential smoothing; returns the dot's top-left corner.
    pub fn step(&mut self, smoothing: f32) -> Vec2 {
        self.pos += (self.target - self.pos) * smoothing;
        self.pos - Vec2::splat(TRAIL_DOT_SIZE_PX * 0.5)
    }
}
