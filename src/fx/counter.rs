use super::constants::{COUNTER_DURATION_MS, COUNTER_MILLION, COUNTER_THOUSAND};

/// Maps linear progress in [0, 1] to eased progress in [0, 1].
pub type Easing = fn(f64) -> f64;

#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Counter animation parameters.
///
/// - `duration_ms`: time from 0 to the target value
/// - `easing`: progress curve, ease-out cubic by default
/// - `thousand` / `million`: thresholds for the `K` / `M` suffixes
#[derive(Clone, Copy, Debug)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub easing: Easing,
    pub thousand: i64,
    pub million: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            easing: ease_out_cubic,
            thousand: COUNTER_THOUSAND,
            million: COUNTER_MILLION,
        }
    }
}

/// Compact number: `2_500_000 -> "3M"`, `1500 -> "2K"`, `42 -> "42"`.
pub fn format_compact(n: i64, cfg: &CounterConfig) -> String {
    if cfg.million > 0 && n >= cfg.million {
        format!("{}M", (n as f64 / cfg.million as f64).round() as i64)
    } else if cfg.thousand > 0 && n >= cfg.thousand {
        format!("{}K", (n as f64 / cfg.thousand as f64).round() as i64)
    } else {
        n.to_string()
    }
}

/// Decoration kept from the element's initial text, e.g. `"10,000+"` -> `"+"`.
pub fn counter_suffix(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_digit() && *c != ',')
        .collect()
}

/// Parse a `data-count` attribute from its leading integer, so `"98.6"` counts
/// to 98 and `"500+"` to 500. No leading digits counts to 0.
pub fn parse_count(attr: Option<&str>) -> i64 {
    let Some(s) = attr.map(str::trim) else {
        return 0;
    };
    let sign = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    s[..sign + digits].parse().unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    suffix: String,
    config: CounterConfig,
}

impl CounterAnimation {
    pub fn new(target: i64, suffix: impl Into<String>, config: CounterConfig) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            config,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Linear progress after `elapsed_ms`, clamped to [0, 1].
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.config.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.config.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let eased = (self.config.easing)(self.progress(elapsed_ms));
        (self.target as f64 * eased).round() as i64
    }

    pub fn sample(&self, elapsed_ms: f64) -> CounterFrame {
        let value = self.value_at(elapsed_ms);
        CounterFrame {
            text: format!("{}{}", format_compact(value, &self.config), self.suffix),
            done: self.progress(elapsed_ms) >= 1.0,
        }
    }
}
