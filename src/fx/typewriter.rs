//! Self-repeating typewriter demo: type a canned line, show a verdict, move on.

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterSample {
    pub text: &'static str,
    pub is_ai: bool,
    pub result: &'static str,
}

pub const DEMO_SAMPLES: &[TypewriterSample] = &[
    TypewriterSample {
        text: "In today's rapidly evolving digital landscape...",
        is_ai: true,
        result: "⚠️ AI Detected (87% confidence) - Formal tone, buzzwords",
    },
    TypewriterSample {
        text: "My grandmother always said trust your gut.",
        is_ai: false,
        result: "✓ Likely Human (94% confidence) - Natural voice, personal",
    },
    TypewriterSample {
        text: "It is essential to consider the implications...",
        is_ai: true,
        result: "⚠️ AI Detected (91% confidence) - Corporate speak detected",
    },
    TypewriterSample {
        text: "Look, I don't know about you, but this is weird.",
        is_ai: false,
        result: "✓ Likely Human (89% confidence) - Conversational, unique",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub char_interval_ms: u32,
    pub result_delay_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            char_interval_ms: TYPEWRITER_CHAR_INTERVAL_MS,
            result_delay_ms: TYPEWRITER_RESULT_DELAY_MS,
            hold_ms: TYPEWRITER_HOLD_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterAction {
    /// Clear the line and hide the result banner.
    Begin,
    /// Append one character to the line.
    Type(char),
    ShowResult { text: &'static str, is_ai: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterStep {
    pub action: TypewriterAction,
    /// Wait before the next `advance` call.
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Typing(usize),
    Result,
}

pub struct Typewriter {
    samples: &'static [TypewriterSample],
    config: TypewriterConfig,
    index: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(samples: &'static [TypewriterSample], config: TypewriterConfig) -> Self {
        Self {
            samples,
            config,
            index: 0,
            phase: Phase::Start,
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Next action of the demo loop; `None` when there is nothing to show.
    pub fn advance(&mut self) -> Option<TypewriterStep> {
        let samples = self.samples;
        let sample = samples.get(self.index)?;
        let settle = self.config.char_interval_ms + self.config.result_delay_ms;

        let step = match self.phase {
            Phase::Start => {
                let empty = sample.text.is_empty();
                self.phase = if empty { Phase::Result } else { Phase::Typing(0) };
                TypewriterStep {
                    action: TypewriterAction::Begin,
                    delay_ms: if empty { settle } else { self.config.char_interval_ms },
                }
            }
            Phase::Typing(n) => {
                let mut chars = sample.text.chars().skip(n);
                let c = chars.next()?;
                // last char: the end-of-line tick and the result delay are folded together
                let last = chars.next().is_none();
                self.phase = if last { Phase::Result } else { Phase::Typing(n + 1) };
                TypewriterStep {
                    action: TypewriterAction::Type(c),
                    delay_ms: if last { settle } else { self.config.char_interval_ms },
                }
            }
            Phase::Result => {
                self.index = (self.index + 1) % samples.len();
                self.phase = Phase::Start;
                TypewriterStep {
                    action: TypewriterAction::ShowResult {
                        text: sample.result,
                        is_ai: sample.is_ai,
                    },
                    delay_ms: self.config.hold_ms,
                }
            }
        };
        Some(step)
    }
}

pub const RESULT_BASE_CLASS: &str = "typewriter-result";

/// `className` for the verdict banner.
pub fn result_class(shown: Option<bool>) -> String {
    match shown {
        None => RESULT_BASE_CLASS.to_string(),
        Some(true) => format!("{} visible ai", RESULT_BASE_CLASS),
        Some(false) => format!("{} visible human", RESULT_BASE_CLASS),
    }
}
