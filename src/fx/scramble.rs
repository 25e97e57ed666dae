//! Scrambled text reveal.
//!
//! Each character position gets a random `[start, end)` frame window. Before
//! the window it shows the old character, inside it a flickering glyph, and
//! after it the new character. The driver advances one frame per display
//! refresh until every slot has settled.

use super::constants::*;
use super::rng::RandomSource;
use smallvec::SmallVec;

/// Tuning for a scramble effect.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrambleConfig {
    pub glyphs: Vec<char>,
    pub start_span: u32,
    pub length_span: u32,
    pub reroll_probability: f64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            glyphs: SCRAMBLE_GLYPHS.chars().collect(),
            start_span: SCRAMBLE_START_SPAN,
            length_span: SCRAMBLE_LENGTH_SPAN,
            reroll_probability: SCRAMBLE_REROLL_PROBABILITY,
        }
    }
}

/// Transition record for one character position.
///
/// `from`/`to` are `None` where the old or new text is shorter than the plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharSlot {
    pub from: Option<char>,
    pub to: Option<char>,
    pub start: u32,
    pub end: u32,
    pub glyph: Option<char>,
}

/// One rendered piece of output for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(char),
    Scrambling(char),
}

pub type Segments = SmallVec<[Segment; 64]>;

/// Character plan plus frame counter for one in-flight reveal.
#[derive(Clone, Debug)]
pub struct ScrambleTask {
    config: ScrambleConfig,
    slots: Vec<CharSlot>,
    frame: u32,
}

impl ScrambleTask {
    pub fn new(config: ScrambleConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            frame: 0,
        }
    }

    /// Replace the plan with a transition from `old` to `new` and rewind to frame 0.
    pub fn plan<R: RandomSource>(&mut self, old: &str, new: &str, rng: &mut R) {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let len = old.len().max(new.len());

        self.slots.clear();
        self.slots.reserve(len);
        for i in 0..len {
            let start = rng.below(self.config.start_span);
            let end = start + rng.below(self.config.length_span);
            self.slots.push(CharSlot {
                from: old.get(i).copied(),
                to: new.get(i).copied(),
                start,
                end,
                glyph: None,
            });
        }
        self.frame = 0;
    }

    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[inline]
    pub fn slots(&self) -> &[CharSlot] {
        &self.slots
    }

    /// Latest `end` across all slots; the plan is settled once `frame` reaches it.
    pub fn settle_frame(&self) -> u32 {
        self.slots.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Render the current frame into `out`. Returns `true` when every slot has settled.
    pub fn render<R: RandomSource>(&mut self, rng: &mut R, out: &mut Segments) -> bool {
        out.clear();
        let frame = self.frame;
        let mut complete = 0usize;

        for slot in self.slots.iter_mut() {
            if frame >= slot.end {
                complete += 1;
                if let Some(c) = slot.to {
                    out.push(Segment::Plain(c));
                }
            } else if frame >= slot.start {
                if slot.glyph.is_none() || rng.next_unit() < self.config.reroll_probability {
                    let n = self.config.glyphs.len() as u32;
                    let pick = rng.below(n) as usize;
                    slot.glyph = Some(self.config.glyphs.get(pick).copied().unwrap_or('?'));
                }
                if let Some(g) = slot.glyph {
                    out.push(Segment::Scrambling(g));
                }
            } else if let Some(c) = slot.from {
                out.push(Segment::Plain(c));
            }
        }

        complete == self.slots.len()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

/// Display string with scrambling glyphs unstyled.
pub fn segments_to_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match *s {
            Segment::Plain(c) | Segment::Scrambling(c) => c,
        })
        .collect()
}

/// Markup for `innerHTML`: glyphs are wrapped in an accent span, everything escaped.
pub fn segments_to_html(segments: &[Segment], accent_style: &str) -> String {
    let mut html = String::with_capacity(segments.len() * 2);
    for seg in segments {
        match *seg {
            Segment::Plain(c) => push_escaped(&mut html, c),
            Segment::Scrambling(c) => {
                html.push_str("<span style=\"");
                html.push_str(accent_style);
                html.push_str("\">");
                push_escaped(&mut html, c);
                html.push_str("</span>");
            }
        }
    }
    html
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

pub type FrameId = i32;

/// Per-refresh callback scheduling (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// Queue one frame; `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// The element whose content is being scrambled.
pub trait TextSurface {
    fn text(&self) -> String;
    fn write(&mut self, segments: &[Segment]);
}

/// Owns one [`ScrambleTask`] bound to one surface.
///
/// A new [`set_text`](Self::set_text) supersedes any running reveal: its pending
/// frame is cancelled and its completion callback is dropped without firing.
pub struct ScrambleDriver<S, T, R> {
    task: ScrambleTask,
    scheduler: S,
    surface: T,
    rng: R,
    pending: Option<FrameId>,
    active: bool,
    on_complete: Option<Box<dyn FnOnce()>>,
    buf: Segments,
}

impl<S, T, R> ScrambleDriver<S, T, R>
where
    S: FrameScheduler,
    T: TextSurface,
    R: RandomSource,
{
    pub fn new(config: ScrambleConfig, scheduler: S, surface: T, rng: R) -> Self {
        Self {
            task: ScrambleTask::new(config),
            scheduler,
            surface,
            rng,
            pending: None,
            active: false,
            on_complete: None,
            buf: Segments::new(),
        }
    }

    pub fn set_text(&mut self, text: &str, on_complete: impl FnOnce() + 'static) {
        let old = self.surface.text();
        self.task.plan(&old, text, &mut self.rng);
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        self.on_complete = Some(Box::new(on_complete));
        self.active = true;
        self.on_frame();
    }

    /// Render one frame and either finish or queue the next one.
    pub fn on_frame(&mut self) {
        self.pending = None;
        if !self.active {
            return;
        }

        let done = self.task.render(&mut self.rng, &mut self.buf);
        self.surface.write(&self.buf);

        if done {
            self.active = false;
            if let Some(cb) = self.on_complete.take() {
                cb();
            }
        } else {
            self.pending = self.scheduler.request_frame();
            if self.pending.is_none() {
                log::warn!("[scramble] frame request refused at frame {}", self.task.frame());
            }
            self.task.advance();
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn task(&self) -> &ScrambleTask {
        &self.task
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
