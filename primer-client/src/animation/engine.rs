// Primer animation engine: AnimationEngine trait and core types
use std::time::Duration;

use primer_utils::catalog::ConceptId;

/// Default delay between two steps of a concept animation
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(4000);

/// Semantic style of a rendered line. Front ends pick the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Not reached yet, or secondary text
    Muted,
    /// The part the current step is about
    Accent,
    Success,
    Warning,
    /// Final summary panel
    Insight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub text: String,
    pub tone: Tone,
}

impl FrameLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn blank() -> Self {
        Self::new("", Tone::Plain)
    }
}

/// One rendered state of an animation
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub title: String,
    pub lines: Vec<FrameLine>,
    /// Explanation shown under the scene for the current step
    pub caption: Option<String>,
}

impl AnimationFrame {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            caption: None,
        }
    }

    pub fn line(&mut self, text: impl Into<String>, tone: Tone) -> &mut Self {
        self.lines.push(FrameLine::new(text, tone));
        self
    }

    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.line(text, Tone::Plain)
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(FrameLine::blank());
        self
    }

    /// Accent when `on`, muted otherwise
    pub fn lit(&mut self, text: impl Into<String>, on: bool) -> &mut Self {
        self.line(text, if on { Tone::Accent } else { Tone::Muted })
    }

    pub fn caption(&mut self, text: impl Into<String>) -> &mut Self {
        self.caption = Some(text.into());
        self
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
            || self.caption.as_deref().is_some_and(|c| c.contains(needle))
    }

    /// Plain text form: title, lines, caption
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        if let Some(caption) = &self.caption {
            out.push_str(caption);
            out.push('\n');
        }
        out
    }
}

/// How a step counter behaves at its upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Stops at the bound
    Bounded,
    /// Wraps back to 0 after the bound
    Cycling,
}

/// Step counter shared by all concept animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    step: u32,
    max: u32,
    mode: StepMode,
}

impl StepCounter {
    pub fn bounded(max: u32) -> Self {
        Self {
            step: 0,
            max,
            mode: StepMode::Bounded,
        }
    }

    pub fn cycling(max: u32) -> Self {
        Self {
            step: 0,
            max,
            mode: StepMode::Cycling,
        }
    }

    pub fn get(&self) -> u32 {
        self.step
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Move one step forward. Returns false when the counter is capped.
    pub fn advance(&mut self) -> bool {
        match self.mode {
            StepMode::Bounded if self.step >= self.max => false,
            StepMode::Bounded => {
                self.step += 1;
                true
            }
            StepMode::Cycling => {
                self.step = if self.step >= self.max { 0 } else { self.step + 1 };
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// A cycling counter never completes
    pub fn is_complete(&self) -> bool {
        self.mode == StepMode::Bounded && self.step >= self.max
    }
}

/// Step-based animation interface.
///
/// An animation is a counter advanced by the step timer while the modal is
/// playing, plus an optional faster "detail" timer for effects inside a step
/// (typing, progress bars). The owner asks for the intervals and calls
/// `advance`/`tick_detail`; engines never start timers themselves.
pub trait AnimationEngine: Send {
    fn concept(&self) -> ConceptId;

    /// Current step, starting at 0
    fn step(&self) -> u32;

    /// Highest step this animation reaches
    fn max_step(&self) -> u32;

    /// Handle one step tick. Returns true if anything changed.
    fn advance(&mut self) -> bool;

    /// Delay between step ticks
    fn step_interval(&self) -> Duration {
        DEFAULT_STEP_INTERVAL
    }

    /// Interval of the detail timer, `None` while no detail effect is running
    fn detail_interval(&self) -> Option<Duration> {
        None
    }

    /// Handle one detail tick. Returns true if anything changed.
    fn tick_detail(&mut self) -> bool {
        false
    }

    /// Back to step 0 with all detail effects cleared
    fn reset(&mut self);

    /// Whether further step ticks would change nothing
    fn is_complete(&self) -> bool {
        self.step() >= self.max_step()
    }

    /// Render the current step. `beat` is the UI frame counter.
    fn render(&self, beat: u64) -> AnimationFrame;
}
