// Primer LLM pipeline explorer
//
// A finite stage counter (-1 = not started, then the seven stages) with
// play/pause, next, prev, reset and jump. While playing, a one-shot timer
// re-armed on every stage change moves one stage forward; reaching the last
// stage stops playing. At the Tokens stage the highlighted token cycles.

use std::time::Duration;

use log::debug;
use primer_utils::config::Config;
use primer_utils::stages::{self, PipelineStage};

use crate::animation::{AnimationFrame, Shimmer, Tone};
use crate::timer::{Tick, TimerPlan, TimerSlot, TimerSpec};

/// Progress marker for one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    Done,
    Current,
    Pending,
}

pub struct PipelineExplorer {
    current: Option<PipelineStage>,
    playing: bool,
    active_token: usize,
    epoch: u64,
    step: Duration,
    token_cycle: Duration,
}

impl PipelineExplorer {
    const SHIMMER: Shimmer = Shimmer::new("Processing...").with_width(10);

    pub fn new(step: Duration, token_cycle: Duration) -> Self {
        Self {
            current: None,
            playing: false,
            active_token: 0,
            epoch: 0,
            step,
            token_cycle,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pipeline_step, config.token_cycle)
    }

    pub fn current(&self) -> Option<PipelineStage> {
        self.current
    }

    /// Stage index, -1 before the first stage
    pub fn index(&self) -> i32 {
        self.current.map_or(-1, |s| s.index() as i32)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn active_token(&self) -> usize {
        self.active_token
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn at_end(&self) -> bool {
        self.current.is_some_and(|s| s.is_last())
    }

    /// Every move goes through here; landing on the last stage stops playing
    fn set(&mut self, current: Option<PipelineStage>, playing: bool) {
        let playing = playing && !current.is_some_and(|s| s.is_last());
        if current == self.current && playing == self.playing {
            return;
        }
        if current != self.current {
            debug!("Pipeline stage {:?} -> {:?}", self.current, current);
        }
        self.current = current;
        self.playing = playing;
        self.epoch += 1;
    }

    /// Start auto-advance. From the last stage this starts over at the first.
    pub fn play(&mut self) {
        if self.at_end() {
            self.reset();
            self.set(Some(PipelineStage::first()), true);
        } else {
            let current = self.current.or(Some(PipelineStage::first()));
            self.set(current, true);
        }
    }

    pub fn pause(&mut self) {
        self.set(self.current, false);
    }

    /// The play control: pauses while playing
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        let next = match self.current {
            None => Some(PipelineStage::first()),
            Some(stage) => stage.next().or(Some(stage)),
        };
        self.set(next, self.playing);
    }

    /// Step back; from the first stage this returns to not started
    pub fn prev(&mut self) {
        let Some(stage) = self.current else {
            return;
        };
        self.set(stage.prev(), self.playing);
    }

    pub fn reset(&mut self) {
        self.set(None, false);
        self.active_token = 0;
    }

    /// Go straight to stage `index`; out-of-range indices are ignored
    pub fn jump(&mut self, index: usize) {
        if let Some(stage) = PipelineStage::from_index(index) {
            self.set(Some(stage), self.playing);
        }
    }

    /// One auto-advance: exactly one stage forward, stopping at the last
    pub fn tick(&mut self) {
        self.next();
    }

    /// Handle a tick from this explorer's timers. Returns true if anything changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if tick.epoch != self.epoch {
            return false;
        }
        match tick.slot {
            TimerSlot::Pipeline if self.playing => {
                self.tick();
                true
            }
            TimerSlot::PipelineTokens if self.current == Some(PipelineStage::Tokens) => {
                self.active_token = (self.active_token + 1) % stages::TOKENS.len();
                true
            }
            _ => false,
        }
    }

    pub fn timer_plan(&self) -> TimerPlan {
        let mut plan = TimerPlan::new(self.epoch);
        if self.playing {
            plan.push(TimerSpec::once(TimerSlot::Pipeline, self.step));
        }
        if self.current == Some(PipelineStage::Tokens) {
            plan.push(TimerSpec::every(TimerSlot::PipelineTokens, self.token_cycle));
        }
        plan
    }

    /// Label of the play control
    pub fn control_label(&self) -> &'static str {
        if self.playing {
            "Pause"
        } else if self.at_end() {
            "Replay"
        } else {
            "Play"
        }
    }

    pub fn marks(&self) -> Vec<(PipelineStage, StageMark)> {
        let at = self.index();
        (0..PipelineStage::COUNT)
            .filter_map(PipelineStage::from_index)
            .map(|stage| {
                let i = stage.index() as i32;
                let mark = if i < at {
                    StageMark::Done
                } else if i == at {
                    StageMark::Current
                } else {
                    StageMark::Pending
                };
                (stage, mark)
            })
            .collect()
    }

    /// Stage panel for the current position
    pub fn render(&self, beat: u64) -> AnimationFrame {
        let mut frame = AnimationFrame::new(stages::HEADLINE);
        frame.line(stages::ROUTE, Tone::Muted).blank();

        frame.line("▢ Context Window (Memory Limit)", Tone::Muted);
        frame.lit(
            format!("  📝 \"{}\"", stages::PROMPT),
            self.current == Some(PipelineStage::Prompt),
        );
        frame.plain("  🧠 LLM Brain");

        let inner: Vec<String> = self
            .marks()
            .into_iter()
            .skip(1)
            .map(|(stage, mark)| match mark {
                StageMark::Current => format!("[{}]", stage.label()),
                _ => stage.label().to_string(),
            })
            .collect();
        frame.plain(format!("     {}", inner.join(" → "))).blank();

        self.push_stage(&mut frame, beat);
        frame
    }

    /// Just the current stage: its visual and description
    pub fn render_stage(&self, beat: u64) -> AnimationFrame {
        let title = self.current.map_or(stages::HEADLINE, |s| s.label());
        let mut frame = AnimationFrame::new(title);
        self.push_stage(&mut frame, beat);
        frame
    }

    fn push_stage(&self, frame: &mut AnimationFrame, beat: u64) {
        match self.current {
            None => {}
            Some(PipelineStage::Prompt) => {
                frame.line(format!("You: {}", stages::PROMPT), Tone::Accent);
            }
            Some(PipelineStage::Tokens) => {
                let tokens: Vec<String> = stages::TOKENS
                    .iter()
                    .enumerate()
                    .map(|(i, token)| {
                        if i == self.active_token {
                            format!("[\"{token}\"]")
                        } else {
                            format!(" \"{token}\" ")
                        }
                    })
                    .collect();
                frame.line(tokens.join(" "), Tone::Accent);
            }
            Some(PipelineStage::Embeddings) => {
                for (token, vector) in stages::TOKENS.iter().zip(stages::EMBEDDINGS.iter()) {
                    let numbers: Vec<String> = vector.iter().map(|v| format!("{v:.2}")).collect();
                    frame.plain(format!("{:<10} → [{}]", format!("\"{token}\""), numbers.join(", ")));
                }
            }
            Some(PipelineStage::Transformer) => {
                let layers: Vec<String> = (1..=stages::ATTENTION_LAYERS)
                    .map(|n| format!("◆ L{n}"))
                    .collect();
                frame
                    .line(layers.join(" ─ "), Tone::Accent)
                    .line(Self::SHIMMER.render(beat), Tone::Muted);
            }
            Some(PipelineStage::Logits) => {
                for (word, score) in stages::LOGITS {
                    let bar = "█".repeat((score * 4.0).round() as usize);
                    frame.plain(format!("{word:<10} {bar} {score:.1}"));
                }
            }
            Some(PipelineStage::Softmax) => {
                for (word, percent) in stages::PROBABILITIES {
                    let bar = "█".repeat(percent as usize / 4);
                    let tone = if word == stages::NEXT_WORD {
                        Tone::Success
                    } else {
                        Tone::Plain
                    };
                    frame.line(format!("{word:<10} {percent:>3}% {bar}"), tone);
                }
            }
            Some(PipelineStage::Output) => {
                frame.line(
                    format!("{} {} ✨", stages::PROMPT, stages::NEXT_WORD),
                    Tone::Success,
                );
            }
        }

        match self.current {
            None => {
                frame.caption(stages::INTRO);
            }
            Some(stage) => {
                frame.caption(stage.description());
                if stage.is_last() {
                    frame.blank().line(format!("🎯 {}", stages::COMPLETION), Tone::Insight);
                }
            }
        }
    }
}

impl Default for PipelineExplorer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
