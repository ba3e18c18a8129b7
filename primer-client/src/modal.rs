// Primer animation modal
//
// Closed -> Open(Idle) -> Open(Playing). Closing from any open state unmounts
// the animation and forgets the concept after a short delay, so the exit
// transition still has something to draw. Reopening cancels a pending clear.
// An unmounted engine is parked until then and reset before it is mounted
// again, so a reopened concept always starts from step 0.

use std::time::Duration;

use log::{debug, info};
use primer_utils::catalog::{catalog, Concept};
use primer_utils::config::Config;

use crate::animation::{animation_for_key, AnimationEngine, AnimationFrame};
use crate::timer::{Tick, TimerPlan, TimerSlot, TimerSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    /// Start screen for the selected concept
    Idle,
    /// Animation mounted and running
    Playing,
}

/// Timing knobs, taken from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTiming {
    /// Overrides the animation's own step interval when set
    pub step_override: Option<Duration>,
    pub close_delay: Duration,
}

impl Default for ModalTiming {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ModalTiming {
    fn from(config: &Config) -> Self {
        Self {
            step_override: config.concept_step,
            close_delay: config.close_delay,
        }
    }
}

pub struct Modal {
    phase: ModalPhase,
    concept: Option<&'static Concept>,
    /// Only present while playing; `None` with a concept means no animation
    /// is registered for it
    engine: Option<Box<dyn AnimationEngine>>,
    /// Unmounted engine of the last concept, reused on reopen
    parked: Option<Box<dyn AnimationEngine>>,
    clear_pending: bool,
    epoch: u64,
    timing: ModalTiming,
}

impl Modal {
    pub fn new(timing: ModalTiming) -> Self {
        Self {
            phase: ModalPhase::Closed,
            concept: None,
            engine: None,
            parked: None,
            clear_pending: false,
            epoch: 0,
            timing,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Selected concept; kept for `close_delay` after closing
    pub fn concept(&self) -> Option<&'static Concept> {
        self.concept
    }

    pub fn engine(&self) -> Option<&dyn AnimationEngine> {
        self.engine.as_deref()
    }

    pub fn is_clear_pending(&self) -> bool {
        self.clear_pending
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Open on the start screen for `concept`
    pub fn open(&mut self, concept: &'static Concept) {
        info!("Opening modal for {}", concept.id);
        self.phase = ModalPhase::Idle;
        self.concept = Some(concept);
        if let Some(engine) = self.engine.take() {
            self.parked = Some(engine);
        }
        if self.parked.as_ref().is_some_and(|e| e.concept() != concept.id) {
            self.parked = None;
        }
        self.clear_pending = false;
        self.epoch += 1;
    }

    /// Mount the animation from step 0 and start playing. Only valid from Idle.
    pub fn start(&mut self) {
        if self.phase != ModalPhase::Idle {
            return;
        }
        let Some(concept) = self.concept else {
            return;
        };
        self.engine = match self.parked.take() {
            Some(mut engine) => {
                engine.reset();
                Some(engine)
            }
            // resolved by key so a missing registry entry degrades to a panel
            None => animation_for_key(concept.id.as_ref()),
        };
        if self.engine.is_none() {
            debug!("No animation registered for {}", concept.id);
        }
        self.phase = ModalPhase::Playing;
        self.epoch += 1;
        info!("Playing animation for {}", concept.id);
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        debug!("Closing modal at epoch {}", self.epoch);
        self.phase = ModalPhase::Closed;
        if let Some(engine) = self.engine.take() {
            self.parked = Some(engine);
        }
        self.clear_pending = true;
        self.epoch += 1;
    }

    /// Handle a tick from this modal's timers. Returns true if anything changed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if tick.epoch != self.epoch {
            debug!("Ignoring stale {:?} tick from epoch {}", tick.slot, tick.epoch);
            return false;
        }
        match tick.slot {
            TimerSlot::Step => self.engine.as_mut().is_some_and(|e| e.advance()),
            TimerSlot::Detail => self.engine.as_mut().is_some_and(|e| e.tick_detail()),
            TimerSlot::ModalClear if self.clear_pending => {
                self.concept = None;
                self.parked = None;
                self.clear_pending = false;
                true
            }
            _ => false,
        }
    }

    /// Timers this modal needs in its current state
    pub fn timer_plan(&self) -> TimerPlan {
        let mut plan = TimerPlan::new(self.epoch);
        match self.phase {
            ModalPhase::Closed if self.clear_pending => {
                plan.push(TimerSpec::once(TimerSlot::ModalClear, self.timing.close_delay));
            }
            ModalPhase::Playing => {
                if let Some(engine) = &self.engine {
                    if !engine.is_complete() {
                        let period = self
                            .timing
                            .step_override
                            .unwrap_or_else(|| engine.step_interval());
                        plan.push(TimerSpec::every(TimerSlot::Step, period));
                    }
                    if let Some(period) = engine.detail_interval() {
                        plan.push(TimerSpec::every(TimerSlot::Detail, period));
                    }
                }
            }
            _ => {}
        }
        plan
    }

    /// Frame of the mounted animation
    pub fn frame(&self, beat: u64) -> Option<AnimationFrame> {
        self.engine.as_ref().map(|e| e.render(beat))
    }

    /// Category name of the selected concept, for the header
    pub fn category_name(&self) -> Option<&'static str> {
        let concept = self.concept?;
        catalog().category(concept.category).map(|c| c.name)
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new(ModalTiming::default())
    }
}
