// Primer timers
//
// Every timed behavior (animation steps, detail effects, pipeline
// auto-advance, token cycling, the modal's deferred clear, the UI frame
// clock) is a Ticker task sending Tick messages into the event loop.
//
// State machines never spawn timers. They describe the timers they want in
// their current state as a TimerPlan; the owner's Scheduler reconciles the
// running tickers against that plan after every state change:
// - timers no longer in the plan are cancelled (oneshot shutdown)
// - timers new to the plan are spawned
// - dropping the Scheduler cancels everything
//
// Ticks carry the plan's epoch. A tick already queued when its timer was
// cancelled arrives with an old epoch and is ignored by the owner.

use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Which timer a tick comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Concept animation step
    Step,
    /// Concept animation detail effect
    Detail,
    /// Pipeline auto-advance
    Pipeline,
    /// Pipeline token highlight
    PipelineTokens,
    /// Deferred clear after the modal closes
    ModalClear,
    /// UI frame clock
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Fires every period until cancelled
    Every,
    /// Fires once after one period
    Once,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    pub slot: TimerSlot,
    pub period: Duration,
    pub mode: TimerMode,
}

impl TimerSpec {
    pub fn every(slot: TimerSlot, period: Duration) -> Self {
        Self {
            slot,
            period,
            mode: TimerMode::Every,
        }
    }

    pub fn once(slot: TimerSlot, period: Duration) -> Self {
        Self {
            slot,
            period,
            mode: TimerMode::Once,
        }
    }
}

/// The timers an owner wants running right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerPlan {
    pub epoch: u64,
    pub timers: Vec<TimerSpec>,
}

impl TimerPlan {
    pub fn new(epoch: u64) -> Self {
        Self {
            epoch,
            timers: Vec::new(),
        }
    }

    pub fn with(mut self, spec: TimerSpec) -> Self {
        self.timers.push(spec);
        self
    }

    pub fn push(&mut self, spec: TimerSpec) {
        self.timers.push(spec);
    }

    pub fn contains(&self, slot: TimerSlot) -> bool {
        self.timers.iter().any(|t| t.slot == slot)
    }

    pub fn get(&self, slot: TimerSlot) -> Option<&TimerSpec> {
        self.timers.iter().find(|t| t.slot == slot)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Message sent by a ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub slot: TimerSlot,
    pub epoch: u64,
}

/// A running timer task. Cancelled on drop.
pub struct Ticker {
    spec: TimerSpec,
    epoch: u64,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a timer task on the current tokio runtime.
    ///
    /// The first tick fires one full period after spawning.
    pub fn spawn(spec: TimerSpec, epoch: u64, tick_tx: Sender<Tick>) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let first = Instant::now() + spec.period;

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, spec.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let tick = Tick {
                slot: spec.slot,
                epoch,
            };

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        if tick_tx.send(tick).await.is_err() {
                            log::debug!("Tick receiver gone, stopping {:?} timer", spec.slot);
                            break;
                        }
                        if spec.mode == TimerMode::Once {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            spec,
            epoch,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    pub fn spec(&self) -> &TimerSpec {
        &self.spec
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the task has stopped, either cancelled or a fired one-shot
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Keeps one owner's running tickers in line with its timer plan
pub struct Scheduler {
    name: &'static str,
    tick_tx: Sender<Tick>,
    running: Vec<Ticker>,
}

impl Scheduler {
    pub fn new(name: &'static str, tick_tx: Sender<Tick>) -> Self {
        Self {
            name,
            tick_tx,
            running: Vec::new(),
        }
    }

    /// Reconcile running tickers against `plan`.
    ///
    /// A ticker survives only if the plan still has the same spec at the same
    /// epoch, so a periodic timer keeps its cadence across unrelated state
    /// changes. A fired one-shot is not respawned until its epoch changes.
    pub fn apply(&mut self, plan: &TimerPlan) {
        let before = self.running.len();
        self.running
            .retain(|t| t.epoch == plan.epoch && plan.timers.contains(&t.spec));
        let cancelled = before - self.running.len();

        let mut spawned = 0;
        for spec in &plan.timers {
            let running = self
                .running
                .iter()
                .any(|t| t.epoch == plan.epoch && t.spec == *spec);
            if !running {
                self.running
                    .push(Ticker::spawn(*spec, plan.epoch, self.tick_tx.clone()));
                spawned += 1;
            }
        }

        if cancelled > 0 || spawned > 0 {
            log::debug!(
                "{} timers at epoch {}: {} cancelled, {} started, {} running",
                self.name,
                plan.epoch,
                cancelled,
                spawned,
                self.running.len()
            );
        }
    }

    pub fn cancel_all(&mut self) {
        if !self.running.is_empty() {
            log::debug!("{} timers: cancelling {}", self.name, self.running.len());
        }
        self.running.clear();
    }

    /// Slots with a live ticker
    pub fn active(&self) -> Vec<TimerSlot> {
        self.running
            .iter()
            .filter(|t| !t.is_finished())
            .map(|t| t.spec.slot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    const QUIET: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fires_every_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let start = Instant::now();
        let _ticker = Ticker::spawn(
            TimerSpec::every(TimerSlot::Step, Duration::from_secs(4)),
            3,
            tx,
        );

        let tick = rx.recv().await.unwrap();
        assert_eq!(
            tick,
            Tick {
                slot: TimerSlot::Step,
                epoch: 3
            }
        );
        assert_eq!(start.elapsed(), Duration::from_secs(4));

        rx.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let _keep = tx.clone();
        let ticker = Ticker::spawn(
            TimerSpec::once(TimerSlot::ModalClear, Duration::from_millis(300)),
            0,
            tx,
        );

        assert_eq!(rx.recv().await.unwrap().slot, TimerSlot::ModalClear);
        assert!(timeout(QUIET, rx.recv()).await.is_err());
        assert!(ticker.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_ticker_stops() {
        let (tx, mut rx) = mpsc::channel(8);
        let _keep = tx.clone();
        let ticker = Ticker::spawn(
            TimerSpec::every(TimerSlot::Detail, Duration::from_millis(100)),
            0,
            tx,
        );

        rx.recv().await.unwrap();
        drop(ticker);
        assert!(timeout(QUIET, rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_reconciles_plan() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut scheduler = Scheduler::new("test", tx);
        let step = TimerSpec::every(TimerSlot::Step, Duration::from_secs(4));
        let detail = TimerSpec::every(TimerSlot::Detail, Duration::from_millis(100));

        scheduler.apply(&TimerPlan::new(1).with(step).with(detail));
        assert_eq!(scheduler.active().len(), 2);

        // same epoch, detail gone: step keeps running
        scheduler.apply(&TimerPlan::new(1).with(step));
        assert_eq!(scheduler.active(), vec![TimerSlot::Step]);

        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.slot, TimerSlot::Step);
        assert_eq!(tick.epoch, 1);

        scheduler.apply(&TimerPlan::new(2));
        assert!(scheduler.active().is_empty());
        assert!(timeout(QUIET, rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_keeps_cadence_across_reapply() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut scheduler = Scheduler::new("test", tx);
        let plan = TimerPlan::new(0).with(TimerSpec::every(TimerSlot::Frame, Duration::from_secs(1)));
        let start = Instant::now();

        scheduler.apply(&plan);
        tokio::time::advance(Duration::from_millis(600)).await;
        scheduler.apply(&plan);

        rx.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_epoch_rearms_one_shot() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut scheduler = Scheduler::new("test", tx);
        let once = TimerSpec::once(TimerSlot::Pipeline, Duration::from_millis(4500));
        let start = Instant::now();

        scheduler.apply(&TimerPlan::new(1).with(once));
        tokio::time::advance(Duration::from_secs(3)).await;
        scheduler.apply(&TimerPlan::new(2).with(once));

        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.epoch, 2);
        assert_eq!(start.elapsed(), Duration::from_millis(7500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scheduler_cancels_everything() {
        let (tx, mut rx) = mpsc::channel(8);
        let _keep = tx.clone();
        let mut scheduler = Scheduler::new("test", tx);
        scheduler.apply(
            &TimerPlan::new(0)
                .with(TimerSpec::every(TimerSlot::Step, Duration::from_secs(1)))
                .with(TimerSpec::every(TimerSlot::Detail, Duration::from_millis(80))),
        );
        drop(scheduler);
        assert!(timeout(QUIET, rx.recv()).await.is_err());
    }
}
