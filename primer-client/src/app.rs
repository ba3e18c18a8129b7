// Primer app state
//
// Owns the two views and the modal, routes keys and ticks to them, and works
// out which timers each of them needs. Drawing lives in `ui`.

use std::time::Duration;

use crossterm::event::KeyEvent;
use log::{debug, info};
use primer_utils::config::{Config, StartView};
use tokio::sync::mpsc::Sender;

use crate::catalog_view::CatalogView;
use crate::keys::{command_for, Command, Focus};
use crate::modal::{Modal, ModalPhase, ModalTiming};
use crate::pipeline::PipelineExplorer;
use crate::timer::{Scheduler, Tick, TimerPlan, TimerSlot, TimerSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog,
    Pipeline,
}

impl From<StartView> for View {
    fn from(start: StartView) -> Self {
        match start {
            StartView::Catalog => View::Catalog,
            StartView::Pipeline => View::Pipeline,
        }
    }
}

pub struct App {
    view: View,
    catalog: CatalogView,
    modal: Modal,
    pipeline: PipelineExplorer,
    /// Frame counter for shimmer indicators
    beat: u64,
    frame_interval: Duration,
    color: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            view: config.start_view.into(),
            catalog: CatalogView::new(),
            modal: Modal::new(ModalTiming::from(config)),
            pipeline: PipelineExplorer::from_config(config),
            beat: 0,
            frame_interval: config.frame_interval(),
            color: config.color,
            should_quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn pipeline(&self) -> &PipelineExplorer {
        &self.pipeline
    }

    pub fn beat(&self) -> u64 {
        self.beat
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        match self.view {
            View::Catalog if self.modal.is_open() => Focus::Modal,
            View::Catalog => Focus::Catalog,
            View::Pipeline => Focus::Pipeline,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for(self.focus(), key) {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: Command) {
        debug!("Command {:?} in {:?}", command, self.focus());
        match command {
            Command::Quit => {
                info!("Quit requested");
                self.modal.close();
                self.should_quit = true;
            }
            Command::Move(direction) => self.catalog.move_cursor(direction),
            Command::Select => {
                let modal = &mut self.modal;
                self.catalog.activate(|concept| modal.open(concept));
            }
            Command::ShowPipeline => {
                info!("Switching to pipeline view");
                self.view = View::Pipeline;
            }
            Command::StartLearning => self.modal.start(),
            Command::CloseModal => self.modal.close(),
            Command::TogglePlay => self.pipeline.toggle(),
            Command::Next => self.pipeline.next(),
            Command::Prev => self.pipeline.prev(),
            Command::Reset => self.pipeline.reset(),
            Command::Jump(index) => self.pipeline.jump(index),
            Command::Back => {
                info!("Switching to catalog view");
                self.pipeline.reset();
                self.view = View::Catalog;
                self.catalog.restart_reveal();
            }
        }
    }

    /// Route a timer tick to its owner. Returns true if a redraw is needed.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        match tick.slot {
            TimerSlot::Step | TimerSlot::Detail | TimerSlot::ModalClear => {
                self.modal.on_tick(tick)
            }
            TimerSlot::Pipeline | TimerSlot::PipelineTokens => self.pipeline.on_tick(tick),
            TimerSlot::Frame => {
                self.beat = self.beat.wrapping_add(1);
                true
            }
        }
    }

    fn needs_frames(&self) -> bool {
        match self.view {
            View::Pipeline => true,
            View::Catalog => {
                self.modal.phase() == ModalPhase::Playing
                    || !self.catalog.reveal_complete(self.catalog.since_shown())
            }
        }
    }

    /// Frame clock; runs only while something on screen moves on its own
    pub fn frame_plan(&self) -> TimerPlan {
        let mut plan = TimerPlan::new(0);
        if self.needs_frames() {
            plan.push(TimerSpec::every(TimerSlot::Frame, self.frame_interval));
        }
        plan
    }
}

/// One scheduler per timer owner
pub struct Timers {
    modal: Scheduler,
    pipeline: Scheduler,
    frame: Scheduler,
}

impl Timers {
    pub fn new(tick_tx: Sender<Tick>) -> Self {
        Self {
            modal: Scheduler::new("modal", tick_tx.clone()),
            pipeline: Scheduler::new("pipeline", tick_tx.clone()),
            frame: Scheduler::new("frame", tick_tx),
        }
    }

    /// Bring running timers in line with the app's current state
    pub fn sync(&mut self, app: &App) {
        self.modal.apply(&app.modal.timer_plan());
        self.pipeline.apply(&app.pipeline.timer_plan());
        self.frame.apply(&app.frame_plan());
    }

    pub fn active(&self) -> Vec<TimerSlot> {
        let mut slots = self.modal.active();
        slots.extend(self.pipeline.active());
        slots.extend(self.frame.active());
        slots
    }

    pub fn cancel_all(&mut self) {
        self.modal.cancel_all();
        self.pipeline.cancel_all();
        self.frame.cancel_all();
    }
}
