// Primer client
//
// Terminal front end: the animation engine, the views and the event loop.
// Everything runs on one current-thread tokio runtime. Timers and terminal
// input feed two channels that the loop selects over; state only changes on
// the loop.

pub mod animation;
pub mod app;
pub mod catalog_view;
pub mod keys;
pub mod modal;
pub mod pipeline;
pub mod timer;
pub mod ui;

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event};
use log::{error, info, warn};
use primer_utils::config::Config;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, Sender};

use crate::app::{App, Timers};

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Run the interactive app until the user quits.
///
/// The terminal is restored before returning, on success and on error.
pub fn start_client(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    info!("Starting interactive session on {:?}", config.start_view);
    let mut terminal = ratatui::init();
    let result = runtime.block_on(event_loop(&mut terminal, config));
    ratatui::restore();

    match &result {
        Ok(()) => info!("Session ended"),
        Err(e) => error!("Session failed: {e:#}"),
    }
    result
}

/// Read terminal events on a blocking thread and forward them.
///
/// The thread exits once the receiving side is gone.
fn spawn_input_thread(input_tx: Sender<Event>) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("primer-input".to_string())
        .spawn(move || loop {
            if input_tx.is_closed() {
                break;
            }
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if input_tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        })
        .context("failed to spawn the input thread")
}

async fn event_loop(terminal: &mut DefaultTerminal, config: &Config) -> Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::channel(64);
    let (input_tx, mut input_rx) = mpsc::channel(32);
    let input = spawn_input_thread(input_tx)?;

    let mut app = App::new(config);
    let mut timers = Timers::new(tick_tx);
    timers.sync(&app);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(anyhow::Error::new(e).context("failed to draw the screen"));
        }

        tokio::select! {
            ev = input_rx.recv() => match ev {
                Some(Event::Key(key)) => app.handle_key(key),
                // resize and the rest only need a redraw
                Some(_) => {}
                None => break Err(anyhow!("terminal input closed")),
            },
            Some(tick) = tick_rx.recv() => {
                app.on_tick(tick);
            }
        }

        if app.should_quit() {
            break Ok(());
        }
        timers.sync(&app);
    };

    timers.cancel_all();
    drop(input_rx);
    if input.join().is_err() {
        warn!("Input thread panicked");
    }
    result
}
