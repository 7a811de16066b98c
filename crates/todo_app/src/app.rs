use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use todo_core::{update, AppState, Msg};
use todo_logging::{todo_debug, todo_info, todo_warn};
use todo_store::{FileKeyValueStore, LoadedTodos, TodoStore};

use crate::config::{self, AppConfig};
use crate::effects::{spawn_initial_load, EffectRunner};
use crate::logging;
use crate::ui::constants::{HELP_TEXT, PROMPT_HINT};
use crate::ui::input::{parse_command, Command};
use crate::ui::render::{render, unknown_hint};

pub enum AppEvent {
    Command(Command),
    Loaded(LoadedTodos),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = config::resolve();
    logging::initialize(config.log_destination, config.log_level());
    if let Some(err) = config_error {
        todo_warn!("{}; using default configuration", err);
    }
    todo_info!(
        "Starting todo_app data_dir={:?} key={:?}",
        config.data_dir,
        config.storage_key
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_initial_load(open_store(&config), event_tx.clone());
    spawn_input_reader(event_tx);

    let mut app = App::new(
        AppState::with_color_scheme(config.color_scheme()),
        EffectRunner::new(open_store(&config)),
    );
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&event_rx, &mut out).context("terminal output failed")
}

fn open_store(config: &AppConfig) -> TodoStore<FileKeyValueStore> {
    TodoStore::with_key(
        FileKeyValueStore::new(config.data_dir.clone()),
        config.storage_key.clone(),
    )
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    todo_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if event_tx.send(AppEvent::Command(parse_command(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Owns the state on the UI thread. Commands typed before the initial load
/// completes are held back and replayed on top of the loaded list.
struct App {
    state: AppState,
    effects: EffectRunner,
    pending: VecDeque<Command>,
    input_closed: bool,
    quit: bool,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            pending: VecDeque::new(),
            input_closed: false,
            quit: false,
        }
    }

    fn run(&mut self, events: &mpsc::Receiver<AppEvent>, out: &mut impl Write) -> io::Result<()> {
        self.render(out)?;
        writeln!(out, "{PROMPT_HINT}")?;

        while let Ok(event) = events.recv() {
            match event {
                AppEvent::Loaded(LoadedTodos { todos, read_failed }) => {
                    self.dispatch(Msg::TodosLoaded { todos, read_failed });
                    self.render_if_dirty(out)?;
                    while let Some(command) = self.pending.pop_front() {
                        self.handle_command(command, out)?;
                        if self.quit {
                            break;
                        }
                    }
                }
                AppEvent::Command(command) if !self.state.is_loaded() => {
                    todo_debug!("Holding {:?} until the list is loaded", command);
                    self.pending.push_back(command);
                }
                AppEvent::Command(command) => self.handle_command(command, out)?,
                AppEvent::InputClosed => self.input_closed = true,
            }
            self.effects.drain_events();

            if self.quit || (self.input_closed && self.state.is_loaded()) {
                break;
            }
        }

        self.effects.flush();
        todo_info!("todo_app exiting");
        Ok(())
    }

    fn handle_command(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Quit => self.quit = true,
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::List => self.render(out)?,
            Command::Unknown(text) => writeln!(out, "{}", unknown_hint(&text))?,
            Command::Empty => {}
            command => {
                for msg in command.into_msgs() {
                    self.dispatch(msg);
                }
                self.render_if_dirty(out)?;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn render_if_dirty(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.state.consume_dirty() {
            self.render(out)?;
        }
        Ok(())
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for line in render(&self.state.view()) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
