use std::sync::mpsc;
use std::thread;

use todo_core::Effect;
use todo_logging::{todo_debug, todo_info, todo_warn};
use todo_store::{KeyValueStore, PersistEvent, PersistHandle, TodoStore};

use crate::app::AppEvent;

pub struct EffectRunner {
    persist: PersistHandle,
}

impl EffectRunner {
    pub fn new<S>(store: TodoStore<S>) -> Self
    where
        S: KeyValueStore + 'static,
    {
        Self {
            persist: PersistHandle::new(store),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistTodos(todos) => {
                    todo_debug!("PersistTodos count={}", todos.len());
                    self.persist.persist(todos);
                }
            }
        }
    }

    /// Logs outcomes reported by the writer so far; never blocks.
    pub fn drain_events(&self) {
        while let Some(event) = self.persist.try_recv() {
            match event {
                PersistEvent::Saved { count } => todo_debug!("Saved {} todos", count),
                PersistEvent::Failed { message } => {
                    todo_warn!("Todos not saved, stored list may be stale: {}", message)
                }
            }
        }
    }

    pub fn flush(&self) {
        self.persist.flush();
        self.drain_events();
    }
}

/// Reads the stored list off the UI thread and posts it back as an event.
pub fn spawn_initial_load<S>(store: TodoStore<S>, event_tx: mpsc::Sender<AppEvent>)
where
    S: KeyValueStore + 'static,
{
    thread::spawn(move || {
        let loaded = store.load();
        todo_info!(
            "Initial load finished with {} todos (read_failed={})",
            loaded.todos.len(),
            loaded.read_failed
        );
        let _ = event_tx.send(AppEvent::Loaded(loaded));
    });
}
