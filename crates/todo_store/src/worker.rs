use std::sync::mpsc;
use std::thread;

use todo_core::Todo;
use todo_logging::todo_debug;

use crate::kv::KeyValueStore;
use crate::store::TodoStore;

enum PersistCommand {
    Write(Vec<Todo>),
    Flush(mpsc::Sender<()>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistEvent {
    Saved { count: usize },
    Failed { message: String },
}

/// Fire-and-forget writer: one background thread applies snapshots in the
/// order they were sent.
pub struct PersistHandle {
    cmd_tx: mpsc::Sender<PersistCommand>,
    event_rx: mpsc::Receiver<PersistEvent>,
}

impl PersistHandle {
    pub fn new<S>(store: TodoStore<S>) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                handle_command(&store, command, &event_tx);
            }
            todo_debug!("Persist worker for {:?} stopped", store.key());
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a full snapshot and returns immediately.
    pub fn persist(&self, todos: Vec<Todo>) {
        let _ = self.cmd_tx.send(PersistCommand::Write(todos));
    }

    /// Blocks until every snapshot queued so far has been handled.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.cmd_tx.send(PersistCommand::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    pub fn try_recv(&self) -> Option<PersistEvent> {
        self.event_rx.try_recv().ok()
    }
}

fn handle_command<S: KeyValueStore>(
    store: &TodoStore<S>,
    command: PersistCommand,
    event_tx: &mpsc::Sender<PersistEvent>,
) {
    match command {
        PersistCommand::Write(todos) => {
            let event = match store.persist(&todos) {
                Ok(()) => PersistEvent::Saved { count: todos.len() },
                Err(err) => PersistEvent::Failed {
                    message: err.to_string(),
                },
            };
            let _ = event_tx.send(event);
        }
        PersistCommand::Flush(ack) => {
            let _ = ack.send(());
        }
    }
}
