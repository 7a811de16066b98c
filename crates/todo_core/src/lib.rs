//! Todo core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod seed;
mod state;
mod theme;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use seed::seed_todos;
pub use state::{sort_newest_first, AppState, Todo, TodoId};
pub use theme::ColorScheme;
pub use update::update;
pub use view_model::{AppViewModel, TodoRowView};
