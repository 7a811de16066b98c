pub const TITLE: &str = "TodoList";
pub const PROMPT_HINT: &str = "Type `help` for commands.";
pub const LOADING_TEXT: &str = "Loading todos...";
pub const EMPTY_LIST_TEXT: &str = "  (nothing to do)";

pub const HELP_TEXT: &str = "\
Commands:
  add <title>      add a new todo
  toggle <id>      mark done / not done (alias: t)
  rm <id>          delete a todo (alias: delete)
  theme            switch light/dark
  list             show the list again
  quit             save and exit";

pub const MARKER_DONE: &str = "[x]";
pub const MARKER_OPEN: &str = "[ ]";
