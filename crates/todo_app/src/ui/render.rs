use todo_core::{AppViewModel, ColorScheme, TodoRowView};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.todos.len() + 3);
    lines.push(format!(
        "== {TITLE} ==  ({} {})",
        scheme_icon(view.color_scheme),
        view.color_scheme
    ));

    if !view.loaded {
        lines.push(LOADING_TEXT.to_string());
        return lines;
    }

    if view.todos.is_empty() {
        lines.push(EMPTY_LIST_TEXT.to_string());
    } else {
        lines.extend(view.todos.iter().map(format_row));
    }

    lines.push(format!(
        "{} items, {} done",
        view.todo_count, view.completed_count
    ));
    lines
}

fn format_row(row: &TodoRowView) -> String {
    let marker = if row.completed { MARKER_DONE } else { MARKER_OPEN };
    format!("  #{:<4} {marker} {}", row.id, row.title)
}

fn scheme_icon(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Light => "sun",
        ColorScheme::Dark => "moon",
    }
}

pub fn unknown_hint(text: &str) -> String {
    format!("Unrecognized: {text:?}. {PROMPT_HINT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, title: &str, completed: bool) -> TodoRowView {
        TodoRowView {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn renders_rows_newest_first_with_markers() {
        let view = AppViewModel {
            todos: vec![row(2, "Walk", true), row(1, "Read", false)],
            todo_count: 2,
            completed_count: 1,
            loaded: true,
            ..AppViewModel::default()
        };

        assert_eq!(
            render(&view),
            vec![
                "== TodoList ==  (sun light)".to_string(),
                "  #2    [x] Walk".to_string(),
                "  #1    [ ] Read".to_string(),
                "2 items, 1 done".to_string(),
            ]
        );
    }

    #[test]
    fn dark_scheme_shows_moon() {
        let view = AppViewModel {
            color_scheme: ColorScheme::Dark,
            loaded: true,
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert_eq!(lines[0], "== TodoList ==  (moon dark)");
        assert_eq!(lines[1], EMPTY_LIST_TEXT);
    }

    #[test]
    fn not_loaded_shows_loading_only() {
        let lines = render(&AppViewModel::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], LOADING_TEXT);
    }
}
