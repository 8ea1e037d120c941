use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::types::{App, Focus};
use crate::ui::widgets::search_bar::SearchBar;

/// Handle a key press. Returns true when the app should quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            false
        }
        // In the text box 'q' is just a letter
        KeyCode::Char('q') if app.focus == Focus::InStockCheckbox => true,
        _ => {
            let event = SearchBar::from_app(app).on_key(key);
            if let Some(event) = event {
                app.apply(event);
                log::debug!(
                    "{} rows visible for {:?}",
                    app.rows().len(),
                    app.filter
                );
            }
            false
        }
    }
}
