pub mod input;
pub mod terminal;
pub mod widgets;

use std::io;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use crate::types::App;
use widgets::{product_table, search_bar::SearchBar};

// Re-export the main public functions
pub use terminal::{restore_terminal, setup_terminal};

/// Draw one frame of the whole widget from the current state.
pub fn render_ui<B: Backend>(app: &App, terminal: &mut Terminal<B>) -> Result<(), io::Error> {
    terminal.draw(|f| render(f, app))?;
    Ok(())
}

/// Compose the frame: title, search bar, product table, footer.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title
                Constraint::Length(4), // Search bar
                Constraint::Min(0),    // Table
                Constraint::Length(3), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Block::default().title("Shelfscan").borders(Borders::ALL);
    f.render_widget(title, chunks[0]);

    SearchBar::from_app(app).render(f, chunks[1]);

    let rows = app.rows();
    product_table::render(f, chunks[2], &rows);

    render_footer(f, chunks[3]);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer_text = "type: search | Tab: switch field | Space: toggle | Esc/Ctrl-U: clear | Ctrl-C: quit";
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
