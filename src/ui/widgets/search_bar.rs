use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::types::{App, Focus};

pub const PLACEHOLDER: &str = "Search...";
pub const CHECKBOX_LABEL: &str = "Only show products in stock";

/// What the search bar asks its owner to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarEvent {
    FilterChanged(String),
    InStockOnlyChanged(bool),
}

/// Text box plus "in stock only" checkbox. Holds no state of its own: the
/// displayed values are always the ones passed in, and every edit is reported
/// as a [`SearchBarEvent`] computed from them.
pub struct SearchBar<'a> {
    pub filter_text: &'a str,
    pub in_stock_only: bool,
    pub focus: Focus,
}

impl<'a> SearchBar<'a> {
    pub fn from_app(app: &'a App) -> Self {
        SearchBar {
            filter_text: &app.filter.filter_text,
            in_stock_only: app.filter.in_stock_only,
            focus: app.focus,
        }
    }

    /// Translate a key press into the event for the owner, if any.
    pub fn on_key(&self, key: KeyEvent) -> Option<SearchBarEvent> {
        match self.focus {
            Focus::SearchText => self.on_text_key(key),
            Focus::InStockCheckbox => self.on_checkbox_key(key),
        }
    }

    fn on_text_key(&self, key: KeyEvent) -> Option<SearchBarEvent> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_text()
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                let mut text = self.filter_text.to_string();
                text.push(c);
                Some(SearchBarEvent::FilterChanged(text))
            }
            KeyCode::Backspace => {
                let mut text = self.filter_text.to_string();
                text.pop()?;
                Some(SearchBarEvent::FilterChanged(text))
            }
            KeyCode::Esc => self.clear_text(),
            _ => None,
        }
    }

    fn on_checkbox_key(&self, key: KeyEvent) -> Option<SearchBarEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                Some(SearchBarEvent::InStockOnlyChanged(!self.in_stock_only))
            }
            _ => None,
        }
    }

    fn clear_text(&self) -> Option<SearchBarEvent> {
        if self.filter_text.is_empty() {
            None
        } else {
            Some(SearchBarEvent::FilterChanged(String::new()))
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Text input
                Constraint::Length(1), // Checkbox
            ])
            .split(area);

        self.render_input(f, chunks[0]);
        self.render_checkbox(f, chunks[1]);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::SearchText;
        let text = if self.filter_text.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.filter_text, Style::default().fg(Color::Yellow))
        };
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Search"),
        );
        f.render_widget(input, area);

        if focused {
            // Display width, so wide glyphs move the cursor two columns
            let offset = Span::raw(self.filter_text).width();
            let last_column = usize::from(area.width.saturating_sub(3));
            let offset = u16::try_from(offset.min(last_column)).unwrap_or(0);
            f.set_cursor(area.x.saturating_add(1 + offset), area.y.saturating_add(1));
        }
    }

    fn render_checkbox(&self, f: &mut Frame, area: Rect) {
        let mark = if self.in_stock_only { "[x]" } else { "[ ]" };
        let style = if self.focus == Focus::InStockCheckbox {
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", mark), style),
            Span::styled(CHECKBOX_LABEL, style),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
