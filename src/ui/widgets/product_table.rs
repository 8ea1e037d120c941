use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::table::TableRow;
use crate::ui::widgets::rows::{category_row, product_row};

pub const HEADER: [&str; 2] = ["Name", "Price"];

/// Draw the filtered rows under the fixed Name / Price header.
pub fn render(f: &mut Frame, area: Rect, rows: &[TableRow]) {
    let header_cells: Vec<_> = HEADER
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    let header = Row::new(header_cells);

    let body = rows.iter().map(|row| match row {
        TableRow::Category { category } => category_row(category),
        TableRow::Product { product } => product_row(product),
    });

    let visible = rows
        .iter()
        .filter(|row| matches!(row, TableRow::Product { .. }))
        .count();

    let widths = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Products ({})", visible)),
        );
    f.render_widget(table, area);
}
