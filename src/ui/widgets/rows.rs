use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Cell, Row},
};

use crate::types::Product;

/// Section header for a category. Tables have no column span, so the label
/// sits in the first column and the second is left blank.
pub fn category_row(category: &str) -> Row<'_> {
    Row::new(vec![
        Cell::from(Span::styled(
            category,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(""),
    ])
}

/// Name and price. Out-of-stock names are drawn in red.
pub fn product_row(product: &Product) -> Row<'_> {
    let name = if product.stocked {
        Cell::from(product.name.as_str())
    } else {
        Cell::from(Span::styled(
            product.name.as_str(),
            Style::default().fg(Color::Red),
        ))
    };
    Row::new(vec![name, Cell::from(product.price.as_str())])
}
