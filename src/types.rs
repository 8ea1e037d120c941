use serde::{Deserialize, Serialize};

use crate::table::{product_rows, TableRow};
use crate::ui::widgets::search_bar::SearchBarEvent;

/// A single catalogue entry. Price is kept pre-formatted ("$1") and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub price: String,
    pub stocked: bool,
    pub name: String,
}

/// Search text and checkbox state owned by the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub filter_text: String,
    pub in_stock_only: bool,
}

/// Which search bar control receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchText,
    InStockCheckbox,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::SearchText => Focus::InStockCheckbox,
            Focus::InStockCheckbox => Focus::SearchText,
        }
    }
}

/// The filterable product table: read-only products plus the filter state
/// that the search bar drives.
pub struct App {
    products: Vec<Product>,
    pub filter: FilterState,
    pub focus: Focus,
}

impl App {
    pub fn new(products: Vec<Product>) -> Self {
        App {
            products,
            filter: FilterState::default(),
            focus: Focus::default(),
        }
    }

    pub fn with_filter(products: Vec<Product>, filter: FilterState) -> Self {
        App {
            filter,
            ..App::new(products)
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Apply an event reported by the search bar.
    pub fn apply(&mut self, event: SearchBarEvent) {
        match event {
            SearchBarEvent::FilterChanged(text) => {
                log::debug!("filter text changed to {:?}", text);
                self.filter.filter_text = text;
            }
            SearchBarEvent::InStockOnlyChanged(checked) => {
                log::debug!("in-stock-only changed to {}", checked);
                self.filter.in_stock_only = checked;
            }
        }
    }

    /// Rows for the current filter state, recomputed on every call.
    pub fn rows(&self) -> Vec<TableRow<'_>> {
        product_rows(
            &self.products,
            &self.filter.filter_text,
            self.filter.in_stock_only,
        )
    }
}
