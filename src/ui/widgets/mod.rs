// Building blocks of the filterable product table: the search bar on top,
// the product table below, and the two row kinds the table is made of.
pub mod product_table;
pub mod rows;
pub mod search_bar;
