use serde::Serialize;

use crate::types::Product;

/// One row of the product table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow<'a> {
    Category { category: &'a str },
    Product { product: &'a Product },
}

/// Case-insensitive substring match on the product name only.
pub fn name_matches(product: &Product, filter_text: &str) -> bool {
    product
        .name
        .to_lowercase()
        .contains(&filter_text.to_lowercase())
}

/// Build the visible rows in input order.
///
/// A category header is emitted whenever a visible product's category differs
/// from the previous visible product's. Products are never sorted, so the
/// input must already be grouped by category for each category to get a
/// single header.
pub fn product_rows<'a>(
    products: &'a [Product],
    filter_text: &str,
    in_stock_only: bool,
) -> Vec<TableRow<'a>> {
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in products {
        if !name_matches(product, filter_text) {
            continue;
        }
        if in_stock_only && !product.stocked {
            continue;
        }

        if last_category != Some(product.category.as_str()) {
            rows.push(TableRow::Category {
                category: &product.category,
            });
            last_category = Some(product.category.as_str());
        }
        rows.push(TableRow::Product { product });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_products;

    fn keys(rows: &[TableRow]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                TableRow::Category { category } => format!("# {}", category),
                TableRow::Product { product } => format!("{}/{}", product.name, product.price),
            })
            .collect()
    }

    fn visible_names<'a>(rows: &[TableRow<'a>]) -> Vec<&'a str> {
        rows.iter()
            .filter_map(|row| match row {
                TableRow::Product { product } => Some(product.name.as_str()),
                TableRow::Category { .. } => None,
            })
            .collect()
    }

    #[test]
    fn everything_visible_with_empty_filter() {
        let products = builtin_products();
        let rows = product_rows(&products, "", false);
        assert_eq!(
            keys(&rows),
            vec![
                "# Fruits",
                "Apple/$1",
                "Dragonfruit/$1",
                "Passionfruit/$2",
                "# Vegetables",
                "Spinach/$2",
                "Pumpkin/$4",
                "Peas/$1",
            ]
        );
    }

    #[test]
    fn in_stock_only_hides_unstocked() {
        let products = builtin_products();
        let rows = product_rows(&products, "", true);
        assert_eq!(
            keys(&rows),
            vec![
                "# Fruits",
                "Apple/$1",
                "Dragonfruit/$1",
                "# Vegetables",
                "Spinach/$2",
                "Peas/$1",
            ]
        );

        for text in ["", "p", "pumpkin", "fruit"] {
            let rows = product_rows(&products, text, true);
            assert!(rows.iter().all(|row| match row {
                TableRow::Product { product } => product.stocked,
                TableRow::Category { .. } => true,
            }));
        }
    }

    #[test]
    fn header_only_for_categories_with_visible_products() {
        let products = builtin_products();
        let rows = product_rows(&products, "fruit", false);
        assert_eq!(
            keys(&rows),
            vec!["# Fruits", "Dragonfruit/$1", "Passionfruit/$2"]
        );
    }

    #[test]
    fn no_match_yields_no_rows() {
        let products = builtin_products();
        assert!(product_rows(&products, "xyz", false).is_empty());
        assert!(product_rows(&products, "xyz", true).is_empty());
    }

    #[test]
    fn match_ignores_case() {
        let products = builtin_products();
        assert_eq!(
            product_rows(&products, "APPLE", false),
            product_rows(&products, "apple", false)
        );
        assert_eq!(visible_names(&product_rows(&products, "pEaS", false)), vec!["Peas"]);
    }

    #[test]
    fn match_is_on_name_only() {
        let products = builtin_products();
        assert!(product_rows(&products, "vegetables", false).is_empty());
        assert!(product_rows(&products, "$1", false).is_empty());
    }

    #[test]
    fn filtering_is_repeatable() {
        let products = builtin_products();
        for (text, stock) in [("", false), ("a", true), ("fruit", false), ("P", true)] {
            assert_eq!(
                product_rows(&products, text, stock),
                product_rows(&products, text, stock)
            );
        }
    }

    #[test]
    fn every_category_run_starts_with_one_header() {
        let products = builtin_products();
        for (text, stock) in [("", false), ("", true), ("a", false), ("p", true)] {
            let rows = product_rows(&products, text, stock);
            let mut current: Option<&str> = None;
            let mut previous_was_header = false;
            for row in &rows {
                match row {
                    TableRow::Category { category } => {
                        assert!(!previous_was_header, "two headers in a row");
                        assert_ne!(current, Some(*category), "repeated header");
                        current = Some(*category);
                        previous_was_header = true;
                    }
                    TableRow::Product { product } => {
                        assert_eq!(current, Some(product.category.as_str()));
                        previous_was_header = false;
                    }
                }
            }
        }
    }

    #[test]
    fn skipped_products_do_not_reset_category() {
        let products = builtin_products();
        // Pumpkin is hidden between Spinach and Peas; no second Vegetables header
        let rows = product_rows(&products, "", true);
        let headers = rows
            .iter()
            .filter(|row| matches!(row, TableRow::Category { category } if *category == "Vegetables"))
            .count();
        assert_eq!(headers, 1);
    }

    #[test]
    fn ungrouped_input_repeats_headers() {
        let products = vec![
            Product {
                category: "Fruits".to_string(),
                price: "$1".to_string(),
                stocked: true,
                name: "Apple".to_string(),
            },
            Product {
                category: "Vegetables".to_string(),
                price: "$2".to_string(),
                stocked: true,
                name: "Spinach".to_string(),
            },
            Product {
                category: "Fruits".to_string(),
                price: "$1".to_string(),
                stocked: true,
                name: "Dragonfruit".to_string(),
            },
        ];
        let rows = product_rows(&products, "", false);
        assert_eq!(
            keys(&rows),
            vec!["# Fruits", "Apple/$1", "# Vegetables", "Spinach/$2", "# Fruits", "Dragonfruit/$1"]
        );
    }

    #[test]
    fn rows_serialize_with_kind_tag() {
        let products = builtin_products();
        let rows = product_rows(&products, "apple", false);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["kind"], "category");
        assert_eq!(json[0]["category"], "Fruits");
        assert_eq!(json[1]["kind"], "product");
        assert_eq!(json[1]["product"]["name"], "Apple");
        assert_eq!(json[1]["product"]["price"], "$1");
    }
}
