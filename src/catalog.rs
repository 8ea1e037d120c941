use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::types::Product;

/// (category, price, stocked, name)
const BUILTIN: &[(&str, &str, bool, &str)] = &[
    ("Fruits", "$1", true, "Apple"),
    ("Fruits", "$1", true, "Dragonfruit"),
    ("Fruits", "$2", false, "Passionfruit"),
    ("Vegetables", "$2", true, "Spinach"),
    ("Vegetables", "$4", false, "Pumpkin"),
    ("Vegetables", "$1", true, "Peas"),
];

/// The six-product catalogue shown when no products file is given.
pub fn builtin_products() -> Vec<Product> {
    BUILTIN
        .iter()
        .map(|&(category, price, stocked, name)| Product {
            category: category.to_string(),
            price: price.to_string(),
            stocked,
            name: name.to_string(),
        })
        .collect()
}

/// Load a JSON array of products, rejecting anything the table can't show.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let contents = fs::read_to_string(path)?;
    let products = parse_products(&contents).map_err(|source| AppError::ProductsFile {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&products)?;
    log::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

fn parse_products(contents: &str) -> serde_json::Result<Vec<Product>> {
    serde_json::from_str(contents)
}

/// Check the fields the table relies on: non-empty text and unique names.
pub fn validate(products: &[Product]) -> Result<()> {
    let mut names = HashSet::new();
    for (index, product) in products.iter().enumerate() {
        let missing = if product.name.trim().is_empty() {
            Some("name")
        } else if product.category.trim().is_empty() {
            Some("category")
        } else if product.price.trim().is_empty() {
            Some("price")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(AppError::InvalidProduct {
                index,
                reason: format!("empty {}", field),
            });
        }
        if !names.insert(product.name.as_str()) {
            return Err(AppError::InvalidProduct {
                index,
                reason: format!("duplicate name {:?}", product.name),
            });
        }
    }
    Ok(())
}

/// True when every category occupies one contiguous run.
pub fn is_grouped(products: &[Product]) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut last: Option<&str> = None;
    for product in products {
        let category = product.category.as_str();
        if last != Some(category) {
            if !seen.insert(category) {
                return false;
            }
            last = Some(category);
        }
    }
    true
}
