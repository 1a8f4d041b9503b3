use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub rating: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Books rated at least [`MIN_RATING`], in their original order.
pub fn filter_by_rating(items: &[Book]) -> Vec<Book> {
    items
        .iter()
        .filter(|book| book.rating >= MIN_RATING)
        .cloned()
        .collect()
}

/// The priciest product, or `None` for an empty slice.
/// Ties go to the product that appears first.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|prev, curr| if curr.price > prev.price { curr } else { prev })
}
