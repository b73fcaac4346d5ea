//! Product search results.

use serde::Serialize;

use skateshop_core::ProductId;

/// A product matched by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

/// Search matches sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductGroup {
    pub category: String,
    pub products: Vec<ProductSummary>,
}

impl ProductGroup {
    /// Group products by category, keeping categories in first-seen order and
    /// products in their incoming order within each category.
    #[must_use]
    pub fn group(products: Vec<ProductSummary>) -> Vec<Self> {
        let mut groups: Vec<Self> = Vec::new();

        for product in products {
            match groups.iter_mut().find(|g| g.category == product.category) {
                Some(group) => group.products.push(product),
                None => groups.push(Self {
                    category: product.category.clone(),
                    products: vec![product],
                }),
            }
        }

        groups
    }
}
