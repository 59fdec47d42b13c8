use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::dto::categories::CategoryDto;

/// Externally visible product, flattened from [`Product`].
///
/// `id` is `None` on requests that create a product and is ignored on every
/// write path; the server assigns and addresses ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    /// Category ids as a set, for order-insensitive comparisons.
    pub fn category_ids(&self) -> BTreeSet<i32> {
        self.categories.iter().map(|c| c.id).collect()
    }
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: Some(value.id.get()),
            name: value.name,
            description: value.description,
            price: value.price,
            img_url: value.img_url,
            date: value.date,
            categories: value.categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}
