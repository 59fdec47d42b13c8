use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, ProductId};

/// A product as read back from storage, with its categories resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: NaiveDateTime,
    /// Associated categories, unique by id, in the order they were saved.
    pub categories: Vec<Category>,
}

/// Mutable write-side product.
///
/// A draft is either transient (`id` is `None`, the row does not exist yet) or
/// an existing-reference handle for a row that is assumed to exist. Building
/// a handle never touches storage: a missing row is only reported when the
/// draft is saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: NaiveDateTime,
    pub categories: Vec<CategoryId>,
}

impl ProductDraft {
    /// An empty product that has not been persisted.
    pub fn transient() -> Self {
        Self::default()
    }

    /// An identity-only handle for the product stored under `id`.
    pub fn existing(id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Replaces the category association set.
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn set_categories<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = CategoryId>,
    {
        self.categories.clear();
        for id in ids {
            if !self.categories.contains(&id) {
                self.categories.push(id);
            }
        }
    }
}
