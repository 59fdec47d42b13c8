use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{Product as DomainProduct, ProductDraft};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: NaiveDateTime,
}

/// Insertable/patchable scalar columns of [`Product`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub img_url: &'a str,
    pub date: NaiveDateTime,
}

impl<'a> From<&'a ProductDraft> for ProductChangeset<'a> {
    fn from(draft: &'a ProductDraft) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
            price: draft.price,
            img_url: &draft.img_url,
            date: draft.date,
        }
    }
}

impl Product {
    /// Builds the domain product from this row and its resolved categories.
    pub fn into_domain(
        self,
        categories: Vec<DomainCategory>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            date: self.date,
            categories,
        })
    }
}
