use diesel::prelude::*;

/// Row of the `product_categories` association table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::product_categories)]
pub struct ProductCategory {
    pub product_id: i32,
    pub category_id: i32,
    /// Display position of the category within the product.
    pub position: i32,
}
