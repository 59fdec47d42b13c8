use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductDraft};
use crate::domain::types::{CategoryId, ProductId};
use crate::models::category::Category as DbCategory;
use crate::models::product::{Product as DbProduct, ProductChangeset};
use crate::models::product_category::ProductCategory;
use crate::pagination::{PageRequest, ProductSortField, SortDirection};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = products::table.count().get_result::<i64>(conn)? as usize;

            let mut items = products::table.into_boxed::<Sqlite>();
            for order in &request.sort {
                items = match (order.field, order.direction) {
                    (ProductSortField::Id, SortDirection::Asc) => {
                        items.then_order_by(products::id.asc())
                    }
                    (ProductSortField::Id, SortDirection::Desc) => {
                        items.then_order_by(products::id.desc())
                    }
                    (ProductSortField::Name, SortDirection::Asc) => {
                        items.then_order_by(products::name.asc())
                    }
                    (ProductSortField::Name, SortDirection::Desc) => {
                        items.then_order_by(products::name.desc())
                    }
                    (ProductSortField::Price, SortDirection::Asc) => {
                        items.then_order_by(products::price.asc())
                    }
                    (ProductSortField::Price, SortDirection::Desc) => {
                        items.then_order_by(products::price.desc())
                    }
                    (ProductSortField::Date, SortDirection::Asc) => {
                        items.then_order_by(products::date.asc())
                    }
                    (ProductSortField::Date, SortDirection::Desc) => {
                        items.then_order_by(products::date.desc())
                    }
                };
            }
            // Ties fall back to insertion order so pages never overlap.
            items = items.then_order_by(products::id.asc());

            let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
            let limit = i64::try_from(request.size).unwrap_or(i64::MAX);

            let rows = items.offset(offset).limit(limit).load::<DbProduct>(conn)?;
            let items = with_categories(conn, rows)?;

            Ok((total, items))
        })
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| load_product(conn, id.get()))
    }
}

impl ProductWriter for DieselRepository {
    fn save_product(&self, draft: &ProductDraft) -> RepositoryResult<Product> {
        use crate::schema::{product_categories, products};

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let product_id = match draft.id {
                Some(id) => {
                    let affected = diesel::update(products::table.find(id.get()))
                        .set(ProductChangeset::from(draft))
                        .execute(conn)?;
                    if affected == 0 {
                        return Err(RepositoryError::NotFound);
                    }
                    diesel::delete(
                        product_categories::table
                            .filter(product_categories::product_id.eq(id.get())),
                    )
                    .execute(conn)?;
                    id.get()
                }
                None => diesel::insert_into(products::table)
                    .values(ProductChangeset::from(draft))
                    .returning(products::id)
                    .get_result::<i32>(conn)?,
            };

            ensure_categories_exist(conn, &draft.categories)?;

            let links = draft
                .categories
                .iter()
                .enumerate()
                .map(|(position, category_id)| ProductCategory {
                    product_id,
                    category_id: category_id.get(),
                    position: position as i32,
                })
                .collect::<Vec<_>>();
            if !links.is_empty() {
                diesel::insert_into(product_categories::table)
                    .values(&links)
                    .execute(conn)?;
            }

            load_product(conn, product_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::delete(products::table.find(id.get())).execute(conn)?;
            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}

fn load_product(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<Option<Product>> {
    use crate::schema::products;

    let row = products::table
        .find(id)
        .first::<DbProduct>(conn)
        .optional()?;

    match row {
        Some(row) => Ok(with_categories(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

/// Resolve the categories of every row with a single query.
fn with_categories(
    conn: &mut SqliteConnection,
    rows: Vec<DbProduct>,
) -> RepositoryResult<Vec<Product>> {
    use crate::schema::{categories, product_categories};

    let ids = rows.iter().map(|row| row.id).collect::<Vec<_>>();

    let links = product_categories::table
        .inner_join(categories::table)
        .filter(product_categories::product_id.eq_any(&ids))
        .order((
            product_categories::product_id.asc(),
            product_categories::position.asc(),
        ))
        .select((product_categories::product_id, categories::id, categories::name))
        .load::<(i32, i32, String)>(conn)?;

    let mut by_product: HashMap<i32, Vec<Category>> = HashMap::new();
    for (product_id, id, name) in links {
        let category = Category::try_from(DbCategory { id, name })?;
        by_product.entry(product_id).or_default().push(category);
    }

    let items = rows
        .into_iter()
        .map(|row| {
            let categories = by_product.remove(&row.id).unwrap_or_default();
            row.into_domain(categories)
        })
        .collect::<Result<Vec<Product>, _>>()?;
    Ok(items)
}

fn ensure_categories_exist(conn: &mut SqliteConnection, ids: &[CategoryId]) -> RepositoryResult<()> {
    use crate::schema::categories;

    if ids.is_empty() {
        return Ok(());
    }

    let wanted = ids.iter().map(|id| id.get()).collect::<Vec<_>>();
    let found = categories::table
        .filter(categories::id.eq_any(&wanted))
        .select(categories::id)
        .load::<i32>(conn)?;

    match wanted.into_iter().find(|id| !found.contains(id)) {
        Some(id) => Err(RepositoryError::UnresolvedReference {
            table: "category",
            id,
        }),
        None => Ok(()),
    }
}
