use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, RepositoryError, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let items = categories::table
                .order(categories::id.asc())
                .load::<DbCategory>(conn)?
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<Category>, _>>()?;
            Ok(items)
        })
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let category = categories::table
                .find(id.get())
                .first::<DbCategory>(conn)
                .optional()?;

            let category = category.map(TryInto::try_into).transpose()?;
            Ok(category)
        })
    }
}
