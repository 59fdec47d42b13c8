use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::product::{Product, ProductDraft};
use crate::domain::types::{CategoryId, ProductId};
use crate::pagination::PageRequest;

pub mod category;
pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// Every method runs in a single transaction: reads in a deferred one so the
/// count and the rows come from the same snapshot, writes in an immediate one
/// that takes the write lock before the first statement.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// Return the total number of products and the rows of the requested
    /// page, ordered by the request's sort keys.
    fn list_products(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product with its categories.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities and their category associations.
pub trait ProductWriter {
    /// Existing-reference handle for `id`.
    ///
    /// Performs no I/O. Whether the row exists is only checked by
    /// [`ProductWriter::save_product`].
    fn product_reference(&self, id: ProductId) -> ProductDraft {
        ProductDraft::existing(id)
    }
    /// Insert a transient draft or overwrite the row a handle points at,
    /// replacing its category associations.
    ///
    /// Fails with [`RepositoryError::NotFound`] when a handle's row is gone and
    /// with [`RepositoryError::UnresolvedReference`] when a category is unknown.
    fn save_product(&self, draft: &ProductDraft) -> RepositoryResult<Product>;
    /// Remove a product.
    ///
    /// Fails with [`RepositoryError::NotFound`] or, when other rows still
    /// reference the product, [`RepositoryError::IntegrityViolation`].
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category in ascending id order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}
