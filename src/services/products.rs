use crate::domain::product::ProductDraft;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::products::ProductDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// One page of products, sorted and windowed by the repository.
///
/// Row order and the total count are passed through unchanged; each row is
/// only flattened into a [`ProductDto`].
pub fn find_all_paged<R>(request: PageRequest, repo: &R) -> ServiceResult<Page<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products(&request) {
        Ok((total, products)) => Ok(Page::new(products, &request, total).map(ProductDto::from)),
        Err(e) => {
            log::error!("Failed to list products for {request}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_by_id<R>(id: i32, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let product_id = ProductId::new(id).map_err(|_| ServiceError::product_not_found(id))?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::product_not_found(id)),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Creates a product from `dto`, ignoring any id it carries.
///
/// Returns the stored product with its server-assigned id. Unknown category
/// ids fail with [`ServiceError::NotFound`] and nothing is written.
pub fn insert<R>(dto: ProductDto, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    let mut draft = ProductDraft::transient();
    copy_dto_to_entity(dto, &mut draft)?;

    match repo.save_product(&draft) {
        Ok(product) => Ok(product.into()),
        Err(RepositoryError::UnresolvedReference { table, id }) => {
            Err(ServiceError::NotFound { resource: table, id })
        }
        Err(e) => {
            log::error!("Failed to insert product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrites product `id` with `dto`.
///
/// The target is addressed through an existing-reference handle, so no read
/// happens up front; a missing row surfaces from the save itself. The
/// category set is replaced, never merged.
pub fn update<R>(id: i32, dto: ProductDto, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    let product_id = ProductId::new(id).map_err(|_| ServiceError::product_not_found(id))?;

    let mut draft = repo.product_reference(product_id);
    copy_dto_to_entity(dto, &mut draft)?;

    match repo.save_product(&draft) {
        Ok(product) => Ok(product.into()),
        Err(RepositoryError::NotFound) => Err(ServiceError::product_not_found(id)),
        Err(RepositoryError::UnresolvedReference { table, id }) => {
            Err(ServiceError::NotFound { resource: table, id })
        }
        Err(e) => {
            log::error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Removes product `id`.
///
/// Absent products fail with [`ServiceError::NotFound`]; products still
/// referenced elsewhere fail with [`ServiceError::IntegrityViolation`] and are
/// left in place.
pub fn delete<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = ProductId::new(id).map_err(|_| ServiceError::product_not_found(id))?;

    match repo.delete_product(product_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::product_not_found(id)),
        Err(RepositoryError::IntegrityViolation(cause)) => {
            log::warn!("Refused to delete product {id}: {cause}");
            Err(ServiceError::IntegrityViolation(format!(
                "product {id} is referenced by other records"
            )))
        }
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Copies every scalar of `dto` onto `draft` and rebuilds its category set.
///
/// Category ids are checked before anything is written, so a rejected DTO
/// leaves the draft untouched. Non-positive ids can never exist and are
/// reported as missing categories.
pub fn copy_dto_to_entity(dto: ProductDto, draft: &mut ProductDraft) -> ServiceResult<()> {
    let category_ids = dto
        .categories
        .iter()
        .map(|c| CategoryId::new(c.id).map_err(|_| ServiceError::category_not_found(c.id)))
        .collect::<ServiceResult<Vec<_>>>()?;

    draft.name = dto.name;
    draft.description = dto.description;
    draft.price = dto.price;
    draft.img_url = dto.img_url;
    draft.date = dto.date;
    draft.set_categories(category_ids);
    Ok(())
}
