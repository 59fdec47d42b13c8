use pushkind_catalog::dto::categories::CategoryDto;
use pushkind_catalog::dto::products::ProductDto;
use pushkind_catalog::pagination::{PageRequest, ProductSortField, SortOrder};
use pushkind_catalog::repository::DieselRepository;
use pushkind_catalog::services::{ServiceError, categories, products};

mod common;

use common::{BOOKS, COMPUTERS, DEPENDENT_ID, EXISTING_ID, NON_EXISTING_ID, TOTAL_PRODUCTS};

fn dto(name: &str, category_ids: &[i32]) -> ProductDto {
    ProductDto {
        id: None,
        name: name.to_string(),
        description: "Good phone".to_string(),
        price: 800.0,
        img_url: "https://img.example.com/phone.jpg".to_string(),
        date: common::seed_date(),
        categories: category_ids
            .iter()
            .map(|id| CategoryDto {
                id: *id,
                name: String::new(),
            })
            .collect(),
    }
}

#[test]
fn find_all_paged_returns_sorted_page() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let request = PageRequest::new(0, 12).sorted_by(SortOrder::asc(ProductSortField::Name));
    let page = products::find_all_paged(request, &repo).expect("should list products");

    assert_eq!(page.total_elements, TOTAL_PRODUCTS);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content[0].name, "Macbook Pro");
    assert_eq!(page.content[1].name, "PC Gamer");
    assert_eq!(page.content[2].name, "PC Gamer Alfa");
}

#[test]
fn find_all_paged_past_the_end_is_empty() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let page = products::find_all_paged(PageRequest::new(50, 10), &repo)
        .expect("should list products");

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, TOTAL_PRODUCTS);
}

#[test]
fn find_by_id_maps_categories() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let product = products::find_by_id(EXISTING_ID, &repo).expect("should find product");
    assert_eq!(product.id, Some(EXISTING_ID));
    assert_eq!(
        product.categories,
        vec![CategoryDto {
            id: BOOKS,
            name: "Books".to_string()
        }]
    );

    assert_eq!(
        products::find_by_id(NON_EXISTING_ID, &repo),
        Err(ServiceError::product_not_found(NON_EXISTING_ID))
    );
}

#[test]
fn insert_then_find_returns_same_product() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let mut input = dto("Phone", &[COMPUTERS]);
    input.id = Some(EXISTING_ID);
    let saved = products::insert(input, &repo).expect("should insert product");

    assert_eq!(saved.id, Some(TOTAL_PRODUCTS as i32 + 1));
    assert_eq!(saved.categories[0].name, "Computers");
    let found = products::find_by_id(saved.id.unwrap(), &repo).expect("should find product");
    assert_eq!(found, saved);

    let original = products::find_by_id(EXISTING_ID, &repo).expect("should find product");
    assert_eq!(original.name, "The Lord of the Rings");
}

#[test]
fn insert_with_unknown_category_is_not_found() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let result = products::insert(dto("Phone", &[77]), &repo);

    assert_eq!(result, Err(ServiceError::category_not_found(77)));
    let page = products::find_all_paged(PageRequest::default(), &repo)
        .expect("should list products");
    assert_eq!(page.total_elements, TOTAL_PRODUCTS);
}

#[test]
fn update_overwrites_fields_and_replaces_categories() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let updated = products::update(2, dto("Smart TV 8K", &[BOOKS]), &repo)
        .expect("should update product");

    assert_eq!(updated.id, Some(2));
    assert_eq!(updated.name, "Smart TV 8K");
    assert_eq!(updated.price, 800.0);
    let ids: Vec<i32> = updated.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, [BOOKS]);
    assert_eq!(products::find_by_id(2, &repo), Ok(updated));
}

#[test]
fn update_missing_product_is_not_found() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(
        products::update(NON_EXISTING_ID, dto("Ghost", &[]), &repo),
        Err(ServiceError::product_not_found(NON_EXISTING_ID))
    );
}

#[test]
fn delete_outcomes() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(products::delete(EXISTING_ID, &repo), Ok(()));
    assert_eq!(
        products::find_by_id(EXISTING_ID, &repo),
        Err(ServiceError::product_not_found(EXISTING_ID))
    );
    assert_eq!(
        products::delete(NON_EXISTING_ID, &repo),
        Err(ServiceError::product_not_found(NON_EXISTING_ID))
    );
    assert!(matches!(
        products::delete(DEPENDENT_ID, &repo),
        Err(ServiceError::IntegrityViolation(_))
    ));
    assert!(products::find_by_id(DEPENDENT_ID, &repo).is_ok());
}

#[test]
fn categories_are_listed_and_found() {
    let test_db = common::TestDb::seeded();
    let repo = DieselRepository::new(test_db.pool());

    let all = categories::find_all(&repo).expect("should list categories");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Books");

    assert_eq!(
        categories::find_by_id(COMPUTERS, &repo),
        Ok(CategoryDto {
            id: COMPUTERS,
            name: "Computers".to_string()
        })
    );
    assert_eq!(
        categories::find_by_id(NON_EXISTING_ID, &repo),
        Err(ServiceError::category_not_found(NON_EXISTING_ID))
    );
}
