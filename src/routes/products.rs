use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::products::ProductDto;
use crate::forms::products::ProductForm;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageRequest, SortOrder};
use crate::repository::DieselRepository;
use crate::routes::{bad_request, error_response};
use crate::services::ServiceError;
use crate::services::products::{
    delete as delete_service, find_all_paged as find_all_paged_service,
    find_by_id as find_by_id_service, insert as insert_service, update as update_service,
};

/// Build a page request from `page`, `size` and repeated `sort=field,dir`
/// query parameters. Unknown parameters are ignored.
fn page_request_from_params(params: &[(String, String)]) -> Result<PageRequest, String> {
    let mut page = 0;
    let mut size = DEFAULT_PAGE_SIZE;
    let mut sort = Vec::new();

    for (key, value) in params {
        match key.as_str() {
            "page" => {
                page = value
                    .parse()
                    .map_err(|_| format!("invalid page: {value}"))?;
            }
            "size" => {
                size = value
                    .parse()
                    .map_err(|_| format!("invalid size: {value}"))?;
            }
            "sort" => sort.push(value.parse::<SortOrder>().map_err(|e| e.to_string())?),
            _ => {}
        }
    }

    let mut request = PageRequest::new(page, size);
    request.sort = sort;
    Ok(request)
}

fn dto_from_form(form: ProductForm) -> Result<ProductDto, ServiceError> {
    ProductDto::try_from(form).map_err(ServiceError::from)
}

#[get("/products")]
pub async fn find_all(
    req: HttpRequest,
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = match page_request_from_params(&params) {
        Ok(request) => request,
        Err(message) => return bad_request(message, &req),
    };

    match find_all_paged_service(request, repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/products/{id}")]
pub async fn find_by_id(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_by_id_service(id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err, &req),
    }
}

#[post("/products")]
pub async fn insert(
    req: HttpRequest,
    web::Json(form): web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = dto_from_form(form).and_then(|dto| insert_service(dto, repo.get_ref()));

    match result {
        Ok(product) => {
            let location = format!("/products/{}", product.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(product)
        }
        Err(err) => error_response(&err, &req),
    }
}

#[put("/products/{id}")]
pub async fn update(
    req: HttpRequest,
    id: web::Path<i32>,
    web::Json(form): web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    let result = dto_from_form(form).and_then(|dto| update_service(id, dto, repo.get_ref()));

    match result {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(&err, &req),
    }
}

#[delete("/products/{id}")]
pub async fn delete(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_service(id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err, &req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{ProductSortField, SortOrder};

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_first_unsorted_page() {
        let request = page_request_from_params(&[]).unwrap();
        assert_eq!(request, PageRequest::new(0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn reads_page_size_and_repeated_sort_keys() {
        let request = page_request_from_params(&params(&[
            ("page", "2"),
            ("size", "5"),
            ("sort", "price,desc"),
            ("sort", "name"),
            ("utm_source", "mail"),
        ]))
        .unwrap();

        assert_eq!(request.page, 2);
        assert_eq!(request.size, 5);
        assert_eq!(
            request.sort,
            vec![
                SortOrder::desc(ProductSortField::Price),
                SortOrder::asc(ProductSortField::Name),
            ]
        );
    }

    #[test]
    fn clamps_requested_size() {
        let request = page_request_from_params(&params(&[("size", "100000")])).unwrap();
        assert_eq!(request.size, crate::pagination::MAX_PAGE_SIZE);

        let request = page_request_from_params(&params(&[("size", "0")])).unwrap();
        assert_eq!(request.size, 1);
    }

    #[test]
    fn rejects_malformed_parameters() {
        assert!(page_request_from_params(&params(&[("page", "-1")])).is_err());
        assert!(page_request_from_params(&params(&[("sort", "secret,asc")])).is_err());
    }
}
