use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::categories::{
    find_all as find_all_service, find_by_id as find_by_id_service,
};
use crate::routes::error_response;

#[get("/categories")]
pub async fn find_all(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    match find_all_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(&err, &req),
    }
}

#[get("/categories/{id}")]
pub async fn find_by_id(
    req: HttpRequest,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match find_by_id_service(id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(&err, &req),
    }
}
