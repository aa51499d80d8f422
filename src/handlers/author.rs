use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::{AuthorService, PerformanceService};

#[utoipa::path(
    get,
    path = "/authors",
    tag = "author",
    responses(
        (status = 200, description = "List all authors with performance counts", body = [AuthorListResponse])
    )
)]
pub async fn get_authors(author_service: web::Data<AuthorService>) -> Result<HttpResponse> {
    match author_service.get_all_authors().await {
        Ok(authors) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": authors
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "author",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    author_service: web::Data<AuthorService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match author_service.get_author_by_id(path.into_inner()).await {
        Ok(author) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": author
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/authors/{id}/with-performances",
    tag = "author",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author with their performances", body = AuthorWithPerformancesResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author_with_performances(
    author_service: web::Data<AuthorService>,
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let author = match author_service.get_author_by_id(id).await {
        Ok(author) => author,
        Err(e) => return Ok(e.error_response()),
    };
    match performance_service.get_performances_by_author(id).await {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": AuthorWithPerformancesResponse {
                author,
                performances
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/authors",
    tag = "author",
    request_body = CreateAuthorRequest,
    responses(
        (status = 200, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_author(
    author_service: web::Data<AuthorService>,
    request: web::Json<CreateAuthorRequest>,
) -> Result<HttpResponse> {
    match author_service.create_author(request.into_inner()).await {
        Ok(author) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": author
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "author",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    author_service: web::Data<AuthorService>,
    path: web::Path<i32>,
    request: web::Json<UpdateAuthorRequest>,
) -> Result<HttpResponse> {
    match author_service
        .update_author(path.into_inner(), request.into_inner())
        .await
    {
        Ok(author) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": author
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "author",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Author still referenced by performances")
    )
)]
pub async fn delete_author(
    author_service: web::Data<AuthorService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match author_service.delete_author(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn author_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/authors")
            .route("", web::get().to(get_authors))
            .route("", web::post().to(create_author))
            .route("/{id}", web::get().to(get_author))
            .route("/{id}", web::put().to(update_author))
            .route("/{id}", web::delete().to(delete_author))
            .route(
                "/{id}/with-performances",
                web::get().to(get_author_with_performances),
            ),
    );
}
