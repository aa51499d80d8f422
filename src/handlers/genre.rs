use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::{GenreService, PerformanceService};

#[utoipa::path(
    get,
    path = "/genres",
    tag = "genre",
    responses(
        (status = 200, description = "List all genres with performance counts", body = [GenreListResponse])
    )
)]
pub async fn get_genres(genre_service: web::Data<GenreService>) -> Result<HttpResponse> {
    match genre_service.get_all_genres().await {
        Ok(genres) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": genres
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genre",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found", body = GenreResponse),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    genre_service: web::Data<GenreService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match genre_service.get_genre_by_id(path.into_inner()).await {
        Ok(genre) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": genre
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/genres/{id}/with-performances",
    tag = "genre",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre with its performances", body = GenreWithPerformancesResponse),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre_with_performances(
    genre_service: web::Data<GenreService>,
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let genre = match genre_service.get_genre_by_id(id).await {
        Ok(genre) => genre,
        Err(e) => return Ok(e.error_response()),
    };
    match performance_service.get_performances_by_genre(id).await {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": GenreWithPerformancesResponse {
                genre,
                performances
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/genres",
    tag = "genre",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_genre(
    genre_service: web::Data<GenreService>,
    request: web::Json<CreateGenreRequest>,
) -> Result<HttpResponse> {
    match genre_service.create_genre(request.into_inner()).await {
        Ok(genre) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": genre
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genre",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    genre_service: web::Data<GenreService>,
    path: web::Path<i32>,
    request: web::Json<UpdateGenreRequest>,
) -> Result<HttpResponse> {
    match genre_service
        .update_genre(path.into_inner(), request.into_inner())
        .await
    {
        Ok(genre) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": genre
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genre",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted"),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Genre still referenced by performances")
    )
)]
pub async fn delete_genre(
    genre_service: web::Data<GenreService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match genre_service.delete_genre(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn genre_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/genres")
            .route("", web::get().to(get_genres))
            .route("", web::post().to(create_genre))
            .route("/{id}", web::get().to(get_genre))
            .route("/{id}", web::put().to(update_genre))
            .route("/{id}", web::delete().to(delete_genre))
            .route(
                "/{id}/with-performances",
                web::get().to(get_genre_with_performances),
            ),
    );
}
