use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::{PerformanceService, TicketService};

#[utoipa::path(
    get,
    path = "/performances",
    tag = "performance",
    responses(
        (status = 200, description = "List all performances", body = [PerformanceListResponse])
    )
)]
pub async fn get_performances(
    performance_service: web::Data<PerformanceService>,
) -> Result<HttpResponse> {
    match performance_service.get_all_performances().await {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performances
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/performances/upcoming",
    tag = "performance",
    responses(
        (status = 200, description = "Performances scheduled after now, soonest first", body = [PerformanceListResponse])
    )
)]
pub async fn get_upcoming_performances(
    performance_service: web::Data<PerformanceService>,
) -> Result<HttpResponse> {
    match performance_service.get_upcoming_performances().await {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performances
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/performances/by-genre/{genre_id}",
    tag = "performance",
    params(
        ("genre_id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Performances of the genre", body = [PerformanceListResponse])
    )
)]
pub async fn get_performances_by_genre(
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match performance_service
        .get_performances_by_genre(path.into_inner())
        .await
    {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performances
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/performances/by-author/{author_id}",
    tag = "performance",
    params(
        ("author_id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Performances of the author", body = [PerformanceListResponse])
    )
)]
pub async fn get_performances_by_author(
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match performance_service
        .get_performances_by_author(path.into_inner())
        .await
    {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performances
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/performances/{id}",
    tag = "performance",
    params(
        ("id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Performance details with ticket counts", body = PerformanceDetailResponse),
        (status = 404, description = "Performance not found")
    )
)]
pub async fn get_performance(
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match performance_service
        .get_performance_by_id(path.into_inner())
        .await
    {
        Ok(performance) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performance
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/performances",
    tag = "performance",
    request_body = CreatePerformanceRequest,
    responses(
        (status = 200, description = "Performance created", body = PerformanceResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Referenced author, genre or hall not found")
    )
)]
pub async fn create_performance(
    performance_service: web::Data<PerformanceService>,
    request: web::Json<CreatePerformanceRequest>,
) -> Result<HttpResponse> {
    match performance_service
        .create_performance(request.into_inner())
        .await
    {
        Ok(performance) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performance
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/performances/{id}/tickets",
    tag = "performance",
    params(
        ("id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Ticket batch generated, one per seat of the hall"),
        (status = 404, description = "Performance not found"),
        (status = 409, description = "Tickets already generated")
    )
)]
pub async fn generate_tickets(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.generate_tickets(path.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "created": created
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/performances/{id}",
    tag = "performance",
    params(
        ("id" = i32, Path, description = "Performance ID")
    ),
    request_body = UpdatePerformanceRequest,
    responses(
        (status = 200, description = "Performance updated", body = PerformanceResponse),
        (status = 404, description = "Performance not found")
    )
)]
pub async fn update_performance(
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
    request: web::Json<UpdatePerformanceRequest>,
) -> Result<HttpResponse> {
    match performance_service
        .update_performance(path.into_inner(), request.into_inner())
        .await
    {
        Ok(performance) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": performance
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/performances/{id}",
    tag = "performance",
    params(
        ("id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Performance deleted along with its tickets"),
        (status = 404, description = "Performance not found")
    )
)]
pub async fn delete_performance(
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match performance_service
        .delete_performance(path.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn performance_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/performances")
            .route("", web::get().to(get_performances))
            .route("", web::post().to(create_performance))
            .route("/upcoming", web::get().to(get_upcoming_performances))
            .route("/by-genre/{genre_id}", web::get().to(get_performances_by_genre))
            .route(
                "/by-author/{author_id}",
                web::get().to(get_performances_by_author),
            )
            .route("/{id}", web::get().to(get_performance))
            .route("/{id}", web::put().to(update_performance))
            .route("/{id}", web::delete().to(delete_performance))
            .route("/{id}/tickets", web::post().to(generate_tickets)),
    );
}
