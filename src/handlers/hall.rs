use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::{HallService, PerformanceService, SeatService};

#[utoipa::path(
    get,
    path = "/halls",
    tag = "hall",
    responses(
        (status = 200, description = "List all halls with performance counts", body = [HallListResponse])
    )
)]
pub async fn get_halls(hall_service: web::Data<HallService>) -> Result<HttpResponse> {
    match hall_service.get_all_halls().await {
        Ok(halls) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": halls
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/halls/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    responses(
        (status = 200, description = "Hall found", body = HallResponse),
        (status = 404, description = "Hall not found")
    )
)]
pub async fn get_hall(
    hall_service: web::Data<HallService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match hall_service.get_hall_by_id(path.into_inner()).await {
        Ok(hall) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": hall
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/halls/{id}/seats",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    responses(
        (status = 200, description = "Seats of the hall ordered by row and number", body = [SeatResponse]),
        (status = 404, description = "Hall not found")
    )
)]
pub async fn get_hall_seats(
    hall_service: web::Data<HallService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match hall_service.get_hall_seats(path.into_inner()).await {
        Ok(seats) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": seats
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/halls/{id}/with-performances",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    responses(
        (status = 200, description = "Hall with its performances", body = HallWithPerformancesResponse),
        (status = 404, description = "Hall not found")
    )
)]
pub async fn get_hall_with_performances(
    hall_service: web::Data<HallService>,
    performance_service: web::Data<PerformanceService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let hall = match hall_service.get_hall_by_id(id).await {
        Ok(hall) => hall,
        Err(e) => return Ok(e.error_response()),
    };
    match performance_service.get_performances_by_hall(id).await {
        Ok(performances) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": HallWithPerformancesResponse {
                hall,
                performances
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/halls",
    tag = "hall",
    request_body = CreateHallRequest,
    responses(
        (status = 200, description = "Hall created", body = HallResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_hall(
    hall_service: web::Data<HallService>,
    request: web::Json<CreateHallRequest>,
) -> Result<HttpResponse> {
    match hall_service.create_hall(request.into_inner()).await {
        Ok(hall) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": hall
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/halls/{id}/seats",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    request_body = CreateSeatLayoutRequest,
    responses(
        (status = 200, description = "Seat grid created"),
        (status = 404, description = "Hall not found"),
        (status = 409, description = "Hall already has seats")
    )
)]
pub async fn create_hall_seats(
    seat_service: web::Data<SeatService>,
    path: web::Path<i32>,
    request: web::Json<CreateSeatLayoutRequest>,
) -> Result<HttpResponse> {
    match seat_service
        .create_seats_for_hall(path.into_inner(), request.into_inner())
        .await
    {
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
    path = "/halls/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    request_body = UpdateHallRequest,
    responses(
        (status = 200, description = "Hall updated", body = HallResponse),
        (status = 404, description = "Hall not found")
    )
)]
pub async fn update_hall(
    hall_service: web::Data<HallService>,
    path: web::Path<i32>,
    request: web::Json<UpdateHallRequest>,
) -> Result<HttpResponse> {
    match hall_service
        .update_hall(path.into_inner(), request.into_inner())
        .await
    {
        Ok(hall) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": hall
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/halls/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Hall ID")
    ),
    responses(
        (status = 200, description = "Hall deleted"),
        (status = 404, description = "Hall not found"),
        (status = 409, description = "Hall still referenced by performances")
    )
)]
pub async fn delete_hall(
    hall_service: web::Data<HallService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match hall_service.delete_hall(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn hall_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/halls")
            .route("", web::get().to(get_halls))
            .route("", web::post().to(create_hall))
            .route("/{id}", web::get().to(get_hall))
            .route("/{id}", web::put().to(update_hall))
            .route("/{id}", web::delete().to(delete_hall))
            .route("/{id}/seats", web::get().to(get_hall_seats))
            .route("/{id}/seats", web::post().to(create_hall_seats))
            .route(
                "/{id}/with-performances",
                web::get().to(get_hall_with_performances),
            ),
    );
}
