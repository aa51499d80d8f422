use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::SeatService;

#[utoipa::path(
    get,
    path = "/seats/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "Seat found", body = SeatResponse),
        (status = 404, description = "Seat not found")
    )
)]
pub async fn get_seat(
    seat_service: web::Data<SeatService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match seat_service.get_seat_by_id(path.into_inner()).await {
        Ok(seat) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": seat
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/seats",
    tag = "hall",
    request_body = CreateSeatRequest,
    responses(
        (status = 200, description = "Seat created", body = SeatResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Hall not found"),
        (status = 409, description = "Seat position already taken")
    )
)]
pub async fn create_seat(
    seat_service: web::Data<SeatService>,
    request: web::Json<CreateSeatRequest>,
) -> Result<HttpResponse> {
    match seat_service.create_seat(request.into_inner()).await {
        Ok(seat) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": seat
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/seats/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    request_body = UpdateSeatRequest,
    responses(
        (status = 200, description = "Seat updated", body = SeatResponse),
        (status = 404, description = "Seat not found")
    )
)]
pub async fn update_seat(
    seat_service: web::Data<SeatService>,
    path: web::Path<i32>,
    request: web::Json<UpdateSeatRequest>,
) -> Result<HttpResponse> {
    match seat_service
        .update_seat(path.into_inner(), request.into_inner())
        .await
    {
        Ok(seat) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": seat
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/seats/{id}",
    tag = "hall",
    params(
        ("id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "Seat deleted"),
        (status = 404, description = "Seat not found"),
        (status = 409, description = "Seat still referenced by tickets")
    )
)]
pub async fn delete_seat(
    seat_service: web::Data<SeatService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match seat_service.delete_seat(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn seat_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/seats")
            .route("", web::post().to(create_seat))
            .route("/{id}", web::get().to(get_seat))
            .route("/{id}", web::put().to(update_seat))
            .route("/{id}", web::delete().to(delete_seat)),
    );
}
