use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

use crate::models::*;
use crate::services::{SeatService, TicketService};

#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "ticket",
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket with seat and performance details", body = TicketDetailResponse),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.get_ticket_by_id(path.into_inner()).await {
        Ok(ticket) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": ticket
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "All tickets of the performance", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_tickets_for_performance(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_tickets_for_performance(path.into_inner())
        .await
    {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/available",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Unsold tickets of the performance", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_available_tickets(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_available_tickets_for_performance(path.into_inner())
        .await
    {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/sold",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Sold tickets of the performance", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_sold_tickets(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_sold_tickets_for_performance(path.into_inner())
        .await
    {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/available-seats",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Seats whose ticket is still unsold", body = [SeatResponse])
    )
)]
pub async fn get_available_seats(
    seat_service: web::Data<SeatService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match seat_service
        .get_available_seats_for_performance(path.into_inner())
        .await
    {
        Ok(seats) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": seats
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/by-price",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID"),
        ("min_price_cents" = Option<i64>, Query, description = "Lower price bound in cents"),
        ("max_price_cents" = Option<i64>, Query, description = "Upper price bound in cents")
    ),
    responses(
        (status = 200, description = "Tickets within the price range", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_tickets_by_price(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
    query: web::Query<PriceRangeQuery>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_tickets_by_price_range(path.into_inner(), &query)
        .await
    {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/vip",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Tickets on VIP seats", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_vip_tickets(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_vip_tickets_for_performance(path.into_inner())
        .await
    {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/row/{row}",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID"),
        ("row" = i32, Path, description = "Seat row")
    ),
    responses(
        (status = 200, description = "Tickets of the row ordered by seat number", body = [TicketWithSeatResponse])
    )
)]
pub async fn get_tickets_by_row(
    ticket_service: web::Data<TicketService>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse> {
    let (performance_id, row) = path.into_inner();
    match ticket_service.get_tickets_by_row(performance_id, row).await {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tickets
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/seating-plan",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Row-grouped seating chart with summary counts", body = SeatingPlanResponse)
    )
)]
pub async fn get_seating_plan(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.get_seating_plan(path.into_inner()).await {
        Ok(plan) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": plan
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/performance/{performance_id}/statistics",
    tag = "ticket",
    params(
        ("performance_id" = i32, Path, description = "Performance ID")
    ),
    responses(
        (status = 200, description = "Sales statistics for the performance", body = TicketStatistics)
    )
)]
pub async fn get_performance_statistics(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service
        .get_performance_statistics(path.into_inner())
        .await
    {
        Ok(statistics) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": statistics
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tickets/statistics/overall",
    tag = "ticket",
    responses(
        (status = 200, description = "Sales statistics across all performances", body = TicketStatistics)
    )
)]
pub async fn get_overall_statistics(
    ticket_service: web::Data<TicketService>,
) -> Result<HttpResponse> {
    match ticket_service.get_overall_statistics().await {
        Ok(statistics) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": statistics
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tickets/{id}/sell",
    tag = "ticket",
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Sale attempted; `sold` is false when the ticket is missing or already sold")
    )
)]
pub async fn sell_ticket(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.sell_ticket(path.into_inner()).await {
        Ok(sold) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "sold": sold
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tickets/{id}/return",
    tag = "ticket",
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Return attempted; `returned` is false when the ticket is missing, unsold or the performance starts within a day")
    )
)]
pub async fn return_ticket(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.return_ticket(path.into_inner()).await {
        Ok(returned) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "returned": returned
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "ticket",
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn delete_ticket(
    ticket_service: web::Data<TicketService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match ticket_service.delete_ticket(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"success": true}))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tickets")
            .route("/statistics/overall", web::get().to(get_overall_statistics))
            .route(
                "/performance/{performance_id}",
                web::get().to(get_tickets_for_performance),
            )
            .route(
                "/performance/{performance_id}/available",
                web::get().to(get_available_tickets),
            )
            .route(
                "/performance/{performance_id}/sold",
                web::get().to(get_sold_tickets),
            )
            .route(
                "/performance/{performance_id}/available-seats",
                web::get().to(get_available_seats),
            )
            .route(
                "/performance/{performance_id}/by-price",
                web::get().to(get_tickets_by_price),
            )
            .route(
                "/performance/{performance_id}/vip",
                web::get().to(get_vip_tickets),
            )
            .route(
                "/performance/{performance_id}/row/{row}",
                web::get().to(get_tickets_by_row),
            )
            .route(
                "/performance/{performance_id}/seating-plan",
                web::get().to(get_seating_plan),
            )
            .route(
                "/performance/{performance_id}/statistics",
                web::get().to(get_performance_statistics),
            )
            .route("/{id}", web::get().to(get_ticket))
            .route("/{id}", web::delete().to(delete_ticket))
            .route("/{id}/sell", web::post().to(sell_ticket))
            .route("/{id}/return", web::post().to(return_ticket)),
    );
}
