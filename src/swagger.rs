use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::author::get_authors,
        handlers::author::get_author,
        handlers::author::get_author_with_performances,
        handlers::author::create_author,
        handlers::author::update_author,
        handlers::author::delete_author,
        handlers::genre::get_genres,
        handlers::genre::get_genre,
        handlers::genre::get_genre_with_performances,
        handlers::genre::create_genre,
        handlers::genre::update_genre,
        handlers::genre::delete_genre,
        handlers::hall::get_halls,
        handlers::hall::get_hall,
        handlers::hall::get_hall_seats,
        handlers::hall::get_hall_with_performances,
        handlers::hall::create_hall,
        handlers::hall::create_hall_seats,
        handlers::hall::update_hall,
        handlers::hall::delete_hall,
        handlers::performance::get_performances,
        handlers::performance::get_upcoming_performances,
        handlers::performance::get_performances_by_genre,
        handlers::performance::get_performances_by_author,
        handlers::performance::get_performance,
        handlers::performance::create_performance,
        handlers::performance::generate_tickets,
        handlers::performance::update_performance,
        handlers::performance::delete_performance,
        handlers::seat::get_seat,
        handlers::seat::create_seat,
        handlers::seat::update_seat,
        handlers::seat::delete_seat,
        handlers::ticket::get_ticket,
        handlers::ticket::get_tickets_for_performance,
        handlers::ticket::get_available_tickets,
        handlers::ticket::get_sold_tickets,
        handlers::ticket::get_available_seats,
        handlers::ticket::get_tickets_by_price,
        handlers::ticket::get_vip_tickets,
        handlers::ticket::get_tickets_by_row,
        handlers::ticket::get_seating_plan,
        handlers::ticket::get_performance_statistics,
        handlers::ticket::get_overall_statistics,
        handlers::ticket::sell_ticket,
        handlers::ticket::return_ticket,
        handlers::ticket::delete_ticket,
    ),
    components(
        schemas(
            ApiError,
            AuthorResponse,
            AuthorListResponse,
            AuthorWithPerformancesResponse,
            CreateAuthorRequest,
            UpdateAuthorRequest,
            GenreResponse,
            GenreListResponse,
            GenreWithPerformancesResponse,
            CreateGenreRequest,
            UpdateGenreRequest,
            HallResponse,
            HallListResponse,
            HallWithPerformancesResponse,
            CreateHallRequest,
            UpdateHallRequest,
            CreateSeatLayoutRequest,
            SeatLocation,
            SeatResponse,
            CreateSeatRequest,
            UpdateSeatRequest,
            PerformanceResponse,
            PerformanceListResponse,
            PerformanceDetailResponse,
            CreatePerformanceRequest,
            UpdatePerformanceRequest,
            TicketResponse,
            TicketWithSeatResponse,
            TicketDetailResponse,
            PriceRangeQuery,
            SeatingPlanSeat,
            SeatingPlanRow,
            SeatingPlanResponse,
            TicketStatistics,
        )
    ),
    tags(
        (name = "author", description = "Author catalog API"),
        (name = "genre", description = "Genre catalog API"),
        (name = "hall", description = "Hall and seat layout API"),
        (name = "performance", description = "Performance scheduling API"),
        (name = "ticket", description = "Ticket sales and availability API"),
    ),
    info(
        title = "Theatre Ticket System API",
        version = "1.0.0",
        description = "REST API for the theatre ticket management backend"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
