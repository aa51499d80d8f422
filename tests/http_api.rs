mod common;

use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use serde_json::Value;

use theatre_backend::handlers;

#[actix_web::test]
async fn sell_and_return_round_trip_over_http() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.tickets.clone()))
            .app_data(web::Data::new(ctx.seats.clone()))
            .service(web::scope("/api/v1").configure(handlers::ticket_config)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tickets/{ticket_id}/sell"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sold"], true);

    // a second sale of the same ticket reports sold = false
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tickets/{ticket_id}/sell"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sold"], false);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tickets/{ticket_id}/return"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["returned"], true);
}

#[actix_web::test]
async fn missing_ticket_renders_the_not_found_envelope() {
    let ctx = common::setup().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.tickets.clone()))
            .app_data(web::Data::new(ctx.seats.clone()))
            .service(web::scope("/api/v1").configure(handlers::ticket_config)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/tickets/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn seating_plan_endpoint_reports_counts() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, true)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.tickets.clone()))
            .app_data(web::Data::new(ctx.seats.clone()))
            .service(web::scope("/api/v1").configure(handlers::ticket_config)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/tickets/performance/{performance_id}/seating-plan"
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total_seats"], 2);
    assert_eq!(body["data"]["available_seats"], 2);
    assert_eq!(body["data"]["rows"][0]["seats"][1]["price_cents"], 15000);
}

#[actix_web::test]
async fn generate_endpoint_conflicts_on_second_call() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.performances.clone()))
            .app_data(web::Data::new(ctx.tickets.clone()))
            .service(web::scope("/api/v1").configure(handlers::performance_config)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/performances/{performance_id}/tickets"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["created"], 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/performances/{performance_id}/tickets"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_OPERATION");
}
