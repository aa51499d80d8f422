mod common;

use chrono::{Duration, Utc};
use theatre_backend::models::*;
use theatre_backend::AppError;

#[tokio::test]
async fn upcoming_performances_exclude_past_and_sort_by_date() {
    let ctx = common::setup().await;
    let (past, _) = ctx
        .create_performance_with_seats(10000, Utc::now() - Duration::days(1), &[(1, 1, false)])
        .await;
    let (later, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(14), &[(1, 1, false)])
        .await;
    let (sooner, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let upcoming = ctx.performances.get_upcoming_performances().await.unwrap();
    let ids: Vec<i32> = upcoming.iter().map(|performance| performance.id).collect();
    assert_eq!(ids, vec![sooner, later]);
    assert!(!ids.contains(&past));

    // list rows carry the referenced names
    assert_eq!(upcoming[0].author_name, "Henrik Ibsen");
    assert_eq!(upcoming[0].genre_name, "Drama");
    assert_eq!(upcoming[0].hall_name, "Test Hall");
}

#[tokio::test]
async fn performances_filter_by_genre_and_author() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let detail = ctx
        .performances
        .get_performance_by_id(performance_id)
        .await
        .unwrap();

    let by_genre = ctx
        .performances
        .get_performances_by_genre(detail.genre.id)
        .await
        .unwrap();
    assert_eq!(by_genre.len(), 1);
    assert_eq!(by_genre[0].id, performance_id);

    let by_author = ctx
        .performances
        .get_performances_by_author(detail.author.id)
        .await
        .unwrap();
    assert_eq!(by_author.len(), 1);

    assert!(ctx
        .performances
        .get_performances_by_genre(999)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn performance_detail_reports_ticket_counts() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;
    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let detail = ctx
        .performances
        .get_performance_by_id(performance_id)
        .await
        .unwrap();
    assert_eq!(detail.total_tickets, 2);
    assert_eq!(detail.sold_tickets, 1);
    assert_eq!(detail.available_tickets, 1);
}

#[tokio::test]
async fn author_list_counts_performances() {
    let ctx = common::setup().await;
    ctx.create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let authors = ctx.authors.get_all_authors().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].performances_count, 1);
}

#[tokio::test]
async fn seat_layout_generation_fills_the_grid_once() {
    let ctx = common::setup().await;
    let hall = ctx
        .halls
        .create_hall(CreateHallRequest {
            name: "Studio".to_string(),
            capacity: 6,
            description: String::new(),
        })
        .await
        .unwrap();

    let created = ctx
        .seats
        .create_seats_for_hall(
            hall.id,
            CreateSeatLayoutRequest {
                rows: 2,
                seats_per_row: 3,
                vip_seats: vec![SeatLocation { row: 1, number: 1 }],
            },
        )
        .await
        .unwrap();
    assert_eq!(created, 6);

    let seats = ctx.halls.get_hall_seats(hall.id).await.unwrap();
    assert_eq!(seats.len(), 6);
    assert_eq!((seats[0].row, seats[0].number), (1, 1));
    assert!(seats[0].is_vip);
    assert!(!seats[1].is_vip);

    let err = ctx
        .seats
        .create_seats_for_hall(
            hall.id,
            CreateSeatLayoutRequest {
                rows: 1,
                seats_per_row: 1,
                vip_seats: Vec::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
}

#[tokio::test]
async fn referenced_catalog_entries_cannot_be_deleted() {
    let ctx = common::setup().await;
    let (performance_id, hall_id) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    let detail = ctx
        .performances
        .get_performance_by_id(performance_id)
        .await
        .unwrap();

    let err = ctx.authors.delete_author(detail.author.id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
    let err = ctx.genres.delete_genre(detail.genre.id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
    let err = ctx.halls.delete_hall(hall_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // once the performance is gone the guards release
    ctx.performances
        .delete_performance(performance_id)
        .await
        .unwrap();
    ctx.authors.delete_author(detail.author.id).await.unwrap();
}

#[tokio::test]
async fn invalid_input_is_rejected() {
    let ctx = common::setup().await;

    let err = ctx
        .halls
        .create_hall(CreateHallRequest {
            name: "Empty".to_string(),
            capacity: 0,
            description: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let err = ctx
        .authors
        .create_author(CreateAuthorRequest {
            full_name: "   ".to_string(),
            biography: String::new(),
            birth_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let (_, hall_id) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    let err = ctx
        .seats
        .create_seat(CreateSeatRequest {
            hall_id,
            row: 0,
            number: 1,
            is_vip: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn missing_catalog_lookups_are_not_found() {
    let ctx = common::setup().await;

    assert!(matches!(
        ctx.authors.get_author_by_id(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        ctx.performances.get_performance_by_id(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        ctx.tickets.get_ticket_by_id(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        ctx.seats.get_seat_by_id(404).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}
