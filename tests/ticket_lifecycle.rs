mod common;

use std::collections::HashSet;

use chrono::{Duration, Utc};
use theatre_backend::AppError;

#[tokio::test]
async fn generate_creates_one_unsold_ticket_per_seat() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, true)],
        )
        .await;

    let created = ctx.tickets.generate_tickets(performance_id).await.unwrap();
    assert_eq!(created, 2);

    let tickets = ctx
        .tickets
        .get_tickets_for_performance(performance_id)
        .await
        .unwrap();
    assert_eq!(tickets.len(), 2);

    let seat_ids: HashSet<i32> = tickets.iter().map(|ticket| ticket.seat.id).collect();
    assert_eq!(seat_ids.len(), 2, "each ticket references a distinct seat");

    for ticket in &tickets {
        assert!(!ticket.is_sold);
        assert!(ticket.purchase_date.is_none());
        let expected = if ticket.seat.is_vip { 15000 } else { 10000 };
        assert_eq!(ticket.price_cents, expected);
    }
}

#[tokio::test]
async fn generate_for_missing_performance_is_not_found() {
    let ctx = common::setup().await;

    let err = ctx.tickets.generate_tickets(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn generate_twice_is_refused() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false)],
        )
        .await;

    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let err = ctx
        .tickets
        .generate_tickets(performance_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    let tickets = ctx
        .tickets
        .get_tickets_for_performance(performance_id)
        .await
        .unwrap();
    assert_eq!(tickets.len(), 2, "no duplicate tickets were written");
}

#[tokio::test]
async fn sell_marks_ticket_sold_with_purchase_date() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let ticket = ctx.tickets.get_ticket_by_id(ticket_id).await.unwrap();
    assert!(ticket.is_sold);
    assert!(ticket.purchase_date.is_some());
}

#[tokio::test]
async fn selling_a_sold_ticket_returns_false_and_changes_nothing() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());
    let first_sale = ctx
        .tickets
        .get_ticket_by_id(ticket_id)
        .await
        .unwrap()
        .purchase_date;

    assert!(!ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let ticket = ctx.tickets.get_ticket_by_id(ticket_id).await.unwrap();
    assert!(ticket.is_sold);
    assert_eq!(ticket.purchase_date, first_sale);
}

#[tokio::test]
async fn selling_a_missing_ticket_returns_false() {
    let ctx = common::setup().await;

    assert!(!ctx.tickets.sell_ticket(9999).await.unwrap());
}

#[tokio::test]
async fn returning_clears_the_purchase_date() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());
    assert!(ctx.tickets.return_ticket(ticket_id).await.unwrap());

    let ticket = ctx.tickets.get_ticket_by_id(ticket_id).await.unwrap();
    assert!(!ticket.is_sold);
    // the date must be absent after a return, not a minimum-date placeholder
    assert_eq!(ticket.purchase_date, None);
}

#[tokio::test]
async fn returning_an_unsold_ticket_returns_false() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(!ctx.tickets.return_ticket(ticket_id).await.unwrap());
}

#[tokio::test]
async fn returning_a_missing_ticket_returns_false() {
    let ctx = common::setup().await;

    assert!(!ctx.tickets.return_ticket(9999).await.unwrap());
}

#[tokio::test]
async fn return_is_refused_within_a_day_of_the_performance() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::hours(23), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());
    assert!(!ctx.tickets.return_ticket(ticket_id).await.unwrap());

    let ticket = ctx.tickets.get_ticket_by_id(ticket_id).await.unwrap();
    assert!(ticket.is_sold, "a refused return leaves the ticket sold");
    assert!(ticket.purchase_date.is_some());
}

#[tokio::test]
async fn returned_ticket_can_be_sold_again() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();
    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;

    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());
    let first_sale = ctx
        .tickets
        .get_ticket_by_id(ticket_id)
        .await
        .unwrap()
        .purchase_date
        .unwrap();

    assert!(ctx.tickets.return_ticket(ticket_id).await.unwrap());
    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let ticket = ctx.tickets.get_ticket_by_id(ticket_id).await.unwrap();
    assert!(ticket.is_sold);
    assert!(ticket.purchase_date.unwrap() >= first_sale);
}

#[tokio::test]
async fn deleting_a_performance_removes_its_tickets() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    ctx.performances
        .delete_performance(performance_id)
        .await
        .unwrap();

    let tickets = ctx
        .tickets
        .get_tickets_for_performance(performance_id)
        .await
        .unwrap();
    assert!(tickets.is_empty());
}
