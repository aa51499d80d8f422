mod common;

use chrono::{Duration, Utc};

#[tokio::test]
async fn available_seats_shrink_after_a_sale() {
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

    let seats = ctx
        .seats
        .get_available_seats_for_performance(performance_id)
        .await
        .unwrap();
    assert_eq!(seats.len(), 1);
    assert_eq!((seats[0].row, seats[0].number), (1, 2));
    assert_eq!(seats[0].is_available, Some(true));
}

#[tokio::test]
async fn available_and_sold_ticket_lists_partition_the_batch() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false), (2, 1, false)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    let ticket_id = ctx.ticket_id_for_seat(performance_id, 2, 1).await;
    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let available = ctx
        .tickets
        .get_available_tickets_for_performance(performance_id)
        .await
        .unwrap();
    let sold = ctx
        .tickets
        .get_sold_tickets_for_performance(performance_id)
        .await
        .unwrap();

    assert_eq!(available.len(), 2);
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].id, ticket_id);
}

#[tokio::test]
async fn seating_plan_groups_rows_ascending_with_counts() {
    let ctx = common::setup().await;
    // deliberately inserted out of order
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(2, 2, false), (1, 2, true), (2, 1, false), (1, 1, true)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 2).await;
    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let plan = ctx
        .tickets
        .get_seating_plan(performance_id)
        .await
        .unwrap();

    assert_eq!(plan.performance_id, performance_id);
    assert_eq!(plan.total_seats, 4);
    assert_eq!(plan.sold_seats, 1);
    assert_eq!(plan.available_seats, 3);
    assert_eq!(plan.vip_seats, 2);

    let rows: Vec<i32> = plan.rows.iter().map(|row| row.row).collect();
    assert_eq!(rows, vec![1, 2]);
    for row in &plan.rows {
        let numbers: Vec<i32> = row.seats.iter().map(|seat| seat.seat_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    let sold_seat = plan.rows[0]
        .seats
        .iter()
        .find(|seat| seat.seat_number == 2)
        .unwrap();
    assert!(!sold_seat.is_available);
    assert!(sold_seat.is_vip);
    assert_eq!(sold_seat.price_cents, 15000);
}

#[tokio::test]
async fn seating_plan_is_empty_before_generation() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let plan = ctx
        .tickets
        .get_seating_plan(performance_id)
        .await
        .unwrap();
    assert_eq!(plan.total_seats, 0);
    assert!(plan.rows.is_empty());
}

#[tokio::test]
async fn statistics_report_revenue_and_full_occupancy() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, true)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    for ticket in ctx
        .tickets
        .get_tickets_for_performance(performance_id)
        .await
        .unwrap()
    {
        assert!(ctx.tickets.sell_ticket(ticket.id).await.unwrap());
    }

    let statistics = ctx
        .tickets
        .get_performance_statistics(performance_id)
        .await
        .unwrap();
    assert_eq!(statistics.total_tickets, 2);
    assert_eq!(statistics.sold_tickets, 2);
    assert_eq!(statistics.available_tickets, 0);
    assert_eq!(statistics.total_revenue_cents, 25000);
    assert_eq!(statistics.average_price_cents, 12500.0);
    assert_eq!(statistics.occupancy_rate, 100.0);
}

#[tokio::test]
async fn statistics_for_a_performance_without_tickets_are_zero() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(10000, Utc::now() + Duration::days(7), &[(1, 1, false)])
        .await;

    let statistics = ctx
        .tickets
        .get_performance_statistics(performance_id)
        .await
        .unwrap();
    assert_eq!(statistics.total_tickets, 0);
    assert_eq!(statistics.total_revenue_cents, 0);
    assert_eq!(statistics.average_price_cents, 0.0);
    assert_eq!(statistics.occupancy_rate, 0.0);
}

#[tokio::test]
async fn occupancy_rate_rounds_to_two_decimals() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false), (1, 3, false)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    let ticket_id = ctx.ticket_id_for_seat(performance_id, 1, 1).await;
    assert!(ctx.tickets.sell_ticket(ticket_id).await.unwrap());

    let statistics = ctx
        .tickets
        .get_performance_statistics(performance_id)
        .await
        .unwrap();
    assert_eq!(statistics.occupancy_rate, 33.33);
}

#[tokio::test]
async fn overall_statistics_span_all_performances() {
    let ctx = common::setup().await;
    let (first, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 1, false), (1, 2, false)],
        )
        .await;
    let (second, _) = ctx
        .create_performance_with_seats(20000, Utc::now() + Duration::days(10), &[(1, 1, true)])
        .await;
    ctx.tickets.generate_tickets(first).await.unwrap();
    ctx.tickets.generate_tickets(second).await.unwrap();

    let sold_first = ctx.ticket_id_for_seat(first, 1, 1).await;
    let sold_second = ctx.ticket_id_for_seat(second, 1, 1).await;
    assert!(ctx.tickets.sell_ticket(sold_first).await.unwrap());
    assert!(ctx.tickets.sell_ticket(sold_second).await.unwrap());

    let statistics = ctx.tickets.get_overall_statistics().await.unwrap();
    assert_eq!(statistics.total_tickets, 3);
    assert_eq!(statistics.sold_tickets, 2);
    assert_eq!(statistics.available_tickets, 1);
    // 10000 + vip-priced 30000
    assert_eq!(statistics.total_revenue_cents, 40000);
    assert_eq!(statistics.occupancy_rate, 66.67);
}

#[tokio::test]
async fn ticket_filters_by_vip_price_and_row() {
    let ctx = common::setup().await;
    let (performance_id, _) = ctx
        .create_performance_with_seats(
            10000,
            Utc::now() + Duration::days(7),
            &[(1, 2, true), (1, 1, false), (2, 1, false)],
        )
        .await;
    ctx.tickets.generate_tickets(performance_id).await.unwrap();

    let vip = ctx
        .tickets
        .get_vip_tickets_for_performance(performance_id)
        .await
        .unwrap();
    assert_eq!(vip.len(), 1);
    assert!(vip[0].seat.is_vip);
    assert_eq!(vip[0].price_cents, 15000);

    let expensive = ctx
        .tickets
        .get_tickets_by_price_range(
            performance_id,
            &theatre_backend::models::PriceRangeQuery {
                min_price_cents: Some(12000),
                max_price_cents: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(expensive.len(), 1);
    assert_eq!(expensive[0].price_cents, 15000);

    let first_row = ctx
        .tickets
        .get_tickets_by_row(performance_id, 1)
        .await
        .unwrap();
    let numbers: Vec<i32> = first_row.iter().map(|ticket| ticket.seat.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}
