use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use crate::database::DbPool;
use crate::entities::{author_entity, genre_entity, hall_entity, performance_entity, seat_entity};
use crate::error::AppResult;

/// Inserts a small demo catalog on first start. Skipped when authors exist.
pub async fn seed_database(pool: &DbPool) -> AppResult<()> {
    if author_entity::Entity::find().count(pool).await? > 0 {
        return Ok(());
    }
    log::info!("Seeding sample theatre data");

    let shakespeare = author_entity::ActiveModel {
        full_name: Set("William Shakespeare".to_string()),
        biography: Set("English playwright, poet and actor".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(1564, 4, 23)),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    let chekhov = author_entity::ActiveModel {
        full_name: Set("Anton Chekhov".to_string()),
        biography: Set("Russian playwright and short-story writer".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(1860, 1, 29)),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    author_entity::ActiveModel {
        full_name: Set("Oscar Wilde".to_string()),
        biography: Set("Irish poet and playwright".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(1854, 10, 16)),
        ..Default::default()
    }
    .insert(pool)
    .await?;

    let drama = genre_entity::ActiveModel {
        name: Set("Drama".to_string()),
        description: Set("Dramatic performances".to_string()),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    genre_entity::ActiveModel {
        name: Set("Comedy".to_string()),
        description: Set("Comedic performances".to_string()),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    let tragedy = genre_entity::ActiveModel {
        name: Set("Tragedy".to_string()),
        description: Set("Tragic performances".to_string()),
        ..Default::default()
    }
    .insert(pool)
    .await?;

    let main_hall = hall_entity::ActiveModel {
        name: Set("Main Hall".to_string()),
        capacity: Set(200),
        description: Set("The theatre's principal stage".to_string()),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    let chamber_hall = hall_entity::ActiveModel {
        name: Set("Chamber Hall".to_string()),
        capacity: Set(50),
        description: Set("Intimate stage for small productions".to_string()),
        ..Default::default()
    }
    .insert(pool)
    .await?;

    // Seat grids sized to each hall's capacity; first row is VIP.
    seed_seats(pool, main_hall.id, 10, 20).await?;
    seed_seats(pool, chamber_hall.id, 5, 10).await?;

    performance_entity::ActiveModel {
        title: Set("Hamlet".to_string()),
        description: Set("The tragedy of the Prince of Denmark".to_string()),
        performance_date: Set(Utc::now() + Duration::days(7)),
        duration_minutes: Set(180),
        base_price_cents: Set(25000),
        author_id: Set(shakespeare.id),
        genre_id: Set(tragedy.id),
        hall_id: Set(main_hall.id),
        ..Default::default()
    }
    .insert(pool)
    .await?;
    performance_entity::ActiveModel {
        title: Set("The Cherry Orchard".to_string()),
        description: Set("A landowning family faces the loss of their estate".to_string()),
        performance_date: Set(Utc::now() + Duration::days(14)),
        duration_minutes: Set(150),
        base_price_cents: Set(30000),
        author_id: Set(chekhov.id),
        genre_id: Set(drama.id),
        hall_id: Set(chamber_hall.id),
        ..Default::default()
    }
    .insert(pool)
    .await?;

    Ok(())
}

async fn seed_seats(pool: &DbPool, hall_id: i32, rows: i32, seats_per_row: i32) -> AppResult<()> {
    let mut batch = Vec::new();
    for row in 1..=rows {
        for number in 1..=seats_per_row {
            batch.push(seat_entity::ActiveModel {
                hall_id: Set(hall_id),
                row: Set(row),
                number: Set(number),
                is_vip: Set(row == 1),
                ..Default::default()
            });
        }
    }
    seat_entity::Entity::insert_many(batch)
        .exec_without_returning(pool)
        .await?;
    Ok(())
}
