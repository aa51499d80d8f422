#![allow(dead_code)]

use chrono::{DateTime, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use theatre_backend::models::*;
use theatre_backend::services::*;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub authors: AuthorService,
    pub genres: GenreService,
    pub halls: HallService,
    pub seats: SeatService,
    pub performances: PerformanceService,
    pub tickets: TicketService,
}

/// Fresh in-memory database with the full schema applied. A single pooled
/// connection keeps every statement on the same SQLite memory instance.
pub async fn setup() -> TestContext {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    TestContext {
        authors: AuthorService::new(db.clone()),
        genres: GenreService::new(db.clone()),
        halls: HallService::new(db.clone()),
        seats: SeatService::new(db.clone()),
        performances: PerformanceService::new(db.clone()),
        tickets: TicketService::new(db.clone()),
        db,
    }
}

impl TestContext {
    /// Creates an author, a genre, a hall with the given `(row, number, vip)`
    /// seats, and a performance in that hall. Returns (performance_id, hall_id).
    pub async fn create_performance_with_seats(
        &self,
        base_price_cents: i64,
        performance_date: DateTime<Utc>,
        seats: &[(i32, i32, bool)],
    ) -> (i32, i32) {
        let author = self
            .authors
            .create_author(CreateAuthorRequest {
                full_name: "Henrik Ibsen".to_string(),
                biography: String::new(),
                birth_date: None,
            })
            .await
            .expect("create author");
        let genre = self
            .genres
            .create_genre(CreateGenreRequest {
                name: "Drama".to_string(),
                description: String::new(),
            })
            .await
            .expect("create genre");
        let hall = self
            .halls
            .create_hall(CreateHallRequest {
                name: "Test Hall".to_string(),
                capacity: (seats.len() as i32).max(1),
                description: String::new(),
            })
            .await
            .expect("create hall");

        for &(row, number, is_vip) in seats {
            self.seats
                .create_seat(CreateSeatRequest {
                    hall_id: hall.id,
                    row,
                    number,
                    is_vip,
                })
                .await
                .expect("create seat");
        }

        let performance = self
            .performances
            .create_performance(CreatePerformanceRequest {
                title: "A Doll's House".to_string(),
                description: String::new(),
                performance_date,
                duration_minutes: 120,
                base_price_cents,
                author_id: author.id,
                genre_id: genre.id,
                hall_id: hall.id,
            })
            .await
            .expect("create performance");

        (performance.id, hall.id)
    }

    /// Ticket id for the seat at (row, number) of the performance.
    pub async fn ticket_id_for_seat(&self, performance_id: i32, row: i32, number: i32) -> i32 {
        self.tickets
            .get_tickets_for_performance(performance_id)
            .await
            .expect("list tickets")
            .into_iter()
            .find(|ticket| ticket.seat.row == row && ticket.seat.number == number)
            .expect("ticket for seat")
            .id
    }
}
