use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::{
    author_entity, genre_entity, hall_entity, performance_entity, seat_entity, ticket_entity,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;
use crate::utils::{round_two_decimals, ticket_price_cents};

#[derive(Clone)]
pub struct TicketService {
    pool: DatabaseConnection,
    tickets: Repository<ticket_entity::Entity>,
    performances: Repository<performance_entity::Entity>,
    seats: Repository<seat_entity::Entity>,
    authors: Repository<author_entity::Entity>,
    genres: Repository<genre_entity::Entity>,
    halls: Repository<hall_entity::Entity>,
}

impl TicketService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            tickets: Repository::new(pool.clone()),
            performances: Repository::new(pool.clone()),
            seats: Repository::new(pool.clone()),
            authors: Repository::new(pool.clone()),
            genres: Repository::new(pool.clone()),
            halls: Repository::new(pool.clone()),
            pool,
        }
    }

    pub async fn get_ticket_by_id(&self, id: i32) -> AppResult<TicketDetailResponse> {
        let ticket = self
            .tickets
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {id} not found")))?;

        let seat = self.seats.get_by_id(ticket.seat_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "Seat {} referenced by ticket {id} is missing",
                ticket.seat_id
            ))
        })?;
        let performance = self
            .performances
            .get_by_id(ticket.performance_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Performance {} referenced by ticket {id} is missing",
                    ticket.performance_id
                ))
            })?;

        let author_name = self
            .authors
            .get_by_id(performance.author_id)
            .await?
            .map(|author| author.full_name)
            .unwrap_or_default();
        let genre_name = self
            .genres
            .get_by_id(performance.genre_id)
            .await?
            .map(|genre| genre.name)
            .unwrap_or_default();
        let hall_name = self
            .halls
            .get_by_id(performance.hall_id)
            .await?
            .map(|hall| hall.name)
            .unwrap_or_default();

        Ok(TicketDetailResponse {
            id: ticket.id,
            price_cents: ticket.price_cents,
            is_sold: ticket.is_sold,
            purchase_date: ticket.purchase_date,
            seat: seat.into(),
            performance: PerformanceListResponse {
                id: performance.id,
                title: performance.title,
                description: performance.description,
                performance_date: performance.performance_date,
                base_price_cents: performance.base_price_cents,
                author_name,
                genre_name,
                hall_name,
            },
        })
    }

    pub async fn get_tickets_for_performance(
        &self,
        performance_id: i32,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let tickets = self
            .tickets
            .find(ticket_entity::Column::PerformanceId.eq(performance_id))
            .await?;
        self.with_seats(tickets).await
    }

    pub async fn get_available_tickets_for_performance(
        &self,
        performance_id: i32,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let tickets = self
            .tickets
            .find(
                Condition::all()
                    .add(ticket_entity::Column::PerformanceId.eq(performance_id))
                    .add(ticket_entity::Column::IsSold.eq(false)),
            )
            .await?;
        self.with_seats(tickets).await
    }

    pub async fn get_sold_tickets_for_performance(
        &self,
        performance_id: i32,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let tickets = self
            .tickets
            .find(
                Condition::all()
                    .add(ticket_entity::Column::PerformanceId.eq(performance_id))
                    .add(ticket_entity::Column::IsSold.eq(true)),
            )
            .await?;
        self.with_seats(tickets).await
    }

    pub async fn get_tickets_by_price_range(
        &self,
        performance_id: i32,
        query: &PriceRangeQuery,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let mut tickets = self
            .tickets
            .find(ticket_entity::Column::PerformanceId.eq(performance_id))
            .await?;
        if let Some(min) = query.min_price_cents {
            tickets.retain(|ticket| ticket.price_cents >= min);
        }
        if let Some(max) = query.max_price_cents {
            tickets.retain(|ticket| ticket.price_cents <= max);
        }
        self.with_seats(tickets).await
    }

    pub async fn get_vip_tickets_for_performance(
        &self,
        performance_id: i32,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let mut tickets = self.get_tickets_for_performance(performance_id).await?;
        tickets.retain(|ticket| ticket.seat.is_vip);
        Ok(tickets)
    }

    pub async fn get_tickets_by_row(
        &self,
        performance_id: i32,
        row: i32,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        let mut tickets = self.get_tickets_for_performance(performance_id).await?;
        tickets.retain(|ticket| ticket.seat.row == row);
        tickets.sort_by_key(|ticket| ticket.seat.number);
        Ok(tickets)
    }

    /// Creates one unsold ticket per seat of the performance's hall, priced
    /// from the base price with the VIP multiplier. A performance gets its
    /// ticket batch at most once; repeated generation is refused.
    pub async fn generate_tickets(&self, performance_id: i32) -> AppResult<u64> {
        let performance = self
            .performances
            .get_by_id(performance_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Performance {performance_id} not found")))?;

        let existing = self
            .tickets
            .count(ticket_entity::Column::PerformanceId.eq(performance_id))
            .await?;
        if existing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Performance {performance_id} already has {existing} tickets"
            )));
        }

        let seats = self
            .seats
            .find(seat_entity::Column::HallId.eq(performance.hall_id))
            .await?;
        if seats.is_empty() {
            log::warn!(
                "Hall {} has no seats, no tickets generated for performance {performance_id}",
                performance.hall_id
            );
            return Ok(0);
        }

        let batch: Vec<ticket_entity::ActiveModel> = seats
            .iter()
            .map(|seat| ticket_entity::ActiveModel {
                performance_id: Set(performance_id),
                seat_id: Set(seat.id),
                price_cents: Set(ticket_price_cents(performance.base_price_cents, seat.is_vip)),
                is_sold: Set(false),
                purchase_date: Set(None),
                ..Default::default()
            })
            .collect();

        let created = self.tickets.add_many(batch).await?;
        log::info!("Generated {created} tickets for performance {performance_id}");
        Ok(created)
    }

    /// Marks the ticket sold. The write is a single conditional update keyed
    /// on the current `is_sold` value, so of two concurrent sales exactly one
    /// sees an affected row.
    pub async fn sell_ticket(&self, ticket_id: i32) -> AppResult<bool> {
        let result = ticket_entity::Entity::update_many()
            .col_expr(ticket_entity::Column::IsSold, Expr::value(true))
            .col_expr(
                ticket_entity::Column::PurchaseDate,
                Expr::value(Some(Utc::now())),
            )
            .filter(ticket_entity::Column::Id.eq(ticket_id))
            .filter(ticket_entity::Column::IsSold.eq(false))
            .exec(&self.pool)
            .await?;

        let sold = result.rows_affected == 1;
        if sold {
            log::info!("Sold ticket {ticket_id}");
        }
        Ok(sold)
    }

    /// Returns a sold ticket, releasing its seat. Refused once less than a
    /// day remains before the performance. Clears the purchase date.
    pub async fn return_ticket(&self, ticket_id: i32) -> AppResult<bool> {
        let ticket = match self.tickets.get_by_id(ticket_id).await? {
            Some(ticket) => ticket,
            None => return Ok(false),
        };
        if !ticket.is_sold {
            return Ok(false);
        }

        let performance = match self.performances.get_by_id(ticket.performance_id).await? {
            Some(performance) => performance,
            None => return Ok(false),
        };
        if performance.performance_date - Duration::days(1) < Utc::now() {
            log::warn!(
                "Refused return of ticket {ticket_id}: performance {} starts within a day",
                performance.id
            );
            return Ok(false);
        }

        let result = ticket_entity::Entity::update_many()
            .col_expr(ticket_entity::Column::IsSold, Expr::value(false))
            .col_expr(
                ticket_entity::Column::PurchaseDate,
                Expr::value(None::<chrono::DateTime<Utc>>),
            )
            .filter(ticket_entity::Column::Id.eq(ticket_id))
            .filter(ticket_entity::Column::IsSold.eq(true))
            .exec(&self.pool)
            .await?;

        let returned = result.rows_affected == 1;
        if returned {
            log::info!("Returned ticket {ticket_id}");
        }
        Ok(returned)
    }

    /// Seating chart grouped by row ascending, seats ascending within a row.
    pub async fn get_seating_plan(&self, performance_id: i32) -> AppResult<SeatingPlanResponse> {
        let tickets = self
            .tickets
            .find(ticket_entity::Column::PerformanceId.eq(performance_id))
            .await?;
        let seats = self.seat_map(&tickets).await?;

        let total_seats = tickets.len() as i64;
        let sold_seats = tickets.iter().filter(|ticket| ticket.is_sold).count() as i64;
        let vip_seats = tickets
            .iter()
            .filter(|ticket| {
                seats
                    .get(&ticket.seat_id)
                    .map(|seat| seat.is_vip)
                    .unwrap_or(false)
            })
            .count() as i64;

        let mut rows: BTreeMap<i32, Vec<SeatingPlanSeat>> = BTreeMap::new();
        for ticket in &tickets {
            if let Some(seat) = seats.get(&ticket.seat_id) {
                rows.entry(seat.row).or_default().push(SeatingPlanSeat {
                    seat_number: seat.number,
                    is_vip: seat.is_vip,
                    is_available: !ticket.is_sold,
                    price_cents: ticket.price_cents,
                    ticket_id: ticket.id,
                });
            }
        }

        let rows = rows
            .into_iter()
            .map(|(row, mut row_seats)| {
                row_seats.sort_by_key(|seat| seat.seat_number);
                SeatingPlanRow {
                    row,
                    seats: row_seats,
                }
            })
            .collect();

        Ok(SeatingPlanResponse {
            performance_id,
            total_seats,
            available_seats: total_seats - sold_seats,
            sold_seats,
            vip_seats,
            rows,
        })
    }

    pub async fn get_performance_statistics(
        &self,
        performance_id: i32,
    ) -> AppResult<TicketStatistics> {
        let tickets = self
            .tickets
            .find(ticket_entity::Column::PerformanceId.eq(performance_id))
            .await?;
        Ok(statistics_from(&tickets))
    }

    pub async fn get_overall_statistics(&self) -> AppResult<TicketStatistics> {
        let tickets = self.tickets.get_all().await?;
        Ok(statistics_from(&tickets))
    }

    pub async fn delete_ticket(&self, id: i32) -> AppResult<()> {
        let ticket = self
            .tickets
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {id} not found")))?;
        self.tickets.remove(ticket).await?;
        log::info!("Deleted ticket {id}");
        Ok(())
    }

    async fn with_seats(
        &self,
        tickets: Vec<ticket_entity::Model>,
    ) -> AppResult<Vec<TicketWithSeatResponse>> {
        if tickets.is_empty() {
            return Ok(Vec::new());
        }
        let seats = self.seat_map(&tickets).await?;

        Ok(tickets
            .into_iter()
            .filter_map(|ticket| {
                seats.get(&ticket.seat_id).map(|seat| TicketWithSeatResponse {
                    id: ticket.id,
                    price_cents: ticket.price_cents,
                    is_sold: ticket.is_sold,
                    purchase_date: ticket.purchase_date,
                    seat: seat.clone().into(),
                })
            })
            .collect())
    }

    async fn seat_map(
        &self,
        tickets: &[ticket_entity::Model],
    ) -> AppResult<HashMap<i32, seat_entity::Model>> {
        if tickets.is_empty() {
            return Ok(HashMap::new());
        }
        let seat_ids: Vec<i32> = tickets.iter().map(|ticket| ticket.seat_id).collect();
        Ok(self
            .seats
            .find(seat_entity::Column::Id.is_in(seat_ids))
            .await?
            .into_iter()
            .map(|seat| (seat.id, seat))
            .collect())
    }
}

fn statistics_from(tickets: &[ticket_entity::Model]) -> TicketStatistics {
    let total_tickets = tickets.len() as i64;
    let sold_tickets = tickets.iter().filter(|ticket| ticket.is_sold).count() as i64;
    let total_revenue_cents: i64 = tickets
        .iter()
        .filter(|ticket| ticket.is_sold)
        .map(|ticket| ticket.price_cents)
        .sum();

    let average_price_cents = if total_tickets == 0 {
        0.0
    } else {
        let price_sum: i64 = tickets.iter().map(|ticket| ticket.price_cents).sum();
        round_two_decimals(price_sum as f64 / total_tickets as f64)
    };
    let occupancy_rate = if total_tickets == 0 {
        0.0
    } else {
        round_two_decimals(sold_tickets as f64 / total_tickets as f64 * 100.0)
    };

    TicketStatistics {
        total_tickets,
        sold_tickets,
        available_tickets: total_tickets - sold_tickets,
        total_revenue_cents,
        average_price_cents,
        occupancy_rate,
    }
}
