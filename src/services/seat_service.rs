use std::collections::HashSet;

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, IntoActiveModel, Set};

use crate::entities::{hall_entity, seat_entity, ticket_entity};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;

#[derive(Clone)]
pub struct SeatService {
    seats: Repository<seat_entity::Entity>,
    halls: Repository<hall_entity::Entity>,
    tickets: Repository<ticket_entity::Entity>,
}

impl SeatService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            seats: Repository::new(pool.clone()),
            halls: Repository::new(pool.clone()),
            tickets: Repository::new(pool),
        }
    }

    pub async fn get_seat_by_id(&self, id: i32) -> AppResult<SeatResponse> {
        let seat = self
            .seats
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Seat {id} not found")))?;
        Ok(seat.into())
    }

    /// Seats whose ticket for the performance is still unsold, ordered by
    /// (row, number). Empty when no tickets have been generated.
    pub async fn get_available_seats_for_performance(
        &self,
        performance_id: i32,
    ) -> AppResult<Vec<SeatResponse>> {
        let unsold = self
            .tickets
            .find(
                Condition::all()
                    .add(ticket_entity::Column::PerformanceId.eq(performance_id))
                    .add(ticket_entity::Column::IsSold.eq(false)),
            )
            .await?;
        if unsold.is_empty() {
            return Ok(Vec::new());
        }

        let seat_ids: Vec<i32> = unsold.iter().map(|ticket| ticket.seat_id).collect();
        let mut seats = self
            .seats
            .find(seat_entity::Column::Id.is_in(seat_ids))
            .await?;
        seats.sort_by_key(|seat| (seat.row, seat.number));

        Ok(seats
            .into_iter()
            .map(|seat| SeatResponse::from(seat).with_availability(true))
            .collect())
    }

    /// Generates a rows x seats_per_row grid for the hall, flagging the
    /// listed coordinates VIP. Refused when the hall already has seats.
    pub async fn create_seats_for_hall(
        &self,
        hall_id: i32,
        request: CreateSeatLayoutRequest,
    ) -> AppResult<u64> {
        self.halls
            .get_by_id(hall_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {hall_id} not found")))?;

        if !(1..=100).contains(&request.rows) || !(1..=100).contains(&request.seats_per_row) {
            return Err(AppError::ValidationError(
                "Seat layout must be between 1x1 and 100x100".to_string(),
            ));
        }

        let existing = self
            .seats
            .count(seat_entity::Column::HallId.eq(hall_id))
            .await?;
        if existing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Hall {hall_id} already has {existing} seats"
            )));
        }

        let vip: HashSet<(i32, i32)> = request
            .vip_seats
            .iter()
            .map(|location| (location.row, location.number))
            .collect();

        let mut batch = Vec::new();
        for row in 1..=request.rows {
            for number in 1..=request.seats_per_row {
                batch.push(seat_entity::ActiveModel {
                    hall_id: Set(hall_id),
                    row: Set(row),
                    number: Set(number),
                    is_vip: Set(vip.contains(&(row, number))),
                    ..Default::default()
                });
            }
        }

        let created = self.seats.add_many(batch).await?;
        log::info!("Created {created} seats for hall {hall_id}");
        Ok(created)
    }

    pub async fn create_seat(&self, request: CreateSeatRequest) -> AppResult<SeatResponse> {
        if request.row < 1 || request.number < 1 {
            return Err(AppError::ValidationError(
                "Seat row and number must be positive".to_string(),
            ));
        }
        self.halls
            .get_by_id(request.hall_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {} not found", request.hall_id)))?;

        let duplicate = self
            .seats
            .get_one(
                Condition::all()
                    .add(seat_entity::Column::HallId.eq(request.hall_id))
                    .add(seat_entity::Column::Row.eq(request.row))
                    .add(seat_entity::Column::Number.eq(request.number)),
            )
            .await?;
        if duplicate.is_some() {
            return Err(AppError::InvalidOperation(format!(
                "Hall {} already has a seat at row {} number {}",
                request.hall_id, request.row, request.number
            )));
        }

        let seat = self
            .seats
            .add(seat_entity::ActiveModel {
                hall_id: Set(request.hall_id),
                row: Set(request.row),
                number: Set(request.number),
                is_vip: Set(request.is_vip),
                ..Default::default()
            })
            .await?;
        Ok(seat.into())
    }

    pub async fn update_seat(&self, id: i32, request: UpdateSeatRequest) -> AppResult<SeatResponse> {
        let seat = self
            .seats
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Seat {id} not found")))?;

        let mut active = seat.into_active_model();
        if let Some(row) = request.row {
            if row < 1 {
                return Err(AppError::ValidationError(
                    "Seat row must be positive".to_string(),
                ));
            }
            active.row = Set(row);
        }
        if let Some(number) = request.number {
            if number < 1 {
                return Err(AppError::ValidationError(
                    "Seat number must be positive".to_string(),
                ));
            }
            active.number = Set(number);
        }
        if let Some(is_vip) = request.is_vip {
            active.is_vip = Set(is_vip);
        }

        Ok(self.seats.update(active).await?.into())
    }

    pub async fn delete_seat(&self, id: i32) -> AppResult<()> {
        let seat = self
            .seats
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Seat {id} not found")))?;

        let referencing = self
            .tickets
            .count(ticket_entity::Column::SeatId.eq(id))
            .await?;
        if referencing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Seat {id} is referenced by {referencing} tickets"
            )));
        }

        self.seats.remove(seat).await?;
        Ok(())
    }
}
