use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, Set};

use crate::entities::{hall_entity, performance_entity, seat_entity};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;

#[derive(Clone)]
pub struct HallService {
    halls: Repository<hall_entity::Entity>,
    seats: Repository<seat_entity::Entity>,
    performances: Repository<performance_entity::Entity>,
}

impl HallService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            halls: Repository::new(pool.clone()),
            seats: Repository::new(pool.clone()),
            performances: Repository::new(pool),
        }
    }

    pub async fn get_all_halls(&self) -> AppResult<Vec<HallListResponse>> {
        let halls = self.halls.get_all().await?;
        let performances = self.performances.get_all().await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for performance in &performances {
            *counts.entry(performance.hall_id).or_default() += 1;
        }

        Ok(halls
            .into_iter()
            .map(|hall| HallListResponse {
                performances_count: counts.get(&hall.id).copied().unwrap_or(0),
                id: hall.id,
                name: hall.name,
                capacity: hall.capacity,
            })
            .collect())
    }

    pub async fn get_hall_by_id(&self, id: i32) -> AppResult<HallResponse> {
        let hall = self
            .halls
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {id} not found")))?;
        Ok(hall.into())
    }

    /// All seats of the hall, ordered by (row, number).
    pub async fn get_hall_seats(&self, id: i32) -> AppResult<Vec<SeatResponse>> {
        self.halls
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {id} not found")))?;

        let mut seats = self.seats.find(seat_entity::Column::HallId.eq(id)).await?;
        seats.sort_by_key(|seat| (seat.row, seat.number));
        Ok(seats.into_iter().map(SeatResponse::from).collect())
    }

    pub async fn create_hall(&self, request: CreateHallRequest) -> AppResult<HallResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Hall name must not be empty".to_string(),
            ));
        }
        if request.capacity <= 0 {
            return Err(AppError::ValidationError(
                "Hall capacity must be positive".to_string(),
            ));
        }

        let hall = self
            .halls
            .add(hall_entity::ActiveModel {
                name: Set(request.name),
                capacity: Set(request.capacity),
                description: Set(request.description),
                ..Default::default()
            })
            .await?;

        log::info!("Created hall {} ({})", hall.id, hall.name);
        Ok(hall.into())
    }

    pub async fn update_hall(&self, id: i32, request: UpdateHallRequest) -> AppResult<HallResponse> {
        let hall = self
            .halls
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {id} not found")))?;

        let mut active = hall.into_active_model();
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Hall name must not be empty".to_string(),
                ));
            }
            active.name = Set(name);
        }
        if let Some(capacity) = request.capacity {
            if capacity <= 0 {
                return Err(AppError::ValidationError(
                    "Hall capacity must be positive".to_string(),
                ));
            }
            active.capacity = Set(capacity);
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }

        Ok(self.halls.update(active).await?.into())
    }

    /// Deleting a hall cascades to its seats; refused while performances
    /// still reference it.
    pub async fn delete_hall(&self, id: i32) -> AppResult<()> {
        let hall = self
            .halls
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {id} not found")))?;

        let referencing = self
            .performances
            .count(performance_entity::Column::HallId.eq(id))
            .await?;
        if referencing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Hall {id} is referenced by {referencing} performances"
            )));
        }

        self.halls.remove(hall).await?;
        log::info!("Deleted hall {id}");
        Ok(())
    }
}
