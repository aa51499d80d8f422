use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, Set};

use crate::entities::{author_entity, genre_entity, hall_entity, performance_entity, ticket_entity};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;

#[derive(Clone)]
pub struct PerformanceService {
    performances: Repository<performance_entity::Entity>,
    authors: Repository<author_entity::Entity>,
    genres: Repository<genre_entity::Entity>,
    halls: Repository<hall_entity::Entity>,
    tickets: Repository<ticket_entity::Entity>,
}

impl PerformanceService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            performances: Repository::new(pool.clone()),
            authors: Repository::new(pool.clone()),
            genres: Repository::new(pool.clone()),
            halls: Repository::new(pool.clone()),
            tickets: Repository::new(pool),
        }
    }

    pub async fn get_all_performances(&self) -> AppResult<Vec<PerformanceListResponse>> {
        let performances = self.performances.get_all().await?;
        self.to_list_responses(performances).await
    }

    pub async fn get_upcoming_performances(&self) -> AppResult<Vec<PerformanceListResponse>> {
        let mut performances = self
            .performances
            .find(performance_entity::Column::PerformanceDate.gt(Utc::now()))
            .await?;
        performances.sort_by_key(|performance| performance.performance_date);
        self.to_list_responses(performances).await
    }

    pub async fn get_performances_by_genre(
        &self,
        genre_id: i32,
    ) -> AppResult<Vec<PerformanceListResponse>> {
        let performances = self
            .performances
            .find(performance_entity::Column::GenreId.eq(genre_id))
            .await?;
        self.to_list_responses(performances).await
    }

    pub async fn get_performances_by_author(
        &self,
        author_id: i32,
    ) -> AppResult<Vec<PerformanceListResponse>> {
        let performances = self
            .performances
            .find(performance_entity::Column::AuthorId.eq(author_id))
            .await?;
        self.to_list_responses(performances).await
    }

    pub async fn get_performances_by_hall(
        &self,
        hall_id: i32,
    ) -> AppResult<Vec<PerformanceListResponse>> {
        let performances = self
            .performances
            .find(performance_entity::Column::HallId.eq(hall_id))
            .await?;
        self.to_list_responses(performances).await
    }

    pub async fn get_performance_by_id(&self, id: i32) -> AppResult<PerformanceDetailResponse> {
        let performance = self
            .performances
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Performance {id} not found")))?;

        let author = self
            .authors
            .get_by_id(performance.author_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Author {} referenced by performance {id} is missing",
                    performance.author_id
                ))
            })?;
        let genre = self
            .genres
            .get_by_id(performance.genre_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Genre {} referenced by performance {id} is missing",
                    performance.genre_id
                ))
            })?;
        let hall = self
            .halls
            .get_by_id(performance.hall_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Hall {} referenced by performance {id} is missing",
                    performance.hall_id
                ))
            })?;

        let tickets = self
            .tickets
            .find(ticket_entity::Column::PerformanceId.eq(id))
            .await?;
        let total_tickets = tickets.len() as i64;
        let sold_tickets = tickets.iter().filter(|ticket| ticket.is_sold).count() as i64;

        Ok(PerformanceDetailResponse {
            id: performance.id,
            title: performance.title,
            description: performance.description,
            performance_date: performance.performance_date,
            duration_minutes: performance.duration_minutes,
            base_price_cents: performance.base_price_cents,
            author: author.into(),
            genre: genre.into(),
            hall: hall.into(),
            total_tickets,
            sold_tickets,
            available_tickets: total_tickets - sold_tickets,
        })
    }

    pub async fn create_performance(
        &self,
        request: CreatePerformanceRequest,
    ) -> AppResult<PerformanceResponse> {
        if request.title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Performance title must not be empty".to_string(),
            ));
        }
        if request.duration_minutes <= 0 {
            return Err(AppError::ValidationError(
                "Performance duration must be positive".to_string(),
            ));
        }
        if request.base_price_cents < 0 {
            return Err(AppError::ValidationError(
                "Base price must not be negative".to_string(),
            ));
        }

        self.authors
            .get_by_id(request.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", request.author_id)))?;
        self.genres
            .get_by_id(request.genre_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", request.genre_id)))?;
        self.halls
            .get_by_id(request.hall_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hall {} not found", request.hall_id)))?;

        let performance = self
            .performances
            .add(performance_entity::ActiveModel {
                title: Set(request.title),
                description: Set(request.description),
                performance_date: Set(request.performance_date),
                duration_minutes: Set(request.duration_minutes),
                base_price_cents: Set(request.base_price_cents),
                author_id: Set(request.author_id),
                genre_id: Set(request.genre_id),
                hall_id: Set(request.hall_id),
                ..Default::default()
            })
            .await?;

        log::info!(
            "Created performance {} ({}) in hall {}",
            performance.id,
            performance.title,
            performance.hall_id
        );
        Ok(performance.into())
    }

    pub async fn update_performance(
        &self,
        id: i32,
        request: UpdatePerformanceRequest,
    ) -> AppResult<PerformanceResponse> {
        let performance = self
            .performances
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Performance {id} not found")))?;

        let mut active = performance.into_active_model();
        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Performance title must not be empty".to_string(),
                ));
            }
            active.title = Set(title);
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }
        if let Some(performance_date) = request.performance_date {
            active.performance_date = Set(performance_date);
        }
        if let Some(duration_minutes) = request.duration_minutes {
            if duration_minutes <= 0 {
                return Err(AppError::ValidationError(
                    "Performance duration must be positive".to_string(),
                ));
            }
            active.duration_minutes = Set(duration_minutes);
        }
        if let Some(base_price_cents) = request.base_price_cents {
            if base_price_cents < 0 {
                return Err(AppError::ValidationError(
                    "Base price must not be negative".to_string(),
                ));
            }
            active.base_price_cents = Set(base_price_cents);
        }
        if let Some(author_id) = request.author_id {
            self.authors
                .get_by_id(author_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Author {author_id} not found")))?;
            active.author_id = Set(author_id);
        }
        if let Some(genre_id) = request.genre_id {
            self.genres
                .get_by_id(genre_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Genre {genre_id} not found")))?;
            active.genre_id = Set(genre_id);
        }
        if let Some(hall_id) = request.hall_id {
            self.halls
                .get_by_id(hall_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Hall {hall_id} not found")))?;
            active.hall_id = Set(hall_id);
        }

        Ok(self.performances.update(active).await?.into())
    }

    /// Deleting a performance takes its tickets with it.
    pub async fn delete_performance(&self, id: i32) -> AppResult<()> {
        let performance = self
            .performances
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Performance {id} not found")))?;

        let removed = self
            .tickets
            .remove_many(ticket_entity::Column::PerformanceId.eq(id))
            .await?;
        self.performances.remove(performance).await?;
        log::info!("Deleted performance {id} and {removed} tickets");
        Ok(())
    }

    async fn to_list_responses(
        &self,
        performances: Vec<performance_entity::Model>,
    ) -> AppResult<Vec<PerformanceListResponse>> {
        if performances.is_empty() {
            return Ok(Vec::new());
        }

        let authors: HashMap<i32, String> = self
            .authors
            .get_all()
            .await?
            .into_iter()
            .map(|author| (author.id, author.full_name))
            .collect();
        let genres: HashMap<i32, String> = self
            .genres
            .get_all()
            .await?
            .into_iter()
            .map(|genre| (genre.id, genre.name))
            .collect();
        let halls: HashMap<i32, String> = self
            .halls
            .get_all()
            .await?
            .into_iter()
            .map(|hall| (hall.id, hall.name))
            .collect();

        Ok(performances
            .into_iter()
            .map(|performance| PerformanceListResponse {
                author_name: authors
                    .get(&performance.author_id)
                    .cloned()
                    .unwrap_or_default(),
                genre_name: genres
                    .get(&performance.genre_id)
                    .cloned()
                    .unwrap_or_default(),
                hall_name: halls.get(&performance.hall_id).cloned().unwrap_or_default(),
                id: performance.id,
                title: performance.title,
                description: performance.description,
                performance_date: performance.performance_date,
                base_price_cents: performance.base_price_cents,
            })
            .collect())
    }
}
