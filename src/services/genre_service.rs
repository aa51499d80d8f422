use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, Set};

use crate::entities::{genre_entity, performance_entity};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;

#[derive(Clone)]
pub struct GenreService {
    genres: Repository<genre_entity::Entity>,
    performances: Repository<performance_entity::Entity>,
}

impl GenreService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            genres: Repository::new(pool.clone()),
            performances: Repository::new(pool),
        }
    }

    pub async fn get_all_genres(&self) -> AppResult<Vec<GenreListResponse>> {
        let genres = self.genres.get_all().await?;
        let performances = self.performances.get_all().await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for performance in &performances {
            *counts.entry(performance.genre_id).or_default() += 1;
        }

        Ok(genres
            .into_iter()
            .map(|genre| GenreListResponse {
                performances_count: counts.get(&genre.id).copied().unwrap_or(0),
                id: genre.id,
                name: genre.name,
                description: genre.description,
            })
            .collect())
    }

    pub async fn get_genre_by_id(&self, id: i32) -> AppResult<GenreResponse> {
        let genre = self
            .genres
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {id} not found")))?;
        Ok(genre.into())
    }

    pub async fn create_genre(&self, request: CreateGenreRequest) -> AppResult<GenreResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Genre name must not be empty".to_string(),
            ));
        }

        let genre = self
            .genres
            .add(genre_entity::ActiveModel {
                name: Set(request.name),
                description: Set(request.description),
                ..Default::default()
            })
            .await?;

        log::info!("Created genre {} ({})", genre.id, genre.name);
        Ok(genre.into())
    }

    pub async fn update_genre(
        &self,
        id: i32,
        request: UpdateGenreRequest,
    ) -> AppResult<GenreResponse> {
        let genre = self
            .genres
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {id} not found")))?;

        let mut active = genre.into_active_model();
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Genre name must not be empty".to_string(),
                ));
            }
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(description);
        }

        Ok(self.genres.update(active).await?.into())
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        let genre = self
            .genres
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {id} not found")))?;

        let referencing = self
            .performances
            .count(performance_entity::Column::GenreId.eq(id))
            .await?;
        if referencing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Genre {id} is referenced by {referencing} performances"
            )));
        }

        self.genres.remove(genre).await?;
        log::info!("Deleted genre {id}");
        Ok(())
    }
}
