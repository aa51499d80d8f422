use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, IntoActiveModel, Set};

use crate::entities::{author_entity, performance_entity};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repository::Repository;

#[derive(Clone)]
pub struct AuthorService {
    authors: Repository<author_entity::Entity>,
    performances: Repository<performance_entity::Entity>,
}

impl AuthorService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            authors: Repository::new(pool.clone()),
            performances: Repository::new(pool),
        }
    }

    pub async fn get_all_authors(&self) -> AppResult<Vec<AuthorListResponse>> {
        let authors = self.authors.get_all().await?;
        let performances = self.performances.get_all().await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for performance in &performances {
            *counts.entry(performance.author_id).or_default() += 1;
        }

        Ok(authors
            .into_iter()
            .map(|author| AuthorListResponse {
                performances_count: counts.get(&author.id).copied().unwrap_or(0),
                id: author.id,
                full_name: author.full_name,
                birth_date: author.birth_date,
            })
            .collect())
    }

    pub async fn get_author_by_id(&self, id: i32) -> AppResult<AuthorResponse> {
        let author = self
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {id} not found")))?;
        Ok(author.into())
    }

    pub async fn create_author(&self, request: CreateAuthorRequest) -> AppResult<AuthorResponse> {
        if request.full_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Author full name must not be empty".to_string(),
            ));
        }

        let author = self
            .authors
            .add(author_entity::ActiveModel {
                full_name: Set(request.full_name),
                biography: Set(request.biography),
                birth_date: Set(request.birth_date),
                ..Default::default()
            })
            .await?;

        log::info!("Created author {} ({})", author.id, author.full_name);
        Ok(author.into())
    }

    pub async fn update_author(
        &self,
        id: i32,
        request: UpdateAuthorRequest,
    ) -> AppResult<AuthorResponse> {
        let author = self
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {id} not found")))?;

        let mut active = author.into_active_model();
        if let Some(full_name) = request.full_name {
            if full_name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Author full name must not be empty".to_string(),
                ));
            }
            active.full_name = Set(full_name);
        }
        if let Some(biography) = request.biography {
            active.biography = Set(biography);
        }
        if let Some(birth_date) = request.birth_date {
            active.birth_date = Set(Some(birth_date));
        }

        Ok(self.authors.update(active).await?.into())
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        let author = self
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {id} not found")))?;

        let referencing = self
            .performances
            .count(performance_entity::Column::AuthorId.eq(id))
            .await?;
        if referencing > 0 {
            return Err(AppError::InvalidOperation(format!(
                "Author {id} is referenced by {referencing} performances"
            )));
        }

        self.authors.remove(author).await?;
        log::info!("Deleted author {id}");
        Ok(())
    }
}
