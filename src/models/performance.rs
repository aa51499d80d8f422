use crate::entities::performance_entity;
use crate::models::author::AuthorResponse;
use crate::models::genre::GenreResponse;
use crate::models::hall::HallResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PerformanceResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub performance_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub base_price_cents: i64,
    pub author_id: i32,
    pub genre_id: i32,
    pub hall_id: i32,
}

/// List row decorated with the names of the referenced author, genre and hall.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PerformanceListResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub performance_date: DateTime<Utc>,
    pub base_price_cents: i64,
    pub author_name: String,
    pub genre_name: String,
    pub hall_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PerformanceDetailResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub performance_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub base_price_cents: i64,
    pub author: AuthorResponse,
    pub genre: GenreResponse,
    pub hall: HallResponse,
    pub total_tickets: i64,
    pub sold_tickets: i64,
    pub available_tickets: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePerformanceRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub performance_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub base_price_cents: i64,
    pub author_id: i32,
    pub genre_id: i32,
    pub hall_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePerformanceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub performance_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub base_price_cents: Option<i64>,
    pub author_id: Option<i32>,
    pub genre_id: Option<i32>,
    pub hall_id: Option<i32>,
}

impl From<performance_entity::Model> for PerformanceResponse {
    fn from(m: performance_entity::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            performance_date: m.performance_date,
            duration_minutes: m.duration_minutes,
            base_price_cents: m.base_price_cents,
            author_id: m.author_id,
            genre_id: m.genre_id,
            hall_id: m.hall_id,
        }
    }
}
