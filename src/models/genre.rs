use crate::entities::genre_entity;
use crate::models::performance::PerformanceListResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenreListResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub performances_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenreWithPerformancesResponse {
    pub genre: GenreResponse,
    pub performances: Vec<PerformanceListResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateGenreRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateGenreRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<genre_entity::Model> for GenreResponse {
    fn from(m: genre_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
