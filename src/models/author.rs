use crate::entities::author_entity;
use crate::models::performance::PerformanceListResponse;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i32,
    pub full_name: String,
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
}

/// List row with the number of performances attributed to the author.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorListResponse {
    pub id: i32,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub performances_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorWithPerformancesResponse {
    pub author: AuthorResponse,
    pub performances: Vec<PerformanceListResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateAuthorRequest {
    pub full_name: Option<String>,
    pub biography: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<author_entity::Model> for AuthorResponse {
    fn from(m: author_entity::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            biography: m.biography,
            birth_date: m.birth_date,
        }
    }
}
