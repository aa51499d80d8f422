use crate::entities::hall_entity;
use crate::models::performance::PerformanceListResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HallResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HallListResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub performances_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HallWithPerformancesResponse {
    pub hall: HallResponse,
    pub performances: Vec<PerformanceListResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateHallRequest {
    pub name: String,
    pub capacity: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateHallRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
}

/// Grid layout for generating a hall's seats: `rows` x `seats_per_row`,
/// with the listed (row, number) coordinates flagged VIP.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSeatLayoutRequest {
    pub rows: i32,
    pub seats_per_row: i32,
    #[serde(default)]
    pub vip_seats: Vec<SeatLocation>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatLocation {
    pub row: i32,
    pub number: i32,
}

impl From<hall_entity::Model> for HallResponse {
    fn from(m: hall_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            capacity: m.capacity,
            description: m.description,
        }
    }
}
