use crate::entities::seat_entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatResponse {
    pub id: i32,
    pub hall_id: i32,
    pub row: i32,
    pub number: i32,
    pub is_vip: bool,
    /// Only populated by availability queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSeatRequest {
    pub hall_id: i32,
    pub row: i32,
    pub number: i32,
    #[serde(default)]
    pub is_vip: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateSeatRequest {
    pub row: Option<i32>,
    pub number: Option<i32>,
    pub is_vip: Option<bool>,
}

impl SeatResponse {
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }
}

impl From<seat_entity::Model> for SeatResponse {
    fn from(m: seat_entity::Model) -> Self {
        Self {
            id: m.id,
            hall_id: m.hall_id,
            row: m.row,
            number: m.number,
            is_vip: m.is_vip,
            is_available: None,
        }
    }
}
