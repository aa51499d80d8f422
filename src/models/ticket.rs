use crate::entities::ticket_entity;
use crate::models::performance::PerformanceListResponse;
use crate::models::seat::SeatResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    pub id: i32,
    pub performance_id: i32,
    pub seat_id: i32,
    pub price_cents: i64,
    pub is_sold: bool,
    pub purchase_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketWithSeatResponse {
    pub id: i32,
    pub price_cents: i64,
    pub is_sold: bool,
    pub purchase_date: Option<DateTime<Utc>>,
    pub seat: SeatResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketDetailResponse {
    pub id: i32,
    pub price_cents: i64,
    pub is_sold: bool,
    pub purchase_date: Option<DateTime<Utc>>,
    pub seat: SeatResponse,
    pub performance: PerformanceListResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PriceRangeQuery {
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatingPlanSeat {
    pub seat_number: i32,
    pub is_vip: bool,
    pub is_available: bool,
    pub price_cents: i64,
    pub ticket_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatingPlanRow {
    pub row: i32,
    pub seats: Vec<SeatingPlanSeat>,
}

/// Row-and-seat-ordered chart of a performance's tickets with summary counts.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeatingPlanResponse {
    pub performance_id: i32,
    pub total_seats: i64,
    pub available_seats: i64,
    pub sold_seats: i64,
    pub vip_seats: i64,
    pub rows: Vec<SeatingPlanRow>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketStatistics {
    pub total_tickets: i64,
    pub sold_tickets: i64,
    pub available_tickets: i64,
    pub total_revenue_cents: i64,
    pub average_price_cents: f64,
    pub occupancy_rate: f64,
}

impl From<ticket_entity::Model> for TicketResponse {
    fn from(m: ticket_entity::Model) -> Self {
        Self {
            id: m.id,
            performance_id: m.performance_id,
            seat_id: m.seat_id,
            price_cents: m.price_cents,
            is_sold: m.is_sold,
            purchase_date: m.purchase_date,
        }
    }
}
