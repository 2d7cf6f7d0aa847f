use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An adjustable club product being fitted. Rows are seeded at startup;
/// the intake flow only ever looks them up by name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClubModel {
    pub id: Uuid,
    pub name: String,
    pub loft_sleeve_adjustments: String,
    pub sliding_weight_adjustments: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClubModel {
    pub name: String,
    pub loft_sleeve_adjustments: String,
    pub sliding_weight_adjustments: String,
}
