use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Number of shots recorded per fitting session
pub const SHOTS_PER_SESSION: usize = 3;

/// One recorded swing's launch-monitor measurements, linked to the user
/// who hit it and the club model it was hit with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub club_model_id: Uuid,
    pub club_head_speed: f64,
    pub ball_speed: f64,
    pub launch_angle: f64,
    pub spin_rate: f64,
    pub peak_height: f64,
    pub land_angle: f64,
    pub club_path: f64,
    pub club_face_angle: f64,
    pub attack_angle: f64,
    pub ft_off_line: f64,
    pub created_at: DateTime<Utc>,
}

/// The ten launch-monitor metrics for a single shot, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotMeasurements {
    pub club_head_speed: f64,
    pub ball_speed: f64,
    pub launch_angle: f64,
    pub spin_rate: f64,
    pub peak_height: f64,
    pub land_angle: f64,
    pub club_path: f64,
    pub club_face_angle: f64,
    pub attack_angle: f64,
    pub ft_off_line: f64,
}
