use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ClubModel, CreateUser, Shot, ShotMeasurements, User};

/// Orchestrates the intake of one fitting session: a new user plus the
/// session's shots, written in a single transaction so a failure part way
/// through leaves no orphaned user behind.
#[derive(Clone)]
pub struct FittingService {
    db: SqlitePool,
}

impl FittingService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn record_session(
        &self,
        club_model: &ClubModel,
        user_data: CreateUser,
        measurements: &[ShotMeasurements],
    ) -> Result<(User, Vec<Shot>)> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: user_data.name,
            email: user_data.email,
            created_at: now,
        };

        let mut tx = self.db.begin().await?;

        sqlx::query("INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.created_at)
            .execute(&mut *tx)
            .await?;

        let mut shots = Vec::with_capacity(measurements.len());
        for m in measurements {
            let shot = Shot {
                id: Uuid::new_v4(),
                user_id: user.id,
                club_model_id: club_model.id,
                club_head_speed: m.club_head_speed,
                ball_speed: m.ball_speed,
                launch_angle: m.launch_angle,
                spin_rate: m.spin_rate,
                peak_height: m.peak_height,
                land_angle: m.land_angle,
                club_path: m.club_path,
                club_face_angle: m.club_face_angle,
                attack_angle: m.attack_angle,
                ft_off_line: m.ft_off_line,
                created_at: now,
            };

            sqlx::query(
                r#"
                INSERT INTO shots (id, user_id, club_model_id,
                                   club_head_speed, ball_speed, launch_angle, spin_rate, peak_height,
                                   land_angle, club_path, club_face_angle, attack_angle, ft_off_line,
                                   created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(shot.id)
            .bind(shot.user_id)
            .bind(shot.club_model_id)
            .bind(shot.club_head_speed)
            .bind(shot.ball_speed)
            .bind(shot.launch_angle)
            .bind(shot.spin_rate)
            .bind(shot.peak_height)
            .bind(shot.land_angle)
            .bind(shot.club_path)
            .bind(shot.club_face_angle)
            .bind(shot.attack_angle)
            .bind(shot.ft_off_line)
            .bind(shot.created_at)
            .execute(&mut *tx)
            .await?;

            shots.push(shot);
        }

        tx.commit().await?;

        info!(
            "Recorded fitting session: user {} hit {} shots with {}",
            user.id,
            shots.len(),
            club_model.name
        );

        Ok((user, shots))
    }
}
