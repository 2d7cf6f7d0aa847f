use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Shot;

/// Read-side repository for recorded shots.
#[derive(Clone)]
pub struct ShotService {
    db: SqlitePool,
}

impl ShotService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All shots recorded against one club model, oldest first. An id
    /// with no shots yields an empty list, not an error.
    pub async fn list_by_club_model(&self, club_model_id: Uuid) -> Result<Vec<Shot>> {
        let shots = sqlx::query_as::<_, Shot>(
            r#"
            SELECT id, user_id, club_model_id,
                   club_head_speed, ball_speed, launch_angle, spin_rate, peak_height,
                   land_angle, club_path, club_face_angle, attack_angle, ft_off_line,
                   created_at
            FROM shots
            WHERE club_model_id = ?
            ORDER BY created_at, id
            "#,
        )
        .bind(club_model_id)
        .fetch_all(&self.db)
        .await?;

        Ok(shots)
    }
}
