use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ClubModel, CreateClubModel};

/// Repository for the pre-seeded club model catalog.
#[derive(Clone)]
pub struct ClubModelService {
    db: SqlitePool,
}

impl ClubModelService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: CreateClubModel) -> Result<ClubModel> {
        let club_model = ClubModel {
            id: Uuid::new_v4(),
            name: data.name,
            loft_sleeve_adjustments: data.loft_sleeve_adjustments,
            sliding_weight_adjustments: data.sliding_weight_adjustments,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO club_models (id, name, loft_sleeve_adjustments, sliding_weight_adjustments, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(club_model.id)
        .bind(&club_model.name)
        .bind(&club_model.loft_sleeve_adjustments)
        .bind(&club_model.sliding_weight_adjustments)
        .bind(club_model.created_at)
        .execute(&self.db)
        .await?;

        Ok(club_model)
    }

    /// Exact-name lookup used by the intake flow. Club models are seeded
    /// out of band, so a miss here means the submitted name is unknown.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ClubModel>> {
        let club_model = sqlx::query_as::<_, ClubModel>(
            "SELECT id, name, loft_sleeve_adjustments, sliding_weight_adjustments, created_at FROM club_models WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;

        Ok(club_model)
    }

    pub async fn list(&self) -> Result<Vec<ClubModel>> {
        let club_models = sqlx::query_as::<_, ClubModel>(
            "SELECT id, name, loft_sleeve_adjustments, sliding_weight_adjustments, created_at FROM club_models ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(club_models)
    }
}
