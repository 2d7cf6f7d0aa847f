use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::CreateClubModel;
use crate::services::ClubModelService;

/// Seeds the club model catalog. The intake flow never creates club
/// models, it only resolves them by name, so the catalog has to exist
/// before the first fitting session comes in.
pub struct DatabaseSeeder {
    pool: SqlitePool,
}

impl DatabaseSeeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_club_models().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn seed_club_models(&self) -> Result<()> {
        let club_model_service = ClubModelService::new(self.pool.clone());

        let catalog = vec![
            CreateClubModel {
                name: "Driver X".to_string(),
                loft_sleeve_adjustments: "8.0 to 11.0 degrees in 0.5 degree steps".to_string(),
                sliding_weight_adjustments: "12g weight, heel / neutral / toe ports".to_string(),
            },
            CreateClubModel {
                name: "Apex Tour 9".to_string(),
                loft_sleeve_adjustments: "Plus or minus 1.5 degrees around 9.0".to_string(),
                sliding_weight_adjustments: "16g sliding weight on draw-fade track".to_string(),
            },
            CreateClubModel {
                name: "Max LS 10.5".to_string(),
                loft_sleeve_adjustments: "9.5 to 12.0 degrees in 0.75 degree steps".to_string(),
                sliding_weight_adjustments: "Fixed back weight, 2g or 14g screw".to_string(),
            },
        ];

        for club_model in catalog {
            if club_model_service
                .find_by_name(&club_model.name)
                .await?
                .is_none()
            {
                tracing::info!("Seeding club model {}", club_model.name);
                club_model_service.create(club_model).await?;
            }
        }

        Ok(())
    }
}
