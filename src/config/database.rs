use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::env;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        // mode=rwc creates the database file on first run
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://club_fitting.db?mode=rwc".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Ok(DatabaseConfig {
            database_url,
            max_connections,
        })
    }

    pub async fn create_pool(&self) -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await?;

        Ok(pool)
    }
}

/// Create the schema if it does not exist yet. Idempotent, runs at every
/// startup; there is no separate migration scheme.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // SQLite leaves foreign keys off unless asked
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS club_models (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            loft_sleeve_adjustments TEXT NOT NULL,
            sliding_weight_adjustments TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shots (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id),
            club_model_id TEXT NOT NULL REFERENCES club_models(id),
            club_head_speed REAL NOT NULL,
            ball_speed REAL NOT NULL,
            launch_angle REAL NOT NULL,
            spin_rate REAL NOT NULL,
            peak_height REAL NOT NULL,
            land_angle REAL NOT NULL,
            club_path REAL NOT NULL,
            club_face_angle REAL NOT NULL,
            attack_angle REAL NOT NULL,
            ft_off_line REAL NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shots_club_model_id ON shots(club_model_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shots_user_id ON shots(user_id)")
        .execute(pool)
        .await?;

    Ok(())
}
