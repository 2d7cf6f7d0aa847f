use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::fitting::{intake_form, submit_fitting};
use super::health::health_check;
use super::shots::{list_club_model_shots, list_club_models};
use crate::services::{
    AdjustmentRecommender, BaselineRecommender, ClubModelService, FittingService, ShotService,
};

/// Application state shared across HTTP handlers: the pool, the
/// repository services built over it, and the injected recommender.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub club_model_service: ClubModelService,
    pub fitting_service: FittingService,
    pub shot_service: ShotService,
    pub recommender: Arc<dyn AdjustmentRecommender>,
}

impl AppState {
    pub fn new(db: SqlitePool, recommender: Arc<dyn AdjustmentRecommender>) -> Self {
        Self {
            club_model_service: ClubModelService::new(db.clone()),
            fitting_service: FittingService::new(db.clone()),
            shot_service: ShotService::new(db.clone()),
            db,
            recommender,
        }
    }
}

/// Build the router with the default (stub) recommender.
pub fn create_routes(db: SqlitePool) -> Router {
    create_routes_with_recommender(db, Arc::new(BaselineRecommender))
}

/// Build the router with a caller-supplied recommender implementation.
pub fn create_routes_with_recommender(
    db: SqlitePool,
    recommender: Arc<dyn AdjustmentRecommender>,
) -> Router {
    let state = AppState::new(db, recommender);

    Router::new()
        .route("/", get(intake_form))
        .route("/results", post(submit_fitting))
        .route("/club_models", get(list_club_models))
        .route("/club_models/:club_model_id/shots", get(list_club_model_shots))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
