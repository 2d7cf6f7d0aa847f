use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use super::routes::AppState;
use crate::error::Result;
use crate::models::{ClubModel, Shot};

/// GET /club_models
///
/// The seeded catalog; this is where a client finds the names the intake
/// form accepts and the ids the shot listing takes.
pub async fn list_club_models(State(state): State<AppState>) -> Result<Json<Vec<ClubModel>>> {
    let club_models = state.club_model_service.list().await?;
    Ok(Json(club_models))
}

/// GET /club_models/:club_model_id/shots
///
/// Every shot recorded against the club model, as raw records. An id with
/// no shots returns an empty array.
pub async fn list_club_model_shots(
    State(state): State<AppState>,
    Path(club_model_id): Path<Uuid>,
) -> Result<Json<Vec<Shot>>> {
    let shots = state.shot_service.list_by_club_model(club_model_id).await?;
    Ok(Json(shots))
}
