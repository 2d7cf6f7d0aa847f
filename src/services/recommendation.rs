use crate::models::{ClubModel, Recommendation, Shot};

/// Maps a session's recorded shots to a club adjustment recommendation.
///
/// The fitting algorithm itself is an extension point: the router takes
/// any implementation at construction time, and the default shipped here
/// deliberately recommends no change rather than guessing.
pub trait AdjustmentRecommender: Send + Sync {
    fn recommend(&self, club_model: &ClubModel, shots: &[Shot]) -> Recommendation;
}

/// Placeholder recommender used until a real fitting model is supplied.
///
/// Restates the adjustment options the club offers and leaves both
/// settings untouched; it never interprets the launch-monitor numbers.
#[derive(Debug, Default, Clone)]
pub struct BaselineRecommender;

impl AdjustmentRecommender for BaselineRecommender {
    fn recommend(&self, club_model: &ClubModel, shots: &[Shot]) -> Recommendation {
        Recommendation {
            club_model: club_model.name.clone(),
            summary: format!(
                "Recorded {} shots with the {}. Loft sleeve options: {}. Sliding weight options: {}. Keeping the current configuration.",
                shots.len(),
                club_model.name,
                club_model.loft_sleeve_adjustments,
                club_model.sliding_weight_adjustments,
            ),
            loft_sleeve_setting: None,
            sliding_weight_setting: None,
        }
    }
}
