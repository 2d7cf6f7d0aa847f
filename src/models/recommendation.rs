use serde::{Deserialize, Serialize};

/// A presentable club adjustment recommendation for a fitting session.
///
/// The settings are optional: a recommender that has nothing to suggest
/// for an adjustment axis leaves it as `None` and the results page omits
/// that line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub club_model: String,
    pub summary: String,
    pub loft_sleeve_setting: Option<String>,
    pub sliding_weight_setting: Option<String>,
}
