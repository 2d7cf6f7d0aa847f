// Business logic services

pub mod club_model_service;
pub mod fitting_service;
pub mod recommendation;
pub mod shot_service;

pub use club_model_service::ClubModelService;
pub use fitting_service::FittingService;
pub use recommendation::{AdjustmentRecommender, BaselineRecommender};
pub use shot_service::ShotService;
