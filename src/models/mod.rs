// Data models for fitting sessions

pub mod club_model;
pub mod recommendation;
pub mod shot;
pub mod user;

pub use club_model::*;
pub use recommendation::*;
pub use shot::*;
pub use user::*;
