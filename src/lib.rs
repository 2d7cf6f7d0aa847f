//! Club fitting session recording service
//!
//! A small HTTP service for recording golf club-fitting sessions: one
//! submitted form becomes a user plus three launch-monitor shot records
//! linked to a pre-seeded club model, and recorded shots are queryable
//! per club model as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
